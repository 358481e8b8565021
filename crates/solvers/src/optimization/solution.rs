use paramfit_core::Vector;

/// Indicates why an optimizer stopped.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Status {
    /// Converged according to the configured precision.
    Converged,

    /// Reached the iteration limit without converging.
    MaxIters,

    /// Simulated annealing cooled down to its minimum temperature.
    Cooled,

    /// Stopped early due to an observer decision.
    StoppedByObserver,
}

/// The result of an optimization.
#[derive(Debug, Clone, PartialEq)]
pub struct Solution {
    /// Final optimizer status.
    pub status: Status,

    /// Best parameters found.
    pub parameters: Vector,

    /// Objective value at the reported parameters.
    pub objective: f64,

    /// Iteration count when the optimizer finished.
    pub iters: usize,
}
