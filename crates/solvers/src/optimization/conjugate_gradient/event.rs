use paramfit_core::Vector;

/// Emitted by [`ConjugateGradient`](super::ConjugateGradient) after each
/// line-search step.
#[derive(Debug, Clone, Copy)]
pub struct Event<'a> {
    /// One-based iteration index.
    pub iter: usize,

    /// Parameters after the step.
    pub parameters: &'a Vector,

    /// Objective value after the step.
    pub objective: f64,

    /// Step length chosen by the line search.
    pub step: f64,

    /// Norm of the next search direction.
    pub direction_norm: f64,
}
