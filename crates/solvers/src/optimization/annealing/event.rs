use paramfit_core::Vector;

/// Emitted by [`SimulatedAnnealing`](super::SimulatedAnnealing) after each
/// proposal.
#[derive(Debug, Clone, Copy)]
pub struct Event<'a> {
    /// One-based proposal index.
    pub iter: usize,

    /// Temperature after this proposal (lowered only on acceptance).
    pub temperature: f64,

    /// The proposed parameters.
    pub candidate: &'a Vector,

    /// Objective value at the candidate.
    pub objective: f64,

    /// Whether the candidate became the current point.
    pub accepted: bool,

    /// Best accepted objective value so far.
    pub best_objective: f64,
}
