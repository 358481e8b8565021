use paramfit_core::Vector;

/// Emitted by [`MonteCarlo`](super::MonteCarlo) after each candidate is
/// evaluated.
#[derive(Debug, Clone, Copy)]
pub struct Event<'a> {
    /// One-based candidate index.
    pub iter: usize,

    /// The candidate parameters.
    pub candidate: &'a Vector,

    /// Objective value at the candidate.
    pub objective: f64,

    /// Best objective value seen so far, including this candidate.
    pub best_objective: f64,
}
