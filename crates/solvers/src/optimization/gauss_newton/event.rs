use paramfit_core::Vector;

/// Emitted by [`GaussNewton`](super::GaussNewton) after each update.
#[derive(Debug, Clone, Copy)]
pub struct Event<'a> {
    /// One-based iteration index.
    pub iter: usize,

    /// Parameters after the update.
    pub parameters: &'a Vector,

    /// Norm of the update `Δ`.
    pub step_norm: f64,

    /// Norm of the residual before the update.
    pub residual_norm: f64,
}
