//! Objective functionals: scalar goodness-of-fit measures over bound functions.
//!
//! The three traits form a capability ladder. Optimizers state the rung they
//! need as a trait bound, so pairing an optimizer with an objective that lacks
//! the capability is rejected at compile time.

use crate::{Function, FunctionError, Matrix, ParameterGradient, Vector};

/// A scalar measure of how well a function fits.
pub trait Functional {
    /// Evaluates the functional on `function`.
    ///
    /// # Errors
    ///
    /// Propagates any error raised while evaluating `function`.
    fn value<F: Function + ?Sized>(&self, function: &F) -> Result<f64, FunctionError>;
}

/// A functional with a gradient with respect to the bound parameters.
pub trait DifferentiableFunctional: Functional {
    /// Returns `∂ value / ∂ parameters` for `function`.
    ///
    /// # Errors
    ///
    /// Propagates any error raised while evaluating `function` or its
    /// parameter gradient.
    fn gradient<F: ParameterGradient + ?Sized>(&self, function: &F)
    -> Result<Vector, FunctionError>;
}

/// A sum-of-squares functional exposing per-sample residuals.
///
/// The value is `Σ rᵢ²`, with `rᵢ` from [`residual`](Self::residual), and
/// [`jacobian`](Self::jacobian) has one row per residual and one column per
/// parameter.
pub trait LeastSquaresFunctional: Functional {
    /// Returns the residual vector `f(xᵢ) - yᵢ`.
    ///
    /// # Errors
    ///
    /// Propagates any error raised while evaluating `function`.
    fn residual<F: Function + ?Sized>(&self, function: &F) -> Result<Vector, FunctionError>;

    /// Returns the Jacobian of the residuals with respect to the parameters.
    ///
    /// # Errors
    ///
    /// Propagates any error raised while evaluating parameter gradients, and
    /// returns [`FunctionError::Shape`] if they have inconsistent lengths.
    fn jacobian<F: ParameterGradient + ?Sized>(&self, function: &F)
    -> Result<Matrix, FunctionError>;
}
