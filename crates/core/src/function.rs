//! Contracts for scalar functions and the parametric families that produce them.

use std::error::Error as StdError;

use thiserror::Error;

use crate::{ShapeError, Vector};

/// A scalar function of a point.
///
/// Bound functions are immutable: evaluating one never changes its result
/// for a later call.
pub trait Function {
    /// Evaluates the function at `point`.
    ///
    /// # Errors
    ///
    /// Returns [`FunctionError::PointDimension`] if `point` has the wrong
    /// length, or [`FunctionError::OutOfDomain`] if the function is not
    /// defined there.
    fn value(&self, point: &Vector) -> Result<f64, FunctionError>;
}

/// A function that exposes its gradient with respect to the point.
pub trait DifferentiableFunction: Function {
    /// Returns the gradient at `point`, with one entry per point coordinate.
    ///
    /// # Errors
    ///
    /// Returns the same errors as [`Function::value`], plus
    /// [`FunctionError::Undefined`] where the derivative does not exist.
    fn gradient(&self, point: &Vector) -> Result<Vector, FunctionError>;
}

/// A function that exposes the sensitivity of its value to its parameters.
///
/// This is the derivative least-squares and gradient-based optimizers need:
/// one entry per bound parameter, evaluated at a fixed point.
pub trait ParameterGradient: Function {
    /// Returns `∂ value(point) / ∂ parameters`.
    ///
    /// # Errors
    ///
    /// Returns the same errors as [`Function::value`].
    fn parameter_gradient(&self, point: &Vector) -> Result<Vector, FunctionError>;
}

/// A family of functions indexed by a parameter vector.
pub trait ParametricFunction {
    /// The concrete function produced by [`bind`](Self::bind).
    type Bound: Function;

    /// Binds `parameters` into a concrete function.
    ///
    /// # Errors
    ///
    /// Returns an error if the parameter vector has an invalid shape for this
    /// family (count, ordering of knot abscissas, non-finite values).
    fn bind(&self, parameters: &Vector) -> Result<Self::Bound, FunctionError>;
}

impl<F: Function + ?Sized> Function for &F {
    fn value(&self, point: &Vector) -> Result<f64, FunctionError> {
        (**self).value(point)
    }
}

impl<F: ParameterGradient + ?Sized> ParameterGradient for &F {
    fn parameter_gradient(&self, point: &Vector) -> Result<Vector, FunctionError> {
        (**self).parameter_gradient(point)
    }
}

/// Errors raised when binding or evaluating a function.
#[derive(Debug, Error)]
pub enum FunctionError {
    #[error("expected {expected}, got {found} parameters")]
    ParameterCount {
        expected: &'static str,
        found: usize,
    },

    #[error("knot abscissas must strictly increase: x[{index}] = {current} follows {previous}")]
    NonIncreasingKnots {
        index: usize,
        previous: f64,
        current: f64,
    },

    #[error("parameter {index} is not finite: {value}")]
    NonFiniteParameter { index: usize, value: f64 },

    #[error("point has dimension {found}, expected {expected}")]
    PointDimension { expected: usize, found: usize },

    #[error("x = {x} is outside the domain [{min}, {max}]")]
    OutOfDomain { x: f64, min: f64, max: f64 },

    #[error("derivative is undefined at x = {x}")]
    Undefined { x: f64 },

    #[error("parameter gradients have inconsistent lengths")]
    Shape(#[from] ShapeError),

    #[error("failed to construct function")]
    Construction(#[source] Box<dyn StdError + Send + Sync>),
}

impl FunctionError {
    pub fn construction<E: StdError + Send + Sync + 'static>(err: E) -> Self {
        Self::Construction(Box::new(err))
    }

    /// Checks that `point` has `expected` coordinates.
    ///
    /// # Errors
    ///
    /// Returns [`FunctionError::PointDimension`] on a mismatch.
    pub fn check_dimension(point: &Vector, expected: usize) -> Result<(), Self> {
        if point.len() == expected {
            Ok(())
        } else {
            Err(Self::PointDimension {
                expected,
                found: point.len(),
            })
        }
    }
}
