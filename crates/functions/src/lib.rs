//! Parametric function families for paramfit.
//!
//! Each family is a [`ParametricFunction`] that validates a parameter vector
//! and binds it into an immutable function:
//!
//! | Family | Parameters | Domain |
//! |--------|------------|--------|
//! | [`Linear`] | `[w₁ … wₙ, b]` | `ℝⁿ` |
//! | [`Polynomial`] | coefficients, highest degree first | `ℝ` |
//! | [`PiecewiseLinear`] | knots `(x₀, y₀, x₁, y₁, …)` | `[x₀, xₙ]` |
//! | [`FixedKnotPiecewiseLinear`] | values at fixed knots | `ℝ` (extrapolated) |
//! | [`NaturalCubicSpline`] | knots `(x₀, y₀, x₁, y₁, …)` | `[x₀, xₙ]` |
//!
//! The two piecewise-linear families differ at knots: [`PiecewiseLinear`]
//! reports [`FunctionError::Undefined`] for the gradient at an interior knot,
//! while [`FixedKnotPiecewiseLinear`] uses the slope of the segment to the
//! right of it.
//!
//! [`ParametricFunction`]: paramfit_core::ParametricFunction
//! [`FunctionError::Undefined`]: paramfit_core::FunctionError::Undefined

mod fixed_knot;
mod knots;
mod linear;
mod piecewise_linear;
mod polynomial;
mod spline;

pub use fixed_knot::{BoundFixedKnotPiecewiseLinear, FixedKnotPiecewiseLinear};
pub use linear::{BoundLinear, Linear};
pub use piecewise_linear::{BoundPiecewiseLinear, PiecewiseLinear};
pub use polynomial::{BoundPolynomial, Polynomial};
pub use spline::{BoundNaturalCubicSpline, NaturalCubicSpline};
