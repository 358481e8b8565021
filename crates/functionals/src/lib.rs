//! Objective functionals that compare a candidate function against reference
//! values on a fixed set of sample nodes.
//!
//! With residuals `rᵢ = f(xᵢ) - yᵢ` over the nodes of a [`Domain`]:
//!
//! | Functional | Value | Capabilities |
//! |------------|-------|--------------|
//! | [`L1Norm`] | `Σ |rᵢ|` | [`DifferentiableFunctional`] (sub-gradient) |
//! | [`L2Norm`] | `Σ rᵢ²` | [`DifferentiableFunctional`], [`LeastSquaresFunctional`] |
//! | [`LInfNorm`] | `max |rᵢ|` | value only |
//!
//! Gradients are taken with respect to the parameters of the bound function,
//! so they need a [`ParameterGradient`] implementation.
//!
//! The reference values `yᵢ` are captured once, either by evaluating a
//! reference function on the nodes or from explicit targets.
//!
//! [`Domain`]: paramfit_core::Domain
//! [`DifferentiableFunctional`]: paramfit_core::DifferentiableFunctional
//! [`LeastSquaresFunctional`]: paramfit_core::LeastSquaresFunctional
//! [`ParameterGradient`]: paramfit_core::ParameterGradient

mod l1;
mod l2;
mod linf;
mod samples;

pub use l1::L1Norm;
pub use l2::L2Norm;
pub use linf::LInfNorm;
pub use samples::{Samples, SamplesError};
