//! Optimizers that fit the parameters of a parametric function.
//!
//! Every optimizer minimizes `objective(function.bind(p))` over the parameter
//! vector `p`. The objective is a [`Functional`]; gradient-based optimizers
//! require more of it, and state that requirement as a trait bound on their
//! [`Optimizer`] impl.
//!
//! # Optimizers
//!
//! | Optimizer | Objective needs | Randomized |
//! |-----------|-----------------|------------|
//! | [`MonteCarlo`] | [`Functional`] | yes |
//! | [`SimulatedAnnealing`] | [`Functional`] | yes |
//! | [`ConjugateGradient`] | [`DifferentiableFunctional`] | no |
//! | [`GaussNewton`] | [`LeastSquaresFunctional`] | no |
//!
//! All optimizers copy the initial parameters, re-bind the parametric
//! function for every evaluation, and report how they stopped through
//! [`Solution::status`].
//!
//! # Observers
//!
//! Each optimizer's inherent `minimize` takes an [`Observer`] that receives
//! one solver-specific `Event` per iteration and may return
//! [`Action::StopEarly`]. The [`Optimizer`] trait method runs without one.
//!
//! [`Functional`]: paramfit_core::Functional
//! [`DifferentiableFunctional`]: paramfit_core::DifferentiableFunctional
//! [`LeastSquaresFunctional`]: paramfit_core::LeastSquaresFunctional
//! [`Observer`]: paramfit_core::Observer

mod action;
mod bounds;
mod error;
mod evaluate;
mod solution;

#[cfg(test)]
mod fixtures;

pub mod annealing;
pub mod conjugate_gradient;
pub mod gauss_newton;
pub mod monte_carlo;

pub use action::Action;
pub use annealing::SimulatedAnnealing;
pub use bounds::{Bounds, BoundsError};
pub use conjugate_gradient::ConjugateGradient;
pub use error::Error;
pub use evaluate::evaluate;
pub use gauss_newton::GaussNewton;
pub use monte_carlo::MonteCarlo;
pub use solution::{Solution, Status};

use paramfit_core::Vector;

/// An optimizer for objective `O` over the parametric function `P`.
pub trait Optimizer<O, P> {
    /// Finds parameters minimizing `objective(function.bind(p))`, starting
    /// from `initial`.
    ///
    /// `bounds` constrain where candidates are drawn for the randomized
    /// optimizers; gradient-based optimizers only check its dimension.
    ///
    /// # Errors
    ///
    /// Returns an error if `initial` is empty, if `bounds` has the wrong
    /// dimension, or if binding, evaluating, or a linear solve fails.
    fn minimize(
        &mut self,
        objective: &O,
        function: &P,
        initial: &Vector,
        bounds: Option<&Bounds>,
    ) -> Result<Solution, Error>;
}

/// Checks the shared preconditions and returns a private copy of `initial`.
fn start(initial: &Vector, bounds: Option<&Bounds>) -> Result<Vector, Error> {
    if initial.is_empty() {
        return Err(Error::EmptyParameters);
    }
    if let Some(bounds) = bounds {
        if bounds.len() != initial.len() {
            return Err(Error::BoundsDimension {
                expected: initial.len(),
                found: bounds.len(),
            });
        }
    }
    Ok(initial.clone())
}
