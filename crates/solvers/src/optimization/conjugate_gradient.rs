//! Nonlinear conjugate gradient descent.
//!
//! # Algorithm
//!
//! The first search direction is the steepest descent `d = -g`. Each
//! iteration line-searches `λ ↦ F(p + λ d)` from `λ = 0`, steps to
//! `p + λ d`, and updates the direction with the Fletcher–Reeves ratio:
//!
//! ```text
//! ω = ‖g'‖² / ‖g‖²
//! d = -g' + ω d
//! ```
//!
//! If the new direction is not a descent direction (`d · g' >= 0`) it is
//! reset to `-g'`.
//!
//! The search has converged once `‖d‖` drops below the configured precision,
//! and otherwise stops after `max_iters` iterations with [`Status::MaxIters`].

mod config;
mod event;

#[cfg(test)]
mod tests;

pub use config::{Config, ConfigError};
pub use event::Event;

use paramfit_core::{
    DifferentiableFunctional, Observer, ParameterGradient, ParametricFunction, Vector,
};
use tracing::{debug, trace, warn};

use crate::line_search;

use super::{Action, Bounds, Error, Optimizer, Solution, Status, evaluate, start};

/// Nonlinear conjugate gradient optimizer.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct ConjugateGradient {
    config: Config,
}

impl ConjugateGradient {
    #[must_use]
    pub fn new(config: Config) -> Self {
        Self { config }
    }

    #[must_use]
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Minimizes `objective(function.bind(p))` by conjugate gradient descent.
    ///
    /// `bounds` are only checked for dimension; the search is unconstrained.
    /// The observer receives an [`Event`] after every step.
    ///
    /// # Errors
    ///
    /// Returns an error if `initial` is empty, `bounds` has the wrong
    /// dimension, binding or a gradient evaluation fails, or the line search
    /// fails.
    pub fn minimize<O, P, Obs>(
        &self,
        objective: &O,
        function: &P,
        initial: &Vector,
        bounds: Option<&Bounds>,
        mut observer: Obs,
    ) -> Result<Solution, Error>
    where
        O: DifferentiableFunctional,
        P: ParametricFunction,
        P::Bound: ParameterGradient,
        Obs: for<'a> Observer<Event<'a>, Action>,
    {
        let mut parameters = start(initial, bounds)?;
        let mut gradient = objective.gradient(&function.bind(&parameters)?)?;
        check_gradient(&gradient, parameters.len())?;
        let mut direction = gradient.negate();

        for iter in 1..=self.config.max_iters() {
            if direction.norm() < self.config.precision() {
                return self.finish(Status::Converged, objective, function, parameters, iter - 1);
            }

            let step = line_search::minimize(
                |lambda| evaluate(objective, function, &(&parameters + &(&direction * lambda))),
                0.0,
                self.config.line_search(),
            )?;

            parameters = &parameters + &(&direction * step);
            let bound = function.bind(&parameters)?;
            let next_gradient = objective.gradient(&bound)?;
            check_gradient(&next_gradient, parameters.len())?;

            let previous = gradient.norm_squared();
            let omega = if previous > 0.0 {
                next_gradient.norm_squared() / previous
            } else {
                0.0
            };
            direction = &(&direction * omega) - &next_gradient;
            if direction.dot(&next_gradient) >= 0.0 {
                warn!(iter, "not a descent direction, restarting from steepest descent");
                direction = next_gradient.negate();
            }
            gradient = next_gradient;

            let value = objective.value(&bound)?;
            let direction_norm = direction.norm();
            trace!(iter, step, objective = value, direction_norm, "step taken");

            let event = Event {
                iter,
                parameters: &parameters,
                objective: value,
                step,
                direction_norm,
            };
            if observer.observe(&event) == Some(Action::StopEarly) {
                return self.finish(Status::StoppedByObserver, objective, function, parameters, iter);
            }
        }

        let iters = self.config.max_iters();
        if direction.norm() < self.config.precision() {
            return self.finish(Status::Converged, objective, function, parameters, iters);
        }

        warn!(
            iters,
            direction_norm = direction.norm(),
            "conjugate gradient did not converge"
        );
        self.finish(Status::MaxIters, objective, function, parameters, iters)
    }

    fn finish<O, P>(
        &self,
        status: Status,
        objective: &O,
        function: &P,
        parameters: Vector,
        iters: usize,
    ) -> Result<Solution, Error>
    where
        O: DifferentiableFunctional,
        P: ParametricFunction,
    {
        let objective = evaluate(objective, function, &parameters)?;
        debug!(?status, iters, objective, "conjugate gradient finished");
        Ok(Solution {
            status,
            parameters,
            objective,
            iters,
        })
    }
}

fn check_gradient(gradient: &Vector, expected: usize) -> Result<(), Error> {
    if gradient.len() == expected {
        Ok(())
    } else {
        Err(Error::GradientLength {
            expected,
            found: gradient.len(),
        })
    }
}

impl<O, P> Optimizer<O, P> for ConjugateGradient
where
    O: DifferentiableFunctional,
    P: ParametricFunction,
    P::Bound: ParameterGradient,
{
    fn minimize(
        &mut self,
        objective: &O,
        function: &P,
        initial: &Vector,
        bounds: Option<&Bounds>,
    ) -> Result<Solution, Error> {
        ConjugateGradient::minimize(self, objective, function, initial, bounds, ())
    }
}
