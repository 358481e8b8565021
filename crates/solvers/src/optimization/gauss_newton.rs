//! Gauss–Newton least squares.
//!
//! # Algorithm
//!
//! Each iteration binds the current parameters, evaluates the residual `r`
//! and its Jacobian `J`, and solves the normal equations
//!
//! ```text
//! (Jᵀ J) Δ = -Jᵀ r
//! ```
//!
//! with a [`LinearSolver`], then updates `p ← p + Δ`. The iteration has
//! converged once `‖Δ‖` drops below the configured precision. Otherwise it
//! stops after `max_iters` updates and returns the last parameters with
//! [`Status::MaxIters`].
//!
//! A singular normal matrix (for example, when parameters are not identified
//! by the data) is reported as [`Error::LinearSolve`].

mod config;
mod event;


pub use config::{Config, ConfigError};
pub use event::Event;

use paramfit_core::{
    LeastSquaresFunctional, Matrix, Observer, ParameterGradient, ParametricFunction, Vector,
};
use tracing::{debug, trace, warn};

use crate::linear::{GaussElimination, LinearSolver};

use super::{Action, Bounds, Error, Optimizer, Solution, Status, evaluate, start};

/// Gauss–Newton optimizer for least-squares objectives.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GaussNewton<S = GaussElimination> {
    config: Config,
    solver: S,
}

impl GaussNewton<GaussElimination> {
    /// Creates an optimizer that solves the normal equations by Gaussian
    /// elimination with default precision.
    #[must_use]
    pub fn new(config: Config) -> Self {
        Self::with_solver(config, GaussElimination::default())
    }
}

impl Default for GaussNewton {
    fn default() -> Self {
        Self::new(Config::default())
    }
}

impl<S: LinearSolver> GaussNewton<S> {
    #[must_use]
    pub fn with_solver(config: Config, solver: S) -> Self {
        Self { config, solver }
    }

    #[must_use]
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Minimizes the sum of squared residuals of `function.bind(p)`.
    ///
    /// `bounds` are only checked for dimension; the iteration is
    /// unconstrained. The observer receives an [`Event`] after every update.
    ///
    /// # Errors
    ///
    /// Returns an error if `initial` is empty, `bounds` has the wrong
    /// dimension, binding or evaluation fails, the Jacobian has the wrong
    /// shape, or the normal equations cannot be solved.
    pub fn minimize<O, P, Obs>(
        &self,
        objective: &O,
        function: &P,
        initial: &Vector,
        bounds: Option<&Bounds>,
        mut observer: Obs,
    ) -> Result<Solution, Error>
    where
        O: LeastSquaresFunctional,
        P: ParametricFunction,
        P::Bound: ParameterGradient,
        Obs: for<'a> Observer<Event<'a>, Action>,
    {
        let mut parameters = start(initial, bounds)?;

        for iter in 1..=self.config.max_iters() {
            let bound = function.bind(&parameters)?;
            let residual = objective.residual(&bound)?;
            let mut jacobian = objective.jacobian(&bound)?;
            if residual.is_empty() && jacobian.nrows() == 0 {
                // No samples: zero equations in every parameter.
                jacobian = Matrix::zeros(0, parameters.len());
            }

            if jacobian.nrows() != residual.len() || jacobian.ncols() != parameters.len() {
                return Err(Error::JacobianShape {
                    rows: jacobian.nrows(),
                    cols: jacobian.ncols(),
                    expected_rows: residual.len(),
                    expected_cols: parameters.len(),
                });
            }

            let lhs = jacobian.transpose_multiply();
            let rhs = jacobian.transpose_multiply_vector(&residual).negate();
            let delta = self.solver.solve(&lhs, &rhs)?;

            parameters = &parameters + &delta;
            let step_norm = delta.norm();
            let residual_norm = residual.norm();
            trace!(iter, step_norm, residual_norm, "normal equations solved");

            let event = Event {
                iter,
                parameters: &parameters,
                step_norm,
                residual_norm,
            };
            let action = observer.observe(&event);

            if step_norm < self.config.precision() {
                return finish(Status::Converged, objective, function, parameters, iter);
            }
            if action == Some(Action::StopEarly) {
                return finish(Status::StoppedByObserver, objective, function, parameters, iter);
            }
        }

        warn!(
            iters = self.config.max_iters(),
            "Gauss–Newton did not converge"
        );
        finish(
            Status::MaxIters,
            objective,
            function,
            parameters,
            self.config.max_iters(),
        )
    }
}

fn finish<O, P>(
    status: Status,
    objective: &O,
    function: &P,
    parameters: Vector,
    iters: usize,
) -> Result<Solution, Error>
where
    O: LeastSquaresFunctional,
    P: ParametricFunction,
{
    let objective = evaluate(objective, function, &parameters)?;
    debug!(?status, iters, objective, "Gauss–Newton finished");
    Ok(Solution {
        status,
        parameters,
        objective,
        iters,
    })
}

impl<O, P, S> Optimizer<O, P> for GaussNewton<S>
where
    O: LeastSquaresFunctional,
    P: ParametricFunction,
    P::Bound: ParameterGradient,
    S: LinearSolver,
{
    fn minimize(
        &mut self,
        objective: &O,
        function: &P,
        initial: &Vector,
        bounds: Option<&Bounds>,
    ) -> Result<Solution, Error> {
        GaussNewton::minimize(self, objective, function, initial, bounds, ())
    }
}
