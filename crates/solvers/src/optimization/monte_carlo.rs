//! Random search over the parameter space.
//!
//! # Algorithm
//!
//! The initial parameters are evaluated first. Each iteration then draws a
//! candidate uniformly at random, evaluates it, and keeps it if it beats the
//! best value seen so far. With [`Bounds`] candidates are drawn from
//! `[min, max)` per parameter; without them from `[0, 1)`.
//!
//! The search always spends its full budget unless an observer stops it, so
//! the status is [`Status::MaxIters`] or [`Status::StoppedByObserver`].
//!
//! Results are reproducible for a fixed generator seed.

mod config;
mod event;

pub use config::{Config, ConfigError};
pub use event::Event;

use paramfit_core::{Functional, Observer, ParametricFunction, Vector};
use rand::{Rng, SeedableRng, rngs::StdRng};
use tracing::{debug, trace};

use super::{Action, Bounds, Error, Optimizer, Solution, Status, evaluate, start};

/// Monte Carlo random search.
#[derive(Debug, Clone)]
pub struct MonteCarlo<R = StdRng> {
    config: Config,
    rng: R,
}

impl MonteCarlo<StdRng> {
    /// Creates an optimizer with a [`StdRng`] seeded from `seed`.
    #[must_use]
    pub fn seeded(config: Config, seed: u64) -> Self {
        Self::new(config, StdRng::seed_from_u64(seed))
    }
}

impl<R: Rng> MonteCarlo<R> {
    #[must_use]
    pub fn new(config: Config, rng: R) -> Self {
        Self { config, rng }
    }

    #[must_use]
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Minimizes `objective(function.bind(p))` by random search.
    ///
    /// The observer receives an [`Event`] after every candidate.
    ///
    /// # Errors
    ///
    /// Returns an error if `initial` is empty, `bounds` has the wrong
    /// dimension, or a candidate cannot be bound or evaluated.
    pub fn minimize<O, P, Obs>(
        &mut self,
        objective: &O,
        function: &P,
        initial: &Vector,
        bounds: Option<&Bounds>,
        mut observer: Obs,
    ) -> Result<Solution, Error>
    where
        O: Functional,
        P: ParametricFunction,
        Obs: for<'a> Observer<Event<'a>, Action>,
    {
        let mut best = start(initial, bounds)?;
        let mut best_objective = evaluate(objective, function, &best)?;

        for iter in 1..=self.config.max_iters() {
            let candidate = self.draw(best.len(), bounds);
            let value = evaluate(objective, function, &candidate)?;
            trace!(iter, objective = value, best_objective, "candidate evaluated");

            let improved = value < best_objective;
            if improved {
                best_objective = value;
            }

            let event = Event {
                iter,
                candidate: &candidate,
                objective: value,
                best_objective,
            };
            let action = observer.observe(&event);

            if improved {
                best = candidate;
            }

            if action == Some(Action::StopEarly) {
                debug!(iter, best_objective, "stopped by observer");
                return Ok(Solution {
                    status: Status::StoppedByObserver,
                    parameters: best,
                    objective: best_objective,
                    iters: iter,
                });
            }
        }

        debug!(
            iters = self.config.max_iters(),
            best_objective, "random search budget spent"
        );
        Ok(Solution {
            status: Status::MaxIters,
            parameters: best,
            objective: best_objective,
            iters: self.config.max_iters(),
        })
    }

    fn draw(&mut self, dimension: usize, bounds: Option<&Bounds>) -> Vector {
        (0..dimension)
            .map(|i| {
                let u = self.rng.gen_range(0.0..1.0);
                match bounds {
                    Some(bounds) => bounds.min()[i] + (bounds.max()[i] - bounds.min()[i]) * u,
                    None => u,
                }
            })
            .collect()
    }
}

impl<O, P, R> Optimizer<O, P> for MonteCarlo<R>
where
    O: Functional,
    P: ParametricFunction,
    R: Rng,
{
    fn minimize(
        &mut self,
        objective: &O,
        function: &P,
        initial: &Vector,
        bounds: Option<&Bounds>,
    ) -> Result<Solution, Error> {
        MonteCarlo::minimize(self, objective, function, initial, bounds, ())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_abs_diff_eq;

    use crate::optimization::fixtures::{Line, SumOfSquares, Weights};

    fn config(max_iters: usize) -> Config {
        Config::new(max_iters).unwrap()
    }

    #[test]
    fn finds_minimum_of_convex_function() {
        // Σ p at x = 1 against y = 0.7: minimized on p₀ = 0.7.
        let objective = SumOfSquares::new(&[(1.0, 0.7)]);
        let mut optimizer = MonteCarlo::seeded(config(5_000), 42);

        let solution = optimizer
            .minimize(&objective, &Weights, &Vector::from([5.0]), None, ())
            .unwrap();

        assert_eq!(solution.status, Status::MaxIters);
        assert_eq!(solution.iters, 5_000);
        assert_abs_diff_eq!(solution.parameters[0], 0.7, epsilon = 1e-3);
        assert!(solution.objective < 1e-6);
    }

    #[test]
    fn same_seed_is_deterministic() {
        let objective = SumOfSquares::new(&[(0.0, 0.2), (1.0, 0.5)]);
        let initial = Vector::from([0.0, 0.0]);

        let run = |seed| {
            MonteCarlo::seeded(config(200), seed)
                .minimize(&objective, &Line, &initial, None, ())
                .unwrap()
        };

        assert_eq!(run(7), run(7));
        assert_ne!(run(7).parameters, run(8).parameters);
    }

    #[test]
    fn keeps_initial_parameters_when_nothing_improves() {
        let objective = SumOfSquares::new(&[(1.0, 10.0)]);
        let initial = Vector::from([10.0]);

        let solution = MonteCarlo::seeded(config(100), 1)
            .minimize(&objective, &Weights, &initial, None, ())
            .unwrap();

        assert_eq!(solution.parameters, initial);
        assert_abs_diff_eq!(solution.objective, 0.0);
    }

    #[test]
    fn candidates_respect_bounds() {
        let objective = SumOfSquares::new(&[(1.0, 7.5)]);
        let bounds = Bounds::new(Vector::from([5.0]), Vector::from([10.0])).unwrap();
        let mut seen = Vec::new();

        let solution = MonteCarlo::seeded(config(2_000), 3)
            .minimize(
                &objective,
                &Weights,
                &Vector::from([5.0]),
                Some(&bounds),
                |event: &Event<'_>| {
                    seen.push(event.candidate[0]);
                    None
                },
            )
            .unwrap();

        assert!(seen.iter().all(|x| (5.0..10.0).contains(x)));
        assert_abs_diff_eq!(solution.parameters[0], 7.5, epsilon = 1e-2);
    }

    #[test]
    fn observer_can_stop_early() {
        let objective = SumOfSquares::new(&[(1.0, 0.5)]);

        let solution = MonteCarlo::seeded(config(1_000), 0)
            .minimize(
                &objective,
                &Weights,
                &Vector::from([0.0]),
                None,
                |event: &Event<'_>| (event.iter == 10).then_some(Action::StopEarly),
            )
            .unwrap();

        assert_eq!(solution.status, Status::StoppedByObserver);
        assert_eq!(solution.iters, 10);
    }

    #[test]
    fn rejects_empty_parameters_and_mismatched_bounds() {
        let objective = SumOfSquares::new(&[(1.0, 0.5)]);
        let mut optimizer = MonteCarlo::seeded(config(10), 0);

        assert!(matches!(
            optimizer.minimize(&objective, &Weights, &Vector::default(), None, ()),
            Err(Error::EmptyParameters)
        ));

        let bounds = Bounds::new(Vector::from([0.0]), Vector::from([1.0])).unwrap();
        assert!(matches!(
            optimizer.minimize(&objective, &Line, &Vector::from([0.0, 0.0]), Some(&bounds), ()),
            Err(Error::BoundsDimension {
                expected: 2,
                found: 1
            })
        ));
    }

    #[test]
    fn zero_budget_is_rejected() {
        assert_eq!(Config::new(0), Err(ConfigError::MaxIters));
    }
}
