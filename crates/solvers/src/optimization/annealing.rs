//! Simulated annealing with Cauchy and very fast cooling schedules.
//!
//! # Algorithm
//!
//! Starting at the initial temperature `T0`, each proposal perturbs a base
//! point (the initial parameters, or the current point with
//! [`PerturbFrom::Current`]) and evaluates the candidate. A candidate that
//! improves on the current point is always accepted; a worse one is accepted
//! with Metropolis probability `exp(-Δ / T)`.
//!
//! The schedule depends on whether [`Bounds`] are given, with `i` the number
//! of accepted candidates and `d` the parameter count:
//!
//! | Mode | Proposal | Temperature after acceptance |
//! |------|----------|------------------------------|
//! | unbounded (Cauchy) | `x + T · tan(π(u - ½))` | `T0 / i^(1/d)` |
//! | bounded (very fast) | `x + (max - min) · z(T)`, clamped | `T0 · exp(-c · i^(1/d))` |
//!
//! where `z(T) = sign(α - ½) · T · ((1 + 1/T)^|2α - 1| - 1)` and `c` is the
//! quench factor.
//!
//! The temperature only falls on acceptance, so annealing stops when it
//! reaches the minimum temperature ([`Status::Cooled`]) or when the proposal
//! cap is hit ([`Status::MaxIters`]). The best accepted point is returned.

mod config;
mod event;

pub use config::{Config, ConfigError, PerturbFrom};
pub use event::Event;

use std::f64::consts::PI;

use paramfit_core::{Functional, Observer, ParametricFunction, Vector};
use rand::{Rng, SeedableRng, rngs::StdRng};
use tracing::{debug, trace, warn};

use super::{Action, Bounds, Error, Optimizer, Solution, Status, evaluate, start};

/// Simulated annealing optimizer.
#[derive(Debug, Clone)]
pub struct SimulatedAnnealing<R = StdRng> {
    config: Config,
    rng: R,
}

impl SimulatedAnnealing<StdRng> {
    /// Creates an optimizer with a [`StdRng`] seeded from `seed`.
    #[must_use]
    pub fn seeded(config: Config, seed: u64) -> Self {
        Self::new(config, StdRng::seed_from_u64(seed))
    }
}

impl<R: Rng> SimulatedAnnealing<R> {
    #[must_use]
    pub fn new(config: Config, rng: R) -> Self {
        Self { config, rng }
    }

    #[must_use]
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Minimizes `objective(function.bind(p))` by simulated annealing.
    ///
    /// The observer receives an [`Event`] after every proposal.
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
        let initial = start(initial, bounds)?;
        let initial_objective = evaluate(objective, function, &initial)?;

        let mut current = initial.clone();
        let mut current_objective = initial_objective;
        let mut best = initial.clone();
        let mut best_objective = initial_objective;

        let mut temperature = self.config.initial_temperature();
        let mut accepted_count = 0_usize;
        let mut iter = 0;

        while temperature > self.config.min_temperature() && iter < self.config.max_iters() {
            iter += 1;

            let base = match self.config.perturb_from() {
                PerturbFrom::Initial => &initial,
                PerturbFrom::Current => &current,
            };
            let candidate = self.propose(base, temperature, bounds);
            let value = evaluate(objective, function, &candidate)?;

            let delta = value - current_objective;
            let accepted =
                delta < 0.0 || (-delta / temperature).exp() > self.rng.gen_range(0.0..1.0);

            if accepted {
                accepted_count += 1;
                temperature = self.cool(accepted_count, initial.len(), bounds.is_some());
                if value < best_objective {
                    best_objective = value;
                    best.clone_from(&candidate);
                }
            }
            trace!(iter, temperature, objective = value, accepted, "proposal");

            let event = Event {
                iter,
                temperature,
                candidate: &candidate,
                objective: value,
                accepted,
                best_objective,
            };
            let action = observer.observe(&event);

            if accepted {
                current = candidate;
                current_objective = value;
            }

            if action == Some(Action::StopEarly) {
                debug!(iter, temperature, best_objective, "stopped by observer");
                return Ok(Solution {
                    status: Status::StoppedByObserver,
                    parameters: best,
                    objective: best_objective,
                    iters: iter,
                });
            }
        }

        let status = if temperature > self.config.min_temperature() {
            warn!(
                iters = iter,
                temperature, "proposal cap reached before cooling"
            );
            Status::MaxIters
        } else {
            debug!(iters = iter, accepted_count, best_objective, "cooled");
            Status::Cooled
        };

        Ok(Solution {
            status,
            parameters: best,
            objective: best_objective,
            iters: iter,
        })
    }

    /// Perturbs `base` at the given temperature.
    fn propose(&mut self, base: &Vector, temperature: f64, bounds: Option<&Bounds>) -> Vector {
        base.iter()
            .enumerate()
            .map(|(i, &x)| match bounds {
                Some(bounds) => {
                    let alpha: f64 = self.rng.gen_range(0.0..1.0);
                    let z = (alpha - 0.5).signum()
                        * temperature
                        * ((1.0 + 1.0 / temperature).powf((2.0 * alpha - 1.0).abs()) - 1.0);
                    bounds.clamp(i, x + (bounds.max()[i] - bounds.min()[i]) * z)
                }
                None => {
                    let u: f64 = self.rng.gen_range(0.0..1.0);
                    x + temperature * (PI * (u - 0.5)).tan()
                }
            })
            .collect()
    }

    /// Returns the temperature after `accepted` acceptances in dimension `d`.
    #[allow(clippy::cast_precision_loss)]
    fn cool(&self, accepted: usize, d: usize, bounded: bool) -> f64 {
        let t0 = self.config.initial_temperature();
        let scaled = (accepted as f64).powf(1.0 / d as f64);
        if bounded {
            t0 * (-self.config.quench() * scaled).exp()
        } else {
            t0 / scaled
        }
    }
}

impl<O, P, R> Optimizer<O, P> for SimulatedAnnealing<R>
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
        SimulatedAnnealing::minimize(self, objective, function, initial, bounds, ())
    }
}
