//! One-dimensional minimization along a line.
//!
//! # Algorithm
//!
//! A search runs in two phases:
//!
//! 1. [`find_minimum_interval`] probes a small step on either side of a start
//!    point to pick the downhill direction, then doubles the step while the
//!    function keeps decreasing. The first non-improving step closes an
//!    [`Interval`] that brackets a local minimum.
//! 2. [`search_min`] shrinks that bracket by Fibonacci section, reusing one
//!    probe per step, until its width reaches the requested precision.
//!
//! [`minimize`] chains the two and is what the conjugate gradient optimizer
//! uses to choose its step length.
//!
//! # Limitations
//!
//! - **Unimodal assumption**: on a function with several minima the bracket
//!   holds whichever one the expansion reaches first.
//! - **Floating-point Fibonacci numbers**: the sequence is evaluated in closed
//!   form, which is exact only up to a moderate index. Very wide brackets
//!   relative to the precision are clamped to that index and logged.

mod bracket;
mod config;
mod error;
mod fibonacci;

pub use bracket::{Interval, find_minimum_interval};
pub use config::{Config, ConfigError};
pub use error::Error;
pub use fibonacci::search_min;

use std::error::Error as StdError;

/// Brackets a minimum starting from `start` and refines it by Fibonacci
/// section.
///
/// # Errors
///
/// Returns an error if bracketing does not terminate within the configured
/// number of expansions, if `f` returns a non-finite value, or if `f` fails.
pub fn minimize<F, E>(mut f: F, start: f64, config: &Config) -> Result<f64, Error>
where
    F: FnMut(f64) -> Result<f64, E>,
    E: StdError + Send + Sync + 'static,
{
    let interval = find_minimum_interval(start, &mut f, config)?;
    search_min(f, interval, config.precision())
}

/// Evaluates `f` at `x`, rejecting errors and non-finite values.
fn evaluate<F, E>(f: &mut F, x: f64) -> Result<f64, Error>
where
    F: FnMut(f64) -> Result<f64, E>,
    E: StdError + Send + Sync + 'static,
{
    let value = f(x).map_err(|err| Error::Function(Box::new(err)))?;
    if value.is_finite() {
        Ok(value)
    } else {
        Err(Error::NonFinite { x, value })
    }
}
