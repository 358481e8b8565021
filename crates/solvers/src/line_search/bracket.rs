use std::error::Error as StdError;

use tracing::{trace, warn};

use super::{Config, Error, evaluate};

/// A closed interval `[left, right]` with `left <= right`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Interval {
    pub left: f64,
    pub right: f64,
}

impl Interval {
    /// Creates an interval from two end points in either order.
    #[must_use]
    pub fn new(a: f64, b: f64) -> Self {
        if a <= b {
            Self { left: a, right: b }
        } else {
            Self { left: b, right: a }
        }
    }

    #[must_use]
    pub fn width(&self) -> f64 {
        self.right - self.left
    }

    #[must_use]
    pub fn midpoint(&self) -> f64 {
        0.5 * (self.left + self.right)
    }

    #[must_use]
    pub fn contains(&self, x: f64) -> bool {
        self.left <= x && x <= self.right
    }
}

/// Finds an interval bracketing a local minimum of `f` near `start`.
///
/// Probes `start ± delta` to pick a downhill direction. If neither side
/// improves on `f(start)`, the bracket is `[start - delta, start + delta]`.
/// Otherwise the step doubles while `f` keeps decreasing, and the first
/// non-improving point closes the bracket. The other end is the point before
/// the last improving one, i.e. the last accepted point backed off by half the
/// final step.
///
/// # Errors
///
/// Returns [`Error::Unbounded`] if `f` is still decreasing after
/// `max_expansions` doublings, [`Error::NonFinite`] if `f` returns a
/// non-finite value, or [`Error::Function`] if `f` fails.
pub fn find_minimum_interval<F, E>(start: f64, mut f: F, config: &Config) -> Result<Interval, Error>
where
    F: FnMut(f64) -> Result<f64, E>,
    E: StdError + Send + Sync + 'static,
{
    let delta = config.delta();
    let f_start = evaluate(&mut f, start)?;

    let mut step = if evaluate(&mut f, start + delta)? < f_start {
        delta
    } else if evaluate(&mut f, start - delta)? < f_start {
        -delta
    } else {
        trace!(start, delta, "start point is already a local minimum");
        return Ok(Interval::new(start - delta, start + delta));
    };

    let mut x_prev = start;
    let mut x_curr = start + step;
    let mut f_curr = evaluate(&mut f, x_curr)?;

    for expansion in 0..config.max_expansions() {
        step *= 2.0;
        let x_next = x_curr + step;
        let f_next = evaluate(&mut f, x_next)?;

        if f_next >= f_curr {
            let interval = Interval::new(x_prev, x_next);
            trace!(expansion, ?interval, "minimum bracketed");
            return Ok(interval);
        }

        x_prev = x_curr;
        x_curr = x_next;
        f_curr = f_next;
    }

    warn!(
        start,
        expansions = config.max_expansions(),
        "function still decreasing after maximum expansions"
    );
    Err(Error::Unbounded {
        expansions: config.max_expansions(),
    })
}
