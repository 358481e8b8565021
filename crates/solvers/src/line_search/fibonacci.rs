use std::error::Error as StdError;

use tracing::{trace, warn};

use super::{Error, Interval, evaluate};

/// Largest index whose closed-form Fibonacci number rounds to the exact value.
const MAX_INDEX: i32 = 60;

/// Returns the `k`-th Fibonacci number, `F(1) = F(2) = 1`, by Binet's formula.
fn fib(k: i32) -> f64 {
    let sqrt5 = 5.0_f64.sqrt();
    let phi = 0.5 * (1.0 + sqrt5);
    let psi = 0.5 * (1.0 - sqrt5);
    ((phi.powi(k) - psi.powi(k)) / sqrt5).round()
}

/// Returns the smallest `k` with `ratio <= F(k)`, clamped to [`MAX_INDEX`].
fn index_for(ratio: f64) -> i32 {
    match (1..=MAX_INDEX).find(|&k| ratio <= fib(k)) {
        Some(k) => k,
        None => {
            warn!(ratio, max_index = MAX_INDEX, "Fibonacci index clamped");
            MAX_INDEX
        }
    }
}

/// Minimizes `f` on `interval` by Fibonacci section.
///
/// Uses the smallest Fibonacci number `F(k) >= width / precision`, places two
/// probes at Fibonacci ratios of the interval, and performs `k - 4` shrink
/// steps that discard the side of the worse probe and reuse the surviving one.
/// The result is the midpoint of the final two probes.
///
/// # Errors
///
/// Returns [`Error::InvalidInterval`] if the interval bounds are not finite,
/// [`Error::InvalidPrecision`] if `precision` is not finite and positive,
/// [`Error::NonFinite`] if `f` returns a non-finite value, or
/// [`Error::Function`] if `f` fails.
pub fn search_min<F, E>(mut f: F, interval: Interval, precision: f64) -> Result<f64, Error>
where
    F: FnMut(f64) -> Result<f64, E>,
    E: StdError + Send + Sync + 'static,
{
    if !interval.left.is_finite() || !interval.right.is_finite() {
        return Err(Error::InvalidInterval {
            left: interval.left,
            right: interval.right,
        });
    }
    if !precision.is_finite() || precision <= 0.0 {
        return Err(Error::InvalidPrecision(precision));
    }

    let Interval { mut left, mut right } = Interval::new(interval.left, interval.right);
    let n = index_for((right - left) / precision) - 2;
    if n < 2 {
        return Ok(0.5 * (left + right));
    }

    let width = right - left;
    let mut x1 = left + fib(n) / fib(n + 2) * width;
    let mut x2 = left + fib(n + 1) / fib(n + 2) * width;
    let mut f1 = evaluate(&mut f, x1)?;
    let mut f2 = evaluate(&mut f, x2)?;

    for i in 0..n - 2 {
        if f1 <= f2 {
            right = x2;
            x2 = x1;
            f2 = f1;
            x1 = left + fib(n - i - 1) / fib(n - i + 1) * (right - left);
            f1 = evaluate(&mut f, x1)?;
        } else {
            left = x1;
            x1 = x2;
            f1 = f2;
            x2 = left + fib(n - i) / fib(n - i + 1) * (right - left);
            f2 = evaluate(&mut f, x2)?;
        }
    }

    let x = 0.5 * (x1 + x2);
    trace!(x, left, right, steps = n - 2, "Fibonacci search finished");
    Ok(x)
}
