//! Knot parsing and segment lookup shared by the piecewise families.

use paramfit_core::{FunctionError, Vector};

/// Checks that abscissas are finite and strictly increasing.
pub(crate) fn check_increasing(xs: &[f64]) -> Result<(), FunctionError> {
    if let Some(index) = xs.iter().position(|x| !x.is_finite()) {
        return Err(FunctionError::NonFiniteParameter {
            index,
            value: xs[index],
        });
    }
    if let Some(index) = (1..xs.len()).find(|&i| xs[i] <= xs[i - 1]) {
        return Err(FunctionError::NonIncreasingKnots {
            index,
            previous: xs[index - 1],
            current: xs[index],
        });
    }
    Ok(())
}

/// Splits interleaved `(x₀, y₀, x₁, y₁, …)` parameters into abscissas and
/// values.
///
/// Requires an even count of at least 4, finite values, and strictly
/// increasing abscissas.
pub(crate) fn split_interleaved(parameters: &Vector) -> Result<(Vec<f64>, Vec<f64>), FunctionError> {
    if parameters.len() < 4 || parameters.len() % 2 != 0 {
        return Err(FunctionError::ParameterCount {
            expected: "an even count of at least 4 (x0, y0, x1, y1, ...)",
            found: parameters.len(),
        });
    }
    if let Some(index) = parameters.iter().position(|p| !p.is_finite()) {
        return Err(FunctionError::NonFiniteParameter {
            index,
            value: parameters[index],
        });
    }

    let (xs, ys) = parameters
        .chunks_exact(2)
        .map(|pair| (pair[0], pair[1]))
        .unzip::<_, _, Vec<_>, Vec<_>>();
    check_increasing(&xs)?;

    Ok((xs, ys))
}

/// Returns the segment `i` with `xs[i] <= x < xs[i + 1]`.
///
/// The last knot belongs to the last segment, and points outside the knots
/// map to the first or last segment. Requires at least two knots.
pub(crate) fn segment(xs: &[f64], x: f64) -> usize {
    xs.partition_point(|&k| k <= x)
        .saturating_sub(1)
        .min(xs.len() - 2)
}

/// Returns the point's single coordinate.
pub(crate) fn abscissa(point: &Vector) -> Result<f64, FunctionError> {
    FunctionError::check_dimension(point, 1)?;
    Ok(point[0])
}

/// Rejects `x` outside `[xs[0], xs[n - 1]]`.
pub(crate) fn check_within(xs: &[f64], x: f64) -> Result<(), FunctionError> {
    let (min, max) = (xs[0], xs[xs.len() - 1]);
    if (min..=max).contains(&x) {
        Ok(())
    } else {
        Err(FunctionError::OutOfDomain { x, min, max })
    }
}
