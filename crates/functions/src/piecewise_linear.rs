use paramfit_core::{
    DifferentiableFunction, Function, FunctionError, ParameterGradient, ParametricFunction,
    Vector,
};

use crate::knots::{abscissa, check_within, segment, split_interleaved};

/// The family of piecewise-linear interpolants through free knots.
///
/// Parameters are interleaved knots `(x₀, y₀, x₁, y₁, …)` with strictly
/// increasing abscissas. The bound function is defined on `[x₀, xₙ]`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PiecewiseLinear;

/// A piecewise-linear interpolant bound by [`PiecewiseLinear`].
#[derive(Debug, Clone, PartialEq)]
pub struct BoundPiecewiseLinear {
    xs: Vec<f64>,
    ys: Vec<f64>,
}

impl BoundPiecewiseLinear {
    #[must_use]
    pub fn knots(&self) -> impl Iterator<Item = (f64, f64)> + '_ {
        self.xs.iter().copied().zip(self.ys.iter().copied())
    }

    fn slope(&self, i: usize) -> f64 {
        (self.ys[i + 1] - self.ys[i]) / (self.xs[i + 1] - self.xs[i])
    }
}

impl ParametricFunction for PiecewiseLinear {
    type Bound = BoundPiecewiseLinear;

    fn bind(&self, parameters: &Vector) -> Result<BoundPiecewiseLinear, FunctionError> {
        let (xs, ys) = split_interleaved(parameters)?;
        Ok(BoundPiecewiseLinear { xs, ys })
    }
}

impl Function for BoundPiecewiseLinear {
    fn value(&self, point: &Vector) -> Result<f64, FunctionError> {
        let x = abscissa(point)?;
        check_within(&self.xs, x)?;

        let i = segment(&self.xs, x);
        Ok(self.ys[i] + self.slope(i) * (x - self.xs[i]))
    }
}

impl DifferentiableFunction for BoundPiecewiseLinear {
    /// Returns the slope of the segment containing `x`.
    ///
    /// The derivative is only defined strictly inside a segment: the end
    /// knots are reported as out of domain and interior knots as undefined.
    fn gradient(&self, point: &Vector) -> Result<Vector, FunctionError> {
        let x = abscissa(point)?;
        let (min, max) = (self.xs[0], self.xs[self.xs.len() - 1]);
        if x <= min || x >= max {
            return Err(FunctionError::OutOfDomain { x, min, max });
        }

        let i = segment(&self.xs, x);
        if x == self.xs[i] {
            return Err(FunctionError::Undefined { x });
        }

        Ok(Vector::from([self.slope(i)]))
    }
}

impl ParameterGradient for BoundPiecewiseLinear {
    /// Returns the sensitivity to every knot coordinate, interleaved like
    /// the parameters.
    ///
    /// Only the two knots of the containing segment contribute. On segment
    /// `[xᵢ, xᵢ₊₁]` with `t = (x - xᵢ) / h`, the value
    /// `yᵢ + t (yᵢ₊₁ - yᵢ)` has `∂/∂yᵢ = 1 - t`, `∂/∂yᵢ₊₁ = t`,
    /// `∂/∂xᵢ = -(1 - t) s` and `∂/∂xᵢ₊₁ = -t s`, where `s` is the slope.
    fn parameter_gradient(&self, point: &Vector) -> Result<Vector, FunctionError> {
        let x = abscissa(point)?;
        check_within(&self.xs, x)?;

        let i = segment(&self.xs, x);
        let t = (x - self.xs[i]) / (self.xs[i + 1] - self.xs[i]);
        let s = self.slope(i);

        let mut gradient = Vector::zeros(2 * self.xs.len());
        gradient[2 * i] = -(1.0 - t) * s;
        gradient[2 * i + 1] = 1.0 - t;
        gradient[2 * i + 2] = -t * s;
        gradient[2 * i + 3] = t;
        Ok(gradient)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;

    fn bind(parameters: &[f64]) -> BoundPiecewiseLinear {
        PiecewiseLinear.bind(&Vector::from(parameters)).unwrap()
    }

    fn at(x: f64) -> Vector {
        Vector::from([x])
    }

    #[test]
    fn interpolates_between_knots() {
        let f = bind(&[0.0, 0.0, 1.0, 1.0, 4.0, 5.0, 5.0, 6.0]);

        let cases = [
            (0.0, 0.0),
            (0.5, 0.5),
            (1.0, 1.0),
            (1.5, 5.0 / 3.0),
            (4.0, 5.0),
            (4.5, 5.5),
            (5.0, 6.0),
        ];
        for (x, expected) in cases {
            assert_relative_eq!(f.value(&at(x)).unwrap(), expected, epsilon = 1e-12);
        }
    }

    #[test]
    fn value_outside_knots_is_out_of_domain() {
        let f = bind(&[0.0, 0.0, 1.0, 1.0]);

        for x in [-0.1, 1.1] {
            assert!(matches!(
                f.value(&at(x)),
                Err(FunctionError::OutOfDomain { min: 0.0, max: 1.0, .. })
            ));
        }
    }

    #[test]
    fn gradient_is_segment_slope() {
        let f = bind(&[0.0, 0.0, 1.0, 2.0, 2.0, 3.0]);

        assert_relative_eq!(f.gradient(&at(0.25)).unwrap()[0], 2.0);
        assert_relative_eq!(f.gradient(&at(1.5)).unwrap()[0], 1.0);
    }

    #[test]
    fn gradient_at_knots() {
        let f = bind(&[0.0, 0.0, 1.0, 2.0, 3.0, 6.0]);

        assert!(matches!(
            f.gradient(&at(0.0)),
            Err(FunctionError::OutOfDomain { .. })
        ));
        assert!(matches!(
            f.gradient(&at(3.0)),
            Err(FunctionError::OutOfDomain { .. })
        ));
        assert!(matches!(
            f.gradient(&at(1.0)),
            Err(FunctionError::Undefined { x }) if x == 1.0
        ));
    }

    #[test]
    fn parameter_gradient_touches_one_segment() {
        let f = bind(&[0.0, 0.0, 1.0, 2.0, 3.0, 6.0]);

        // x = 2 lies a half of the way along [1, 3], slope 2.
        let gradient = f.parameter_gradient(&at(2.0)).unwrap();
        let expected = [0.0, 0.0, -1.0, 0.5, -1.0, 0.5];
        for (g, e) in gradient.iter().zip(expected) {
            assert_relative_eq!(*g, e, epsilon = 1e-12);
        }
    }

    #[test]
    fn parameter_gradient_matches_finite_differences() {
        let parameters = [0.0, 1.0, 1.5, -2.0, 4.0, 3.0];
        let point = at(2.2);
        let analytic = bind(&parameters).parameter_gradient(&point).unwrap();

        let h = 1e-7;
        for k in 0..parameters.len() {
            let mut shifted = parameters;
            shifted[k] += h;
            let numeric =
                (bind(&shifted).value(&point).unwrap() - bind(&parameters).value(&point).unwrap()) / h;
            assert_relative_eq!(analytic[k], numeric, epsilon = 1e-5);
        }
    }

    #[test]
    fn rejects_invalid_knots() {
        let bind = |p: &[f64]| PiecewiseLinear.bind(&Vector::from(p));

        assert!(matches!(
            bind(&[0.0, 1.0]),
            Err(FunctionError::ParameterCount { found: 2, .. })
        ));
        assert!(matches!(
            bind(&[0.0, 1.0, 1.0, 2.0, 3.0]),
            Err(FunctionError::ParameterCount { found: 5, .. })
        ));
        assert!(matches!(
            bind(&[0.0, 1.0, 0.0, 2.0]),
            Err(FunctionError::NonIncreasingKnots { index: 1, .. })
        ));
        assert!(matches!(
            bind(&[0.0, f64::NAN, 1.0, 2.0]),
            Err(FunctionError::NonFiniteParameter { index: 1, .. })
        ));
    }
}
