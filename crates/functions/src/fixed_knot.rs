use paramfit_core::{
    DifferentiableFunction, Function, FunctionError, ParameterGradient, ParametricFunction,
    Vector,
};

use crate::knots::{abscissa, check_increasing, segment};

/// The family of piecewise-linear functions through fixed knot abscissas.
///
/// The abscissas are chosen at construction; the parameters are the values
/// at those knots. Unlike [`PiecewiseLinear`](crate::PiecewiseLinear), a
/// bound function is defined everywhere: the first and last segments are
/// extended linearly. At an interior knot the gradient is the slope of the
/// segment to its right.
#[derive(Debug, Clone, PartialEq)]
pub struct FixedKnotPiecewiseLinear {
    knots: Vec<f64>,
}

impl FixedKnotPiecewiseLinear {
    /// Creates a family over the given knot abscissas.
    ///
    /// # Errors
    ///
    /// Returns an error if there are fewer than two knots, or if they are not
    /// finite and strictly increasing.
    pub fn new(knots: impl Into<Vec<f64>>) -> Result<Self, FunctionError> {
        let knots = knots.into();
        if knots.len() < 2 {
            return Err(FunctionError::ParameterCount {
                expected: "at least 2 knots",
                found: knots.len(),
            });
        }
        check_increasing(&knots)?;
        Ok(Self { knots })
    }

    #[must_use]
    pub fn knots(&self) -> &[f64] {
        &self.knots
    }
}

/// A piecewise-linear function bound by [`FixedKnotPiecewiseLinear`].
#[derive(Debug, Clone, PartialEq)]
pub struct BoundFixedKnotPiecewiseLinear {
    xs: Vec<f64>,
    ys: Vec<f64>,
}

impl BoundFixedKnotPiecewiseLinear {
    /// Returns the segment for `x` and the position `t` along it, which lies
    /// outside `[0, 1]` when extrapolating.
    fn locate(&self, x: f64) -> (usize, f64) {
        let i = segment(&self.xs, x);
        (i, (x - self.xs[i]) / (self.xs[i + 1] - self.xs[i]))
    }
}

impl ParametricFunction for FixedKnotPiecewiseLinear {
    type Bound = BoundFixedKnotPiecewiseLinear;

    fn bind(&self, parameters: &Vector) -> Result<BoundFixedKnotPiecewiseLinear, FunctionError> {
        if parameters.len() != self.knots.len() {
            return Err(FunctionError::ParameterCount {
                expected: "one value per knot",
                found: parameters.len(),
            });
        }
        if let Some(index) = parameters.iter().position(|p| !p.is_finite()) {
            return Err(FunctionError::NonFiniteParameter {
                index,
                value: parameters[index],
            });
        }

        Ok(BoundFixedKnotPiecewiseLinear {
            xs: self.knots.clone(),
            ys: parameters.to_vec(),
        })
    }
}

impl Function for BoundFixedKnotPiecewiseLinear {
    fn value(&self, point: &Vector) -> Result<f64, FunctionError> {
        let (i, t) = self.locate(abscissa(point)?);
        Ok(self.ys[i] + t * (self.ys[i + 1] - self.ys[i]))
    }
}

impl DifferentiableFunction for BoundFixedKnotPiecewiseLinear {
    fn gradient(&self, point: &Vector) -> Result<Vector, FunctionError> {
        let i = segment(&self.xs, abscissa(point)?);
        let slope = (self.ys[i + 1] - self.ys[i]) / (self.xs[i + 1] - self.xs[i]);
        Ok(Vector::from([slope]))
    }
}

impl ParameterGradient for BoundFixedKnotPiecewiseLinear {
    /// Evaluates the hat basis: only the two knots of the containing segment
    /// have non-zero weight.
    fn parameter_gradient(&self, point: &Vector) -> Result<Vector, FunctionError> {
        let (i, t) = self.locate(abscissa(point)?);

        let mut gradient = Vector::zeros(self.ys.len());
        gradient[i] = 1.0 - t;
        gradient[i + 1] = t;
        Ok(gradient)
    }
}
