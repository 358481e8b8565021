//! Small parametric functions and objectives shared by the optimizer tests.

use paramfit_core::{
    DifferentiableFunctional, Function, FunctionError, Functional, LeastSquaresFunctional,
    Matrix, ParameterGradient, ParametricFunction, Vector,
};

/// `f(x) = a x + b` with parameters `[a, b]`.
pub(super) struct Line;

pub(super) struct BoundLine {
    a: f64,
    b: f64,
}

impl ParametricFunction for Line {
    type Bound = BoundLine;

    fn bind(&self, parameters: &Vector) -> Result<BoundLine, FunctionError> {
        match parameters[..] {
            [a, b] => Ok(BoundLine { a, b }),
            _ => Err(FunctionError::ParameterCount {
                expected: "2",
                found: parameters.len(),
            }),
        }
    }
}

impl Function for BoundLine {
    fn value(&self, point: &Vector) -> Result<f64, FunctionError> {
        FunctionError::check_dimension(point, 1)?;
        Ok(self.a * point[0] + self.b)
    }
}

impl ParameterGradient for BoundLine {
    fn parameter_gradient(&self, point: &Vector) -> Result<Vector, FunctionError> {
        FunctionError::check_dimension(point, 1)?;
        Ok(Vector::from([point[0], 1.0]))
    }
}

/// `f(x) = Σ pᵢ xⁱ⁺¹`, a polynomial without constant term in any number of
/// parameters. With one sample point at `x = 1` its value is `Σ pᵢ`.
pub(super) struct Weights;

pub(super) struct BoundWeights(Vector);

impl ParametricFunction for Weights {
    type Bound = BoundWeights;

    fn bind(&self, parameters: &Vector) -> Result<BoundWeights, FunctionError> {
        Ok(BoundWeights(parameters.clone()))
    }
}

impl Function for BoundWeights {
    fn value(&self, point: &Vector) -> Result<f64, FunctionError> {
        FunctionError::check_dimension(point, 1)?;
        Ok(self
            .0
            .iter()
            .zip(1..)
            .map(|(p, k)| p * point[0].powi(k))
            .sum())
    }
}

impl ParameterGradient for BoundWeights {
    fn parameter_gradient(&self, point: &Vector) -> Result<Vector, FunctionError> {
        FunctionError::check_dimension(point, 1)?;
        Ok((1..).take(self.0.len()).map(|k| point[0].powi(k)).collect())
    }
}

/// Sum of squared residuals against fixed `(x, y)` samples.
pub(super) struct SumOfSquares {
    samples: Vec<(Vector, f64)>,
}

impl SumOfSquares {
    pub(super) fn new(points: &[(f64, f64)]) -> Self {
        Self {
            samples: points
                .iter()
                .map(|&(x, y)| (Vector::from([x]), y))
                .collect(),
        }
    }
}

impl Functional for SumOfSquares {
    fn value<F: Function + ?Sized>(&self, function: &F) -> Result<f64, FunctionError> {
        Ok(self.residual(function)?.norm_squared())
    }
}

impl DifferentiableFunctional for SumOfSquares {
    fn gradient<F: ParameterGradient + ?Sized>(
        &self,
        function: &F,
    ) -> Result<Vector, FunctionError> {
        let residual = self.residual(function)?;
        let jacobian = self.jacobian(function)?;
        Ok(jacobian.transpose_multiply_vector(&residual).scale(2.0))
    }
}

impl LeastSquaresFunctional for SumOfSquares {
    fn residual<F: Function + ?Sized>(&self, function: &F) -> Result<Vector, FunctionError> {
        self.samples
            .iter()
            .map(|(x, y)| function.value(x).map(|v| v - y))
            .collect()
    }

    fn jacobian<F: ParameterGradient + ?Sized>(
        &self,
        function: &F,
    ) -> Result<Matrix, FunctionError> {
        let rows = self
            .samples
            .iter()
            .map(|(x, _)| function.parameter_gradient(x))
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Matrix::from_rows(rows)?)
    }
}
