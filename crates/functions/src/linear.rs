use paramfit_core::{
    DifferentiableFunction, Function, FunctionError, ParameterGradient, ParametricFunction,
    Vector,
};

/// The family of affine functions `f(x) = w · x + b`.
///
/// Parameters are `[w₁, …, wₙ, b]`, so `n + 1 >= 2` parameters bind a
/// function of an `n`-dimensional point.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Linear;

/// An affine function bound by [`Linear`].
#[derive(Debug, Clone, PartialEq)]
pub struct BoundLinear {
    weights: Vector,
    bias: f64,
}

impl BoundLinear {
    #[must_use]
    pub fn weights(&self) -> &Vector {
        &self.weights
    }

    #[must_use]
    pub fn bias(&self) -> f64 {
        self.bias
    }
}

impl ParametricFunction for Linear {
    type Bound = BoundLinear;

    fn bind(&self, parameters: &Vector) -> Result<BoundLinear, FunctionError> {
        match parameters.split_last() {
            Some((&bias, weights)) if !weights.is_empty() => Ok(BoundLinear {
                weights: Vector::from(weights),
                bias,
            }),
            _ => Err(FunctionError::ParameterCount {
                expected: "at least 2 (weights and bias)",
                found: parameters.len(),
            }),
        }
    }
}

impl Function for BoundLinear {
    fn value(&self, point: &Vector) -> Result<f64, FunctionError> {
        FunctionError::check_dimension(point, self.weights.len())?;
        Ok(self.weights.dot(point) + self.bias)
    }
}

impl DifferentiableFunction for BoundLinear {
    fn gradient(&self, point: &Vector) -> Result<Vector, FunctionError> {
        FunctionError::check_dimension(point, self.weights.len())?;
        Ok(self.weights.clone())
    }
}

impl ParameterGradient for BoundLinear {
    fn parameter_gradient(&self, point: &Vector) -> Result<Vector, FunctionError> {
        FunctionError::check_dimension(point, self.weights.len())?;
        let mut gradient = point.clone();
        gradient.push(1.0);
        Ok(gradient)
    }
}
