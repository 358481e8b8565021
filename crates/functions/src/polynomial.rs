use paramfit_core::{
    DifferentiableFunction, Function, FunctionError, ParameterGradient, ParametricFunction,
    Vector,
};

/// The family of polynomials in one variable.
///
/// Coefficients are ordered from the highest degree down, so `[7, 8, 9]`
/// binds `7x² + 8x + 9`. At least one coefficient is required.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Polynomial;

/// A polynomial bound by [`Polynomial`].
#[derive(Debug, Clone, PartialEq)]
pub struct BoundPolynomial {
    coefficients: Vector,
}

impl BoundPolynomial {
    /// Returns the coefficients, highest degree first.
    #[must_use]
    pub fn coefficients(&self) -> &Vector {
        &self.coefficients
    }

    #[must_use]
    pub fn degree(&self) -> usize {
        self.coefficients.len() - 1
    }
}

impl ParametricFunction for Polynomial {
    type Bound = BoundPolynomial;

    fn bind(&self, parameters: &Vector) -> Result<BoundPolynomial, FunctionError> {
        if parameters.is_empty() {
            return Err(FunctionError::ParameterCount {
                expected: "at least 1 coefficient",
                found: 0,
            });
        }
        Ok(BoundPolynomial {
            coefficients: parameters.clone(),
        })
    }
}

impl Function for BoundPolynomial {
    fn value(&self, point: &Vector) -> Result<f64, FunctionError> {
        FunctionError::check_dimension(point, 1)?;
        let x = point[0];
        Ok(self.coefficients.iter().fold(0.0, |acc, c| acc * x + c))
    }
}

impl DifferentiableFunction for BoundPolynomial {
    fn gradient(&self, point: &Vector) -> Result<Vector, FunctionError> {
        FunctionError::check_dimension(point, 1)?;
        let x = point[0];
        let degree = self.degree();

        // Horner on the derivative coefficients k·cₖ.
        let slope = self.coefficients[..degree]
            .iter()
            .zip((1..=degree).rev())
            .fold(0.0, |acc, (c, k)| {
                #[allow(clippy::cast_precision_loss)]
                let k = k as f64;
                acc * x + k * c
            });

        Ok(Vector::from([slope]))
    }
}

impl ParameterGradient for BoundPolynomial {
    fn parameter_gradient(&self, point: &Vector) -> Result<Vector, FunctionError> {
        FunctionError::check_dimension(point, 1)?;
        let x = point[0];

        let mut powers = Vec::with_capacity(self.coefficients.len());
        let mut power = 1.0;
        for _ in 0..self.coefficients.len() {
            powers.push(power);
            power *= x;
        }
        powers.reverse();

        Ok(Vector::from(powers))
    }
}
