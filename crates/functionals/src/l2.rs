use paramfit_core::{
    DifferentiableFunctional, Domain, Function, FunctionError, Functional,
    LeastSquaresFunctional, Matrix, ParameterGradient, Vector,
};

use crate::{Samples, SamplesError};

/// Sum of squared residuals, `Σ (f(xᵢ) - yᵢ)²`.
///
/// Besides its gradient `2 Σ rᵢ ∇ₚf(xᵢ)`, this functional exposes the
/// residual vector and its Jacobian, which makes it usable with Gauss–Newton.
#[derive(Debug, Clone, PartialEq)]
pub struct L2Norm {
    samples: Samples,
}

impl L2Norm {
    /// Builds the functional against `reference` evaluated on `domain`.
    ///
    /// # Errors
    ///
    /// Returns an error if `reference` cannot be evaluated on `domain`.
    pub fn new<F: Function + ?Sized>(domain: Domain, reference: &F) -> Result<Self, SamplesError> {
        Samples::new(domain, reference).map(Self::from)
    }

    /// Builds the functional against explicit target values.
    ///
    /// # Errors
    ///
    /// Returns an error unless there is one target per node.
    pub fn from_targets(domain: Domain, targets: Vec<f64>) -> Result<Self, SamplesError> {
        Samples::from_targets(domain, targets).map(Self::from)
    }

    #[must_use]
    pub fn samples(&self) -> &Samples {
        &self.samples
    }
}

impl From<Samples> for L2Norm {
    fn from(samples: Samples) -> Self {
        Self { samples }
    }
}

impl Functional for L2Norm {
    fn value<F: Function + ?Sized>(&self, function: &F) -> Result<f64, FunctionError> {
        Ok(self.samples.residuals(function)?.norm_squared())
    }
}

impl DifferentiableFunctional for L2Norm {
    fn gradient<F: ParameterGradient + ?Sized>(
        &self,
        function: &F,
    ) -> Result<Vector, FunctionError> {
        self.samples.weighted_gradient(function, |r| 2.0 * r)
    }
}

impl LeastSquaresFunctional for L2Norm {
    fn residual<F: Function + ?Sized>(&self, function: &F) -> Result<Vector, FunctionError> {
        self.samples.residuals(function)
    }

    fn jacobian<F: ParameterGradient + ?Sized>(
        &self,
        function: &F,
    ) -> Result<Matrix, FunctionError> {
        let rows = self
            .samples
            .domain()
            .nodes()
            .iter()
            .map(|node| function.parameter_gradient(node))
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Matrix::from_rows(rows)?)
    }
}
