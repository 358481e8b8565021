use paramfit_core::{
    DifferentiableFunctional, Domain, Function, FunctionError, Functional, ParameterGradient,
    Vector,
};

use crate::{Samples, SamplesError};

/// Sum of absolute residuals, `Σ |f(xᵢ) - yᵢ|`.
///
/// The gradient is the sub-gradient `Σ sign(rᵢ) ∇ₚf(xᵢ)` with `sign(0) = 0`.
#[derive(Debug, Clone, PartialEq)]
pub struct L1Norm {
    samples: Samples,
}

impl L1Norm {
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

impl From<Samples> for L1Norm {
    fn from(samples: Samples) -> Self {
        Self { samples }
    }
}

impl Functional for L1Norm {
    fn value<F: Function + ?Sized>(&self, function: &F) -> Result<f64, FunctionError> {
        Ok(self.samples.residuals(function)?.iter().map(|r| r.abs()).sum())
    }
}

impl DifferentiableFunctional for L1Norm {
    fn gradient<F: ParameterGradient + ?Sized>(
        &self,
        function: &F,
    ) -> Result<Vector, FunctionError> {
        self.samples.weighted_gradient(function, sign)
    }
}

fn sign(r: f64) -> f64 {
    if r > 0.0 {
        1.0
    } else if r < 0.0 {
        -1.0
    } else {
        0.0
    }
}
