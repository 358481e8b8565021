use paramfit_core::{Domain, Function, FunctionError, Functional};

use crate::{Samples, SamplesError};

/// Largest absolute residual, `max |f(xᵢ) - yᵢ|`.
///
/// An empty domain has value 0, and a NaN residual makes the value NaN.
/// This functional has no gradient.
#[derive(Debug, Clone, PartialEq)]
pub struct LInfNorm {
    samples: Samples,
}

impl LInfNorm {
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

impl From<Samples> for LInfNorm {
    fn from(samples: Samples) -> Self {
        Self { samples }
    }
}

impl Functional for LInfNorm {
    fn value<F: Function + ?Sized>(&self, function: &F) -> Result<f64, FunctionError> {
        let mut max = 0.0_f64;
        for r in self.samples.residuals(function)?.iter() {
            if r.is_nan() {
                return Ok(f64::NAN);
            }
            max = max.max(r.abs());
        }
        Ok(max)
    }
}
