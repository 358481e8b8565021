use paramfit_core::{
    Domain, Function, FunctionError, ParameterGradient, ShapeError, Vector,
};
use thiserror::Error;

/// Errors that can occur when building [`Samples`].
#[derive(Debug, Error)]
pub enum SamplesError {
    #[error("domain has {nodes} nodes but {targets} target values were given")]
    LengthMismatch { nodes: usize, targets: usize },

    #[error("target {index} is not finite: {value}")]
    NonFiniteTarget { index: usize, value: f64 },

    #[error("reference function failed")]
    Reference(#[from] FunctionError),
}

/// Sample nodes paired with the reference value at each node.
#[derive(Debug, Clone, PartialEq)]
pub struct Samples {
    domain: Domain,
    targets: Vec<f64>,
}

impl Samples {
    /// Captures `reference` on every node of `domain`.
    ///
    /// # Errors
    ///
    /// Returns [`SamplesError::Reference`] if `reference` cannot be evaluated
    /// at some node, or [`SamplesError::NonFiniteTarget`] if it evaluates to
    /// NaN or infinity.
    pub fn new<F: Function + ?Sized>(domain: Domain, reference: &F) -> Result<Self, SamplesError> {
        let targets = domain
            .nodes()
            .iter()
            .map(|node| reference.value(node))
            .collect::<Result<Vec<_>, _>>()?;
        check_finite(&targets)?;
        Ok(Self { domain, targets })
    }

    /// Pairs the nodes of `domain` with explicit target values.
    ///
    /// # Errors
    ///
    /// Returns [`SamplesError::LengthMismatch`] unless there is exactly one
    /// target per node, or [`SamplesError::NonFiniteTarget`] for a NaN or
    /// infinite target.
    pub fn from_targets(domain: Domain, targets: Vec<f64>) -> Result<Self, SamplesError> {
        if domain.len() != targets.len() {
            return Err(SamplesError::LengthMismatch {
                nodes: domain.len(),
                targets: targets.len(),
            });
        }
        check_finite(&targets)?;
        Ok(Self { domain, targets })
    }

    #[must_use]
    pub fn domain(&self) -> &Domain {
        &self.domain
    }

    #[must_use]
    pub fn targets(&self) -> &[f64] {
        &self.targets
    }

    /// Returns the residuals `f(xᵢ) - yᵢ`.
    ///
    /// # Errors
    ///
    /// Propagates the first evaluation error of `function`.
    pub fn residuals<F: Function + ?Sized>(&self, function: &F) -> Result<Vector, FunctionError> {
        self.domain
            .nodes()
            .iter()
            .zip(&self.targets)
            .map(|(node, y)| function.value(node).map(|value| value - y))
            .collect()
    }

    /// Returns `Σ wᵢ ∇ₚf(xᵢ)` with weights `wᵢ = weight(rᵢ)`.
    ///
    /// An empty domain yields an empty vector.
    pub(crate) fn weighted_gradient<F, W>(
        &self,
        function: &F,
        weight: W,
    ) -> Result<Vector, FunctionError>
    where
        F: ParameterGradient + ?Sized,
        W: Fn(f64) -> f64,
    {
        let mut total: Option<Vector> = None;

        for (row, (node, y)) in self.domain.nodes().iter().zip(&self.targets).enumerate() {
            let w = weight(function.value(node)? - y);
            let gradient = function.parameter_gradient(node)?.scale(w);

            total = Some(match total {
                None => gradient,
                Some(sum) if sum.len() == gradient.len() => &sum + &gradient,
                Some(sum) => {
                    return Err(ShapeError::Ragged {
                        row,
                        expected: sum.len(),
                        found: gradient.len(),
                    }
                    .into());
                }
            });
        }

        Ok(total.unwrap_or_default())
    }
}

fn check_finite(targets: &[f64]) -> Result<(), SamplesError> {
    match targets.iter().position(|y| !y.is_finite()) {
        Some(index) => Err(SamplesError::NonFiniteTarget {
            index,
            value: targets[index],
        }),
        None => Ok(()),
    }
}
