use paramfit_core::Vector;
use thiserror::Error;

/// Per-parameter lower and upper limits for candidate generation.
#[derive(Debug, Clone, PartialEq)]
pub struct Bounds {
    min: Vector,
    max: Vector,
}

/// Errors that can occur when constructing [`Bounds`].
#[derive(Debug, Error, Clone, Copy, PartialEq)]
pub enum BoundsError {
    #[error("min has {min} entries but max has {max}")]
    LengthMismatch { min: usize, max: usize },

    #[error("bound {index} is not finite")]
    NonFinite { index: usize },

    #[error("bound {index} is inverted: min {min} > max {max}")]
    Inverted { index: usize, min: f64, max: f64 },
}

impl Bounds {
    /// Creates bounds from matching lower and upper limit vectors.
    ///
    /// # Errors
    ///
    /// Returns an error if the vectors differ in length, contain a non-finite
    /// entry, or have `min[i] > max[i]` for some `i`.
    pub fn new(min: Vector, max: Vector) -> Result<Self, BoundsError> {
        if min.len() != max.len() {
            return Err(BoundsError::LengthMismatch {
                min: min.len(),
                max: max.len(),
            });
        }

        for (index, (&lo, &hi)) in min.iter().zip(max.iter()).enumerate() {
            if !lo.is_finite() || !hi.is_finite() {
                return Err(BoundsError::NonFinite { index });
            }
            if lo > hi {
                return Err(BoundsError::Inverted {
                    index,
                    min: lo,
                    max: hi,
                });
            }
        }

        Ok(Self { min, max })
    }

    /// Returns the number of bounded parameters.
    #[must_use]
    pub fn len(&self) -> usize {
        self.min.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.min.is_empty()
    }

    #[must_use]
    pub fn min(&self) -> &Vector {
        &self.min
    }

    #[must_use]
    pub fn max(&self) -> &Vector {
        &self.max
    }

    /// Clamps `x` into the bounds of parameter `index`.
    #[must_use]
    pub fn clamp(&self, index: usize, x: f64) -> f64 {
        x.clamp(self.min[index], self.max[index])
    }
}
