use thiserror::Error;

/// Configuration for the Gauss–Newton optimizer.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Config {
    precision: f64,
    max_iters: usize,
}

/// Errors that can occur when validating a Gauss–Newton config.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum ConfigError {
    #[error("precision must be finite and positive")]
    Precision,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            precision: 1e-3,
            max_iters: 1000,
        }
    }
}

impl Config {
    /// Creates a new config.
    ///
    /// # Errors
    ///
    /// Returns an error if `precision` is not finite and positive.
    pub fn new(precision: f64, max_iters: usize) -> Result<Self, ConfigError> {
        if !precision.is_finite() || precision <= 0.0 {
            return Err(ConfigError::Precision);
        }
        Ok(Self {
            precision,
            max_iters,
        })
    }

    /// Returns the step norm below which the iteration has converged.
    #[must_use]
    pub fn precision(&self) -> f64 {
        self.precision
    }

    #[must_use]
    pub fn max_iters(&self) -> usize {
        self.max_iters
    }
}
