use thiserror::Error;

/// Configuration for the line search.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Config {
    delta: f64,
    precision: f64,
    max_expansions: usize,
}

/// Errors that can occur when validating a line search config.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum ConfigError {
    #[error("delta must be finite and positive")]
    Delta,

    #[error("precision must be finite and positive")]
    Precision,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            delta: 1e-6,
            precision: 1e-7,
            max_expansions: 100,
        }
    }
}

impl Config {
    /// Creates a new config.
    ///
    /// # Errors
    ///
    /// Returns an error if `delta` or `precision` is not finite and positive.
    pub fn new(delta: f64, precision: f64, max_expansions: usize) -> Result<Self, ConfigError> {
        if !delta.is_finite() || delta <= 0.0 {
            return Err(ConfigError::Delta);
        }
        if !precision.is_finite() || precision <= 0.0 {
            return Err(ConfigError::Precision);
        }

        Ok(Self {
            delta,
            precision,
            max_expansions,
        })
    }

    /// Returns the initial probe step used to pick a downhill direction.
    #[must_use]
    pub fn delta(&self) -> f64 {
        self.delta
    }

    /// Returns the target width of the refined interval.
    #[must_use]
    pub fn precision(&self) -> f64 {
        self.precision
    }

    /// Returns the maximum number of step doublings while bracketing.
    #[must_use]
    pub fn max_expansions(&self) -> usize {
        self.max_expansions
    }
}
