use thiserror::Error;

use crate::line_search;

/// Configuration for the nonlinear conjugate gradient optimizer.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Config {
    precision: f64,
    max_iters: usize,
    line_search: line_search::Config,
}

/// Errors that can occur when validating a conjugate gradient config.
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
            line_search: line_search::Config::default(),
        }
    }
}

impl Config {
    /// Creates a config with the default line search.
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
            line_search: line_search::Config::default(),
        })
    }

    /// Replaces the line search used to pick each step length.
    #[must_use]
    pub fn with_line_search(self, line_search: line_search::Config) -> Self {
        Self {
            line_search,
            ..self
        }
    }

    /// Returns the direction norm below which the search has converged.
    #[must_use]
    pub fn precision(&self) -> f64 {
        self.precision
    }

    #[must_use]
    pub fn max_iters(&self) -> usize {
        self.max_iters
    }

    #[must_use]
    pub fn line_search(&self) -> &line_search::Config {
        &self.line_search
    }
}
