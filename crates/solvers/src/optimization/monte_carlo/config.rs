use thiserror::Error;

/// Configuration for the Monte Carlo optimizer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Config {
    max_iters: usize,
}

/// Errors that can occur when validating a Monte Carlo config.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum ConfigError {
    #[error("max_iters must be positive")]
    MaxIters,
}

impl Default for Config {
    fn default() -> Self {
        Self { max_iters: 100_000 }
    }
}

impl Config {
    /// Creates a config that draws `max_iters` random candidates.
    ///
    /// # Errors
    ///
    /// Returns an error if `max_iters` is zero.
    pub fn new(max_iters: usize) -> Result<Self, ConfigError> {
        if max_iters == 0 {
            return Err(ConfigError::MaxIters);
        }
        Ok(Self { max_iters })
    }

    /// Returns the number of random candidates drawn.
    #[must_use]
    pub fn max_iters(&self) -> usize {
        self.max_iters
    }
}
