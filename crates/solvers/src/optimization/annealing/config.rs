use thiserror::Error;

/// Which point simulated annealing perturbs to generate candidates.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum PerturbFrom {
    /// Always perturb the initial parameters, keeping exploration wide.
    #[default]
    Initial,

    /// Perturb the most recently accepted parameters (a classic random walk).
    Current,
}

/// Configuration for simulated annealing.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Config {
    initial_temperature: f64,
    min_temperature: f64,
    quench: f64,
    max_iters: usize,
    perturb_from: PerturbFrom,
}

/// Errors that can occur when validating a simulated annealing config.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum ConfigError {
    #[error("initial_temperature must be finite and positive")]
    InitialTemperature,

    #[error("min_temperature must be finite, non-negative, and below initial_temperature")]
    MinTemperature,

    #[error("quench must be finite and positive")]
    Quench,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            initial_temperature: 1.0,
            min_temperature: 0.01,
            quench: 1.0,
            max_iters: 100_000,
            perturb_from: PerturbFrom::Initial,
        }
    }
}

impl Config {
    /// Creates a config with the given temperature range.
    ///
    /// The quench factor, proposal cap, and perturbation base keep their
    /// defaults; use the `with_*` methods to change them.
    ///
    /// # Errors
    ///
    /// Returns an error if `initial_temperature` is not finite and positive,
    /// or if `min_temperature` is negative, non-finite, or not below
    /// `initial_temperature`.
    pub fn new(initial_temperature: f64, min_temperature: f64) -> Result<Self, ConfigError> {
        if !initial_temperature.is_finite() || initial_temperature <= 0.0 {
            return Err(ConfigError::InitialTemperature);
        }
        if !min_temperature.is_finite()
            || min_temperature < 0.0
            || min_temperature >= initial_temperature
        {
            return Err(ConfigError::MinTemperature);
        }

        Ok(Self {
            initial_temperature,
            min_temperature,
            ..Self::default()
        })
    }

    /// Sets the quench factor `c` of the bounded schedule `T0 · exp(-c · i^(1/d))`.
    ///
    /// # Errors
    ///
    /// Returns an error if `quench` is not finite and positive.
    pub fn with_quench(self, quench: f64) -> Result<Self, ConfigError> {
        if !quench.is_finite() || quench <= 0.0 {
            return Err(ConfigError::Quench);
        }
        Ok(Self { quench, ..self })
    }

    /// Sets the maximum number of candidate proposals.
    #[must_use]
    pub fn with_max_iters(self, max_iters: usize) -> Self {
        Self { max_iters, ..self }
    }

    #[must_use]
    pub fn with_perturb_from(self, perturb_from: PerturbFrom) -> Self {
        Self {
            perturb_from,
            ..self
        }
    }

    #[must_use]
    pub fn initial_temperature(&self) -> f64 {
        self.initial_temperature
    }

    /// Returns the temperature at or below which annealing stops.
    #[must_use]
    pub fn min_temperature(&self) -> f64 {
        self.min_temperature
    }

    #[must_use]
    pub fn quench(&self) -> f64 {
        self.quench
    }

    /// Returns the maximum number of candidate proposals.
    #[must_use]
    pub fn max_iters(&self) -> usize {
        self.max_iters
    }

    #[must_use]
    pub fn perturb_from(&self) -> PerturbFrom {
        self.perturb_from
    }
}
