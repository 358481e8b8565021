use std::error::Error as StdError;

use thiserror::Error;

/// Errors that can occur during a line search.
#[derive(Debug, Error)]
pub enum Error {
    #[error("no minimum bracketed after {expansions} step expansions")]
    Unbounded { expansions: usize },

    #[error("function is not finite at x = {x}: {value}")]
    NonFinite { x: f64, value: f64 },

    #[error("invalid interval [{left}, {right}]")]
    InvalidInterval { left: f64, right: f64 },

    #[error("precision must be finite and positive, got {0}")]
    InvalidPrecision(f64),

    #[error("function error: {0}")]
    Function(#[source] Box<dyn StdError + Send + Sync>),
}
