use thiserror::Error;

/// Errors that can occur while solving a linear system.
#[derive(Debug, Error, Clone, Copy, PartialEq)]
pub enum Error {
    #[error("matrix is {rows}x{cols}, expected a square matrix")]
    NotSquare { rows: usize, cols: usize },

    #[error("{what} has length {found}, expected {expected}")]
    DimensionMismatch {
        what: &'static str,
        expected: usize,
        found: usize,
    },

    #[error("singular system: pivot {pivot} in row {row}")]
    Singular { row: usize, pivot: f64 },
}
