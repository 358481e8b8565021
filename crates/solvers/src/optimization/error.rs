use paramfit_core::FunctionError;
use thiserror::Error;

use crate::{line_search, linear};

/// Errors that can occur during optimization.
#[derive(Debug, Error)]
pub enum Error {
    #[error("initial parameter vector is empty")]
    EmptyParameters,

    #[error("bounds have dimension {found}, expected {expected}")]
    BoundsDimension { expected: usize, found: usize },

    #[error("jacobian is {rows}x{cols}, expected {expected_rows}x{expected_cols}")]
    JacobianShape {
        rows: usize,
        cols: usize,
        expected_rows: usize,
        expected_cols: usize,
    },

    #[error("gradient has {found} entries, expected one per parameter ({expected})")]
    GradientLength { expected: usize, found: usize },

    #[error("function error")]
    Function(#[from] FunctionError),

    #[error("linear solve failed")]
    LinearSolve(#[from] linear::Error),

    #[error("line search failed")]
    LineSearch(#[from] line_search::Error),
}
