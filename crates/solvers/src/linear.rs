//! Direct solvers for linear systems.
//!
//! - [`gauss`] — dense `A x = b` by Gaussian elimination with partial pivoting
//! - [`tridiagonal`] — banded systems by the Thomas algorithm
//!
//! Both report a (near-)zero pivot as [`Error::Singular`].

mod error;

pub mod gauss;
pub mod tridiagonal;

pub use error::Error;
pub use gauss::GaussElimination;

use paramfit_core::{Matrix, Vector};

/// A solver for square linear systems `A x = b`.
pub trait LinearSolver {
    /// Solves `a x = b` without modifying either input.
    ///
    /// # Errors
    ///
    /// Returns an error if the system is not square, the right-hand side has
    /// the wrong length, or the system is singular.
    fn solve(&self, a: &Matrix, b: &Vector) -> Result<Vector, Error>;
}
