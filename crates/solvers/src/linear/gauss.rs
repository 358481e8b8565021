//! Gaussian elimination with partial pivoting.
//!
//! # Algorithm
//!
//! For each pivot column the row with the largest absolute entry at or below
//! the diagonal is swapped into place (together with its right-hand side
//! entry), and the entries below the pivot are eliminated. Back substitution
//! then solves the upper-triangular system.
//!
//! A pivot whose magnitude does not exceed the configured precision is
//! treated as singular. This is a coarse tolerance rather than a rank test:
//! well-posed but badly scaled systems can be rejected, so the precision is
//! configurable.

use paramfit_core::{Matrix, Vector};
use thiserror::Error;

use super::{Error, LinearSolver};

/// Configuration for [`GaussElimination`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Config {
    precision: f64,
}

/// Errors that can occur when validating a Gaussian elimination config.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum ConfigError {
    #[error("precision must be finite and non-negative")]
    Precision,
}

impl Default for Config {
    fn default() -> Self {
        Self { precision: 1e-3 }
    }
}

impl Config {
    /// Creates a config with the given pivot precision.
    ///
    /// # Errors
    ///
    /// Returns an error if `precision` is negative or non-finite.
    pub fn new(precision: f64) -> Result<Self, ConfigError> {
        if !precision.is_finite() || precision < 0.0 {
            return Err(ConfigError::Precision);
        }
        Ok(Self { precision })
    }

    /// Returns the smallest pivot magnitude accepted as non-singular.
    #[must_use]
    pub fn precision(&self) -> f64 {
        self.precision
    }
}

/// Dense solver using Gaussian elimination with partial pivoting.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct GaussElimination {
    config: Config,
}

impl GaussElimination {
    #[must_use]
    pub fn new(config: Config) -> Self {
        Self { config }
    }

    #[must_use]
    pub fn config(&self) -> &Config {
        &self.config
    }

    fn check_pivot(&self, row: usize, pivot: f64) -> Result<(), Error> {
        if pivot.abs() > self.config.precision {
            Ok(())
        } else {
            Err(Error::Singular { row, pivot })
        }
    }

    fn forward_elimination(&self, a: &mut Matrix, b: &mut Vector) -> Result<(), Error> {
        let n = a.nrows();

        for col in 0..n {
            let pivot_row = (col..n)
                .max_by(|&i, &j| a[(i, col)].abs().total_cmp(&a[(j, col)].abs()))
                .unwrap_or(col);

            if pivot_row != col {
                a.swap_rows(col, pivot_row);
                b.swap(col, pivot_row);
            }

            let pivot = a[(col, col)];
            self.check_pivot(col, pivot)?;

            for row in col + 1..n {
                let factor = a[(row, col)] / pivot;
                a[(row, col)] = 0.0;
                for k in col + 1..n {
                    a[(row, k)] -= factor * a[(col, k)];
                }
                b[row] -= factor * b[col];
            }
        }

        Ok(())
    }

    fn back_substitution(&self, a: &Matrix, b: &Vector) -> Result<Vector, Error> {
        let n = a.nrows();
        let mut x = Vector::zeros(n);

        for row in (0..n).rev() {
            let sum: f64 = (row + 1..n).map(|k| a[(row, k)] * x[k]).sum();
            let pivot = a[(row, row)];
            self.check_pivot(row, pivot)?;
            x[row] = (b[row] - sum) / pivot;
        }

        Ok(x)
    }
}

impl LinearSolver for GaussElimination {
    fn solve(&self, a: &Matrix, b: &Vector) -> Result<Vector, Error> {
        if !a.is_square() {
            return Err(Error::NotSquare {
                rows: a.nrows(),
                cols: a.ncols(),
            });
        }
        if b.len() != a.nrows() {
            return Err(Error::DimensionMismatch {
                what: "right-hand side",
                expected: a.nrows(),
                found: b.len(),
            });
        }

        let mut a = a.clone();
        let mut b = b.clone();
        self.forward_elimination(&mut a, &mut b)?;
        self.back_substitution(&a, &b)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;

    fn solve(rows: &[&[f64]], b: &[f64]) -> Result<Vector, Error> {
        let a = Matrix::from_rows(rows.iter().copied()).unwrap();
        GaussElimination::default().solve(&a, &Vector::from(b))
    }

    #[test]
    fn solves_three_by_three_system() {
        // Known solution x = [2, 3, -1].
        let x = solve(
            &[&[2.0, 1.0, -1.0], &[-3.0, -1.0, 2.0], &[-2.0, 1.0, 2.0]],
            &[8.0, -11.0, -3.0],
        )
        .expect("system is regular");

        assert_relative_eq!(x[0], 2.0, epsilon = 1e-12);
        assert_relative_eq!(x[1], 3.0, epsilon = 1e-12);
        assert_relative_eq!(x[2], -1.0, epsilon = 1e-12);
    }

    #[test]
    fn pivots_past_zero_diagonal() {
        // The leading zero is only solvable with a row interchange.
        let x = solve(&[&[0.0, 1.0], &[1.0, 1.0]], &[2.0, 3.0]).expect("pivoting recovers");

        assert_relative_eq!(x[0], 1.0, epsilon = 1e-12);
        assert_relative_eq!(x[1], 2.0, epsilon = 1e-12);
    }

    #[test]
    fn recovers_known_solution_of_random_like_system() {
        let a = Matrix::from_rows([
            [4.0, -2.0, 1.0, 3.0],
            [3.0, 6.0, -4.0, 2.0],
            [2.0, 1.0, 8.0, -5.0],
            [1.0, -3.0, 2.0, 7.0],
        ])
        .unwrap();
        let expected = Vector::from([1.5, -2.0, 0.25, 4.0]);
        let b = a.multiply_vector(&expected);

        let x = GaussElimination::default().solve(&a, &b).unwrap();

        for (xi, ei) in x.iter().zip(expected.iter()) {
            assert_relative_eq!(xi, ei, epsilon = 1e-3);
        }
    }

    #[test]
    fn does_not_modify_inputs() {
        let a = Matrix::from_rows([[0.0, 1.0], [1.0, 1.0]]).unwrap();
        let b = Vector::from([2.0, 3.0]);
        let (a_before, b_before) = (a.clone(), b.clone());

        GaussElimination::default().solve(&a, &b).unwrap();

        assert_eq!(a, a_before);
        assert_eq!(b, b_before);
    }

    #[test]
    fn singular_matrix_is_degenerate() {
        let result = solve(&[&[1.0, 2.0], &[2.0, 4.0]], &[1.0, 2.0]);
        assert!(matches!(result, Err(Error::Singular { row: 1, .. })));
    }

    #[test]
    fn precision_is_a_coarse_threshold() {
        let a = Matrix::from_rows([[1e-4, 0.0], [0.0, 1.0]]).unwrap();
        let b = Vector::from([1e-4, 1.0]);

        let coarse = GaussElimination::default().solve(&a, &b);
        assert!(matches!(coarse, Err(Error::Singular { row: 0, .. })));

        let fine = GaussElimination::new(Config::new(1e-12).unwrap())
            .solve(&a, &b)
            .expect("small pivot accepted with a finer precision");
        assert_relative_eq!(fine[0], 1.0, epsilon = 1e-12);
    }

    #[test]
    fn rejects_non_square_and_mismatched_rhs() {
        let rect = Matrix::from_rows([[1.0, 2.0, 3.0], [4.0, 5.0, 6.0]]).unwrap();
        assert_eq!(
            GaussElimination::default().solve(&rect, &Vector::from([1.0, 2.0])),
            Err(Error::NotSquare { rows: 2, cols: 3 })
        );

        let square = Matrix::from_rows([[1.0, 0.0], [0.0, 1.0]]).unwrap();
        assert_eq!(
            GaussElimination::default().solve(&square, &Vector::from([1.0])),
            Err(Error::DimensionMismatch {
                what: "right-hand side",
                expected: 2,
                found: 1
            })
        );
    }

    #[test]
    fn config_rejects_negative_precision() {
        assert_eq!(Config::new(-1.0), Err(ConfigError::Precision));
        assert_eq!(Config::new(f64::NAN), Err(ConfigError::Precision));
    }
}
