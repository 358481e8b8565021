use std::ops::{Index, IndexMut};

use thiserror::Error;

use super::Vector;

/// Errors that can occur when building a [`Matrix`] from rows.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum ShapeError {
    /// A row has a different length than the first row.
    #[error("row {row} has {found} columns, expected {expected}")]
    Ragged {
        row: usize,
        expected: usize,
        found: usize,
    },

    /// Flat storage does not hold `nrows × ncols` values.
    #[error("{nrows}x{ncols} matrix cannot hold {found} values")]
    DataLength {
        nrows: usize,
        ncols: usize,
        found: usize,
    },
}

/// A dense, row-major matrix of `f64` values.
///
/// Matrices are used as Jacobians and as linear-system left-hand sides.
#[derive(Debug, Clone, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "RawMatrix"))]
pub struct Matrix {
    nrows: usize,
    ncols: usize,
    data: Vec<f64>,
}

#[cfg(feature = "serde")]
#[derive(serde::Deserialize)]
struct RawMatrix {
    nrows: usize,
    ncols: usize,
    data: Vec<f64>,
}

#[cfg(feature = "serde")]
impl TryFrom<RawMatrix> for Matrix {
    type Error = ShapeError;

    fn try_from(raw: RawMatrix) -> Result<Self, ShapeError> {
        Self::from_vec(raw.nrows, raw.ncols, raw.data)
    }
}

impl Matrix {
    /// Creates an `nrows × ncols` matrix of zeros.
    #[must_use]
    pub fn zeros(nrows: usize, ncols: usize) -> Self {
        Self {
            nrows,
            ncols,
            data: vec![0.0; nrows * ncols],
        }
    }

    /// Creates a matrix from row-major values.
    ///
    /// # Errors
    ///
    /// Returns [`ShapeError::DataLength`] unless `data` holds exactly
    /// `nrows * ncols` values.
    pub fn from_vec(nrows: usize, ncols: usize, data: Vec<f64>) -> Result<Self, ShapeError> {
        if data.len() != nrows * ncols {
            return Err(ShapeError::DataLength {
                nrows,
                ncols,
                found: data.len(),
            });
        }
        Ok(Self { nrows, ncols, data })
    }

    /// Creates a matrix from rows.
    ///
    /// An empty row list produces a `0 × 0` matrix.
    ///
    /// # Errors
    ///
    /// Returns [`ShapeError::Ragged`] if the rows have different lengths.
    pub fn from_rows<R>(rows: impl IntoIterator<Item = R>) -> Result<Self, ShapeError>
    where
        R: AsRef<[f64]>,
    {
        let mut nrows = 0;
        let mut ncols = None;
        let mut data = Vec::new();

        for (row, values) in rows.into_iter().enumerate() {
            let values = values.as_ref();
            let expected = *ncols.get_or_insert(values.len());
            if values.len() != expected {
                return Err(ShapeError::Ragged {
                    row,
                    expected,
                    found: values.len(),
                });
            }
            data.extend_from_slice(values);
            nrows += 1;
        }

        Ok(Self {
            nrows,
            ncols: ncols.unwrap_or(0),
            data,
        })
    }

    /// Returns the number of rows.
    #[must_use]
    pub fn nrows(&self) -> usize {
        self.nrows
    }

    /// Returns the number of columns.
    #[must_use]
    pub fn ncols(&self) -> usize {
        self.ncols
    }

    /// Returns true if the matrix has as many rows as columns.
    #[must_use]
    pub fn is_square(&self) -> bool {
        self.nrows == self.ncols
    }

    /// Returns row `i` as a slice.
    ///
    /// # Panics
    ///
    /// Panics if `i` is out of bounds.
    #[must_use]
    pub fn row(&self, i: usize) -> &[f64] {
        assert!(i < self.nrows, "row {i} out of bounds for {} rows", self.nrows);
        &self.data[i * self.ncols..(i + 1) * self.ncols]
    }

    /// Iterates over the rows.
    pub fn rows(&self) -> impl Iterator<Item = &[f64]> {
        (0..self.nrows).map(|i| self.row(i))
    }

    /// Swaps rows `a` and `b` in place.
    ///
    /// # Panics
    ///
    /// Panics if either row is out of bounds.
    pub fn swap_rows(&mut self, a: usize, b: usize) {
        if a == b {
            return;
        }
        for j in 0..self.ncols {
            self.data.swap(a * self.ncols + j, b * self.ncols + j);
        }
    }

    /// Returns `Aᵀ A`, an `ncols × ncols` matrix.
    #[must_use]
    pub fn transpose_multiply(&self) -> Matrix {
        let mut result = Matrix::zeros(self.ncols, self.ncols);
        for i in 0..self.ncols {
            for j in i..self.ncols {
                let sum: f64 = self.rows().map(|row| row[i] * row[j]).sum();
                result[(i, j)] = sum;
                result[(j, i)] = sum;
            }
        }
        result
    }

    /// Returns `Aᵀ v`, a vector of length `ncols`.
    ///
    /// # Panics
    ///
    /// Panics if `v.len() != nrows`.
    #[must_use]
    pub fn transpose_multiply_vector(&self, v: &Vector) -> Vector {
        assert_eq!(
            v.len(),
            self.nrows,
            "transpose multiply needs a vector of length {}, got {}",
            self.nrows,
            v.len()
        );
        (0..self.ncols)
            .map(|j| {
                self.rows()
                    .zip(v.iter())
                    .map(|(row, vi)| row[j] * vi)
                    .sum::<f64>()
            })
            .collect()
    }

    /// Returns `A x`, a vector of length `nrows`.
    ///
    /// # Panics
    ///
    /// Panics if `x.len() != ncols`.
    #[must_use]
    pub fn multiply_vector(&self, x: &Vector) -> Vector {
        assert_eq!(
            x.len(),
            self.ncols,
            "matrix multiply needs a vector of length {}, got {}",
            self.ncols,
            x.len()
        );
        self.rows()
            .map(|row| row.iter().zip(x.iter()).map(|(a, b)| a * b).sum::<f64>())
            .collect()
    }
}

impl Index<(usize, usize)> for Matrix {
    type Output = f64;

    fn index(&self, (i, j): (usize, usize)) -> &f64 {
        assert!(
            i < self.nrows && j < self.ncols,
            "index ({i}, {j}) out of bounds for {}x{} matrix",
            self.nrows,
            self.ncols
        );
        &self.data[i * self.ncols + j]
    }
}

impl IndexMut<(usize, usize)> for Matrix {
    fn index_mut(&mut self, (i, j): (usize, usize)) -> &mut f64 {
        assert!(
            i < self.nrows && j < self.ncols,
            "index ({i}, {j}) out of bounds for {}x{} matrix",
            self.nrows,
            self.ncols
        );
        &mut self.data[i * self.ncols + j]
    }
}
