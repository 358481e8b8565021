//! Thomas algorithm for tridiagonal systems.
//!
//! Row `i` of the system reads
//! `sub[i] * x[i - 1] + diag[i] * x[i] + sup[i] * x[i + 1] = rhs[i]`,
//! so `sub[0]` and `sup[n - 1]` are never used.
//!
//! No rows are interchanged, so the caller is responsible for supplying a
//! well-conditioned (typically diagonally dominant) system. Only an exactly
//! zero pivot is reported as singular.

use super::Error;

/// Solves a tridiagonal system of size `n = diag.len()`.
///
/// # Errors
///
/// Returns [`Error::DimensionMismatch`] if the four slices do not all have the
/// same length, or [`Error::Singular`] if a pivot is exactly zero.
pub fn solve(sub: &[f64], diag: &[f64], sup: &[f64], rhs: &[f64]) -> Result<Vec<f64>, Error> {
    let n = diag.len();
    for (what, found) in [
        ("sub-diagonal", sub.len()),
        ("super-diagonal", sup.len()),
        ("right-hand side", rhs.len()),
    ] {
        if found != n {
            return Err(Error::DimensionMismatch {
                what,
                expected: n,
                found,
            });
        }
    }

    if n == 0 {
        return Ok(Vec::new());
    }

    let mut mod_sup = vec![0.0; n];
    let mut mod_rhs = vec![0.0; n];

    for i in 0..n {
        let (prev_sup, prev_rhs) = if i == 0 {
            (0.0, 0.0)
        } else {
            (mod_sup[i - 1], mod_rhs[i - 1])
        };

        let pivot = diag[i] - sub[i] * prev_sup;
        if pivot == 0.0 {
            return Err(Error::Singular { row: i, pivot });
        }

        mod_sup[i] = sup[i] / pivot;
        mod_rhs[i] = (rhs[i] - sub[i] * prev_rhs) / pivot;
    }

    let mut x = mod_rhs;
    for i in (0..n - 1).rev() {
        x[i] -= mod_sup[i] * x[i + 1];
    }

    Ok(x)
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;

    #[test]
    fn empty_system_has_empty_solution() {
        assert_eq!(solve(&[], &[], &[], &[]), Ok(Vec::new()));
    }

    #[test]
    fn solves_diagonally_dominant_system() {
        // [2 1 0; 1 4 1; 0 1 2] x = b, with x = [1, -1, 2].
        let sub = [0.0, 1.0, 1.0];
        let diag = [2.0, 4.0, 2.0];
        let sup = [1.0, 1.0, 0.0];
        let rhs = [1.0, -1.0, 3.0];

        let x = solve(&sub, &diag, &sup, &rhs).expect("system is regular");

        assert_relative_eq!(x[0], 1.0, epsilon = 1e-12);
        assert_relative_eq!(x[1], -1.0, epsilon = 1e-12);
        assert_relative_eq!(x[2], 2.0, epsilon = 1e-12);
    }

    #[test]
    fn single_equation() {
        let x = solve(&[0.0], &[4.0], &[0.0], &[2.0]).unwrap();
        assert_relative_eq!(x[0], 0.5);
    }

    #[test]
    fn zero_pivot_is_singular() {
        assert_eq!(
            solve(&[0.0, 1.0], &[0.0, 1.0], &[1.0, 0.0], &[1.0, 1.0]),
            Err(Error::Singular {
                row: 0,
                pivot: 0.0
            })
        );

        // Second pivot 1 - 1 * (1 / 1) vanishes.
        assert!(matches!(
            solve(&[0.0, 1.0], &[1.0, 1.0], &[1.0, 0.0], &[1.0, 1.0]),
            Err(Error::Singular { row: 1, .. })
        ));
    }

    #[test]
    fn rejects_mismatched_lengths() {
        assert_eq!(
            solve(&[0.0, 1.0], &[2.0, 2.0], &[1.0, 0.0], &[1.0]),
            Err(Error::DimensionMismatch {
                what: "right-hand side",
                expected: 2,
                found: 1
            })
        );
    }
}
