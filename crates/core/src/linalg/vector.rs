use std::ops::{Add, Deref, DerefMut, Mul, Neg, Sub};

/// An ordered sequence of `f64` values.
///
/// A `Vector` may grow with [`Vector::push`] while it is being built and is
/// treated as fixed-length afterwards. Elementwise helpers require operands
/// of equal length and panic otherwise.
#[derive(Debug, Clone, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Vector(Vec<f64>);

impl Vector {
    /// Creates a vector from owned values.
    #[must_use]
    pub fn new(values: Vec<f64>) -> Self {
        Self(values)
    }

    /// Creates a vector of `len` zeros.
    #[must_use]
    pub fn zeros(len: usize) -> Self {
        Self(vec![0.0; len])
    }

    /// Creates an empty vector with room for `capacity` values.
    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        Self(Vec::with_capacity(capacity))
    }

    /// Appends a value.
    pub fn push(&mut self, value: f64) {
        self.0.push(value);
    }

    /// Returns the elementwise sum `self + other`.
    ///
    /// # Panics
    ///
    /// Panics if the lengths differ.
    #[must_use]
    pub fn sum(&self, other: &Vector) -> Vector {
        self.zip_with(other, "sum", |a, b| a + b)
    }

    /// Returns the elementwise difference `self - other`.
    ///
    /// # Panics
    ///
    /// Panics if the lengths differ.
    #[must_use]
    pub fn subtract(&self, other: &Vector) -> Vector {
        self.zip_with(other, "subtract", |a, b| a - b)
    }

    /// Returns `self * factor`.
    #[must_use]
    pub fn scale(&self, factor: f64) -> Vector {
        self.0.iter().map(|v| v * factor).collect()
    }

    /// Returns `-self`.
    #[must_use]
    pub fn negate(&self) -> Vector {
        self.0.iter().map(|v| -v).collect()
    }

    /// Returns the scalar (dot) product of `self` and `other`.
    ///
    /// # Panics
    ///
    /// Panics if the lengths differ.
    #[must_use]
    pub fn dot(&self, other: &Vector) -> f64 {
        assert_length("dot", self.len(), other.len());
        self.0.iter().zip(&other.0).map(|(a, b)| a * b).sum()
    }

    /// Returns the squared Euclidean norm, `self · self`.
    #[must_use]
    pub fn norm_squared(&self) -> f64 {
        self.0.iter().map(|v| v * v).sum()
    }

    /// Returns the Euclidean norm.
    #[must_use]
    pub fn norm(&self) -> f64 {
        self.norm_squared().sqrt()
    }

    /// Returns true if every element is finite.
    #[must_use]
    pub fn is_finite(&self) -> bool {
        self.0.iter().all(|v| v.is_finite())
    }

    /// Consumes the vector and returns its values.
    #[must_use]
    pub fn into_inner(self) -> Vec<f64> {
        self.0
    }

    fn zip_with(&self, other: &Vector, op: &str, f: impl Fn(f64, f64) -> f64) -> Vector {
        assert_length(op, self.len(), other.len());
        self.0.iter().zip(&other.0).map(|(&a, &b)| f(a, b)).collect()
    }
}

fn assert_length(op: &str, left: usize, right: usize) {
    assert_eq!(
        left, right,
        "vector {op} requires equal lengths: {left} vs {right}"
    );
}

impl Deref for Vector {
    type Target = [f64];

    fn deref(&self) -> &[f64] {
        &self.0
    }
}

impl DerefMut for Vector {
    fn deref_mut(&mut self) -> &mut [f64] {
        &mut self.0
    }
}

impl AsRef<[f64]> for Vector {
    fn as_ref(&self) -> &[f64] {
        &self.0
    }
}

impl From<Vec<f64>> for Vector {
    fn from(values: Vec<f64>) -> Self {
        Self(values)
    }
}

impl<const N: usize> From<[f64; N]> for Vector {
    fn from(values: [f64; N]) -> Self {
        Self(values.to_vec())
    }
}

impl From<&[f64]> for Vector {
    fn from(values: &[f64]) -> Self {
        Self(values.to_vec())
    }
}

impl FromIterator<f64> for Vector {
    fn from_iter<T: IntoIterator<Item = f64>>(iter: T) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl IntoIterator for Vector {
    type Item = f64;
    type IntoIter = std::vec::IntoIter<f64>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl<'a> IntoIterator for &'a Vector {
    type Item = &'a f64;
    type IntoIter = std::slice::Iter<'a, f64>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

impl Add for &Vector {
    type Output = Vector;

    fn add(self, rhs: &Vector) -> Vector {
        self.sum(rhs)
    }
}

impl Sub for &Vector {
    type Output = Vector;

    fn sub(self, rhs: &Vector) -> Vector {
        self.subtract(rhs)
    }
}

impl Mul<f64> for &Vector {
    type Output = Vector;

    fn mul(self, rhs: f64) -> Vector {
        self.scale(rhs)
    }
}

impl Neg for &Vector {
    type Output = Vector;

    fn neg(self) -> Vector {
        self.negate()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;

    #[test]
    fn arithmetic_is_pure() {
        let a = Vector::from([1.0, 2.0, 3.0]);
        let b = Vector::from([0.5, -1.0, 2.0]);

        let sum = a.sum(&b);
        let diff = a.subtract(&b);

        assert_eq!(sum, Vector::from([1.5, 1.0, 5.0]));
        assert_eq!(diff, Vector::from([0.5, 3.0, 1.0]));
        // Operands are untouched.
        assert_eq!(a, Vector::from([1.0, 2.0, 3.0]));
        assert_eq!(b, Vector::from([0.5, -1.0, 2.0]));
    }

    #[test]
    fn operators_match_named_helpers() {
        let a = Vector::from([1.0, -2.0]);
        let b = Vector::from([3.0, 4.0]);

        assert_eq!(&a + &b, a.sum(&b));
        assert_eq!(&a - &b, a.subtract(&b));
        assert_eq!(&a * 2.0, Vector::from([2.0, -4.0]));
        assert_eq!(-&a, Vector::from([-1.0, 2.0]));
    }

    #[test]
    fn products_and_norms() {
        let a = Vector::from([3.0, 4.0]);
        let b = Vector::from([1.0, 2.0]);

        assert_relative_eq!(a.dot(&b), 11.0);
        assert_relative_eq!(a.norm_squared(), 25.0);
        assert_relative_eq!(a.norm(), 5.0);
        assert_relative_eq!(Vector::default().norm(), 0.0);
    }

    #[test]
    fn clone_is_independent() {
        let original = Vector::from([1.0, 2.0]);
        let mut copy = original.clone();
        copy[0] = 10.0;
        copy.push(3.0);

        assert_eq!(original, Vector::from([1.0, 2.0]));
        assert_eq!(copy.len(), 3);
    }

    #[test]
    #[should_panic(expected = "vector sum requires equal lengths: 2 vs 3")]
    fn mismatched_lengths_panic() {
        let _ = Vector::from([1.0, 2.0]).sum(&Vector::from([1.0, 2.0, 3.0]));
    }
}
