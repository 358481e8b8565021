use thiserror::Error;

use crate::Vector;

/// Errors that can occur when building a [`Domain`].
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum DomainError {
    #[error("node {index} has dimension {found}, expected {expected}")]
    NodeDimension {
        index: usize,
        expected: usize,
        found: usize,
    },

    #[error("a uniform grid needs at least 2 nodes, got {count}")]
    TooFewNodes { count: usize },
}

/// An immutable set of sample points sharing one dimension.
///
/// A functional compares a candidate function against reference values on
/// these nodes, so the domain is fixed when the functional is built.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "RawDomain"))]
pub struct Domain {
    dimension: usize,
    nodes: Vec<Vector>,
}

/// Unchecked wire form of a [`Domain`], validated by [`Domain::new`].
#[cfg(feature = "serde")]
#[derive(serde::Deserialize)]
struct RawDomain {
    dimension: usize,
    nodes: Vec<Vector>,
}

#[cfg(feature = "serde")]
impl TryFrom<RawDomain> for Domain {
    type Error = DomainError;

    fn try_from(raw: RawDomain) -> Result<Self, DomainError> {
        Self::new(raw.dimension, raw.nodes)
    }
}

impl Domain {
    /// Creates a domain after checking every node has `dimension` coordinates.
    ///
    /// # Errors
    ///
    /// Returns [`DomainError::NodeDimension`] for the first mismatched node.
    pub fn new(dimension: usize, nodes: Vec<Vector>) -> Result<Self, DomainError> {
        if let Some((index, node)) = nodes
            .iter()
            .enumerate()
            .find(|(_, node)| node.len() != dimension)
        {
            return Err(DomainError::NodeDimension {
                index,
                expected: dimension,
                found: node.len(),
            });
        }

        Ok(Self { dimension, nodes })
    }

    /// Creates a one-dimensional domain from abscissas.
    #[must_use]
    pub fn from_abscissas(xs: impl IntoIterator<Item = f64>) -> Self {
        Self {
            dimension: 1,
            nodes: xs.into_iter().map(|x| Vector::from([x])).collect(),
        }
    }

    /// Creates `count` evenly spaced one-dimensional nodes on `[start, end]`.
    ///
    /// # Errors
    ///
    /// Returns [`DomainError::TooFewNodes`] if `count < 2`.
    pub fn uniform(start: f64, end: f64, count: usize) -> Result<Self, DomainError> {
        if count < 2 {
            return Err(DomainError::TooFewNodes { count });
        }
        #[allow(clippy::cast_precision_loss)]
        let step = (end - start) / (count - 1) as f64;
        #[allow(clippy::cast_precision_loss)]
        let xs = (0..count).map(move |i| start + step * i as f64);
        Ok(Self::from_abscissas(xs))
    }

    /// Returns the dimension shared by all nodes.
    #[must_use]
    pub fn dimension(&self) -> usize {
        self.dimension
    }

    /// Returns the nodes in order.
    #[must_use]
    pub fn nodes(&self) -> &[Vector] {
        &self.nodes
    }

    /// Returns the number of nodes.
    #[must_use]
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Returns true if the domain has no nodes.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }
}
