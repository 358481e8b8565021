//! Dense numeric containers.
//!
//! All arithmetic helpers are pure: they borrow their operands and return a
//! new value. Optimizers can therefore hold on to a parameter vector across
//! iterations without worrying that a later update mutates it.

mod matrix;
mod vector;

pub use matrix::{Matrix, ShapeError};
pub use vector::Vector;
