//! Core traits and types for paramfit.
//!
//! This crate defines the shared abstractions that functionals, function
//! families, and optimizers build on:
//!
//! - [`Vector`] and [`Matrix`] — plain numeric containers with value-semantics
//!   arithmetic
//! - [`Function`], [`DifferentiableFunction`], [`ParameterGradient`] — a bound
//!   function evaluated at a point, optionally with gradients
//! - [`ParametricFunction`] — a factory that binds a parameter vector into a
//!   concrete function
//! - [`Domain`] — the fixed set of sample nodes a functional compares on
//! - [`Functional`], [`DifferentiableFunctional`], [`LeastSquaresFunctional`] —
//!   goodness-of-fit measures with increasing capabilities
//! - [`Observer`] — receives solver events and optionally returns control actions

mod domain;
mod function;
mod functional;
mod linalg;
mod observer;

pub use domain::{Domain, DomainError};
pub use function::{
    DifferentiableFunction, Function, FunctionError, ParameterGradient, ParametricFunction,
};
pub use functional::{DifferentiableFunctional, Functional, LeastSquaresFunctional};
pub use linalg::{Matrix, ShapeError, Vector};
pub use observer::Observer;
