//! Numerical solvers for paramfit.
//!
//! - [`linear`] — Gaussian elimination with partial pivoting and the Thomas
//!   algorithm for tridiagonal systems
//! - [`line_search`] — interval bracketing and Fibonacci-section minimization
//!   of a scalar function
//! - [`optimization`] — optimizers that fit the parameters of a
//!   [`ParametricFunction`] against an objective functional
//!
//! [`ParametricFunction`]: paramfit_core::ParametricFunction

pub mod line_search;
pub mod linear;
pub mod optimization;
