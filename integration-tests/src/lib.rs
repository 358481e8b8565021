//! Shared helpers for the end-to-end tests and the `fit_line` example.
//!
//! The crate wires the paramfit crates together the way an application
//! would: sample data becomes a [`Domain`] plus targets, a functional scores
//! a parametric family against them, and an optimizer fits the parameters.

use paramfit_core::{Domain, Vector};
use paramfit_functionals::{L2Norm, SamplesError};
use paramfit_functions::Linear;
use paramfit_solvers::optimization::{self, GaussNewton, Status};
use serde::Deserialize;
use thiserror::Error;

/// Errors raised while reading sample points.
#[derive(Debug, Error, PartialEq)]
pub enum ParseError {
    #[error("input is empty, expected a point count")]
    MissingCount,

    #[error("invalid point count {0:?}")]
    InvalidCount(String),

    #[error("expected {expected} points, found {found}")]
    MissingPoints { expected: usize, found: usize },

    #[error("line {line}: expected two numbers, found {found:?}")]
    InvalidPoint { line: usize, found: String },
}

/// Errors raised while fitting a line.
#[derive(Debug, Error)]
pub enum FitError {
    #[error("invalid samples")]
    Samples(#[from] SamplesError),

    #[error("optimization failed")]
    Optimization(#[from] optimization::Error),

    #[error("fit did not converge: {0:?}")]
    NotConverged(Status),
}

/// Parses a point count `n` followed by `n` lines of whitespace-separated
/// `x y` pairs.
///
/// Blank lines are skipped and lines past the `n`th point are ignored.
///
/// # Errors
///
/// Returns a [`ParseError`] if the count is missing or malformed, a point
/// line does not hold exactly two numbers, or fewer than `n` points follow.
pub fn parse_points(input: &str) -> Result<Vec<(f64, f64)>, ParseError> {
    let mut lines = input
        .lines()
        .enumerate()
        .map(|(index, line)| (index + 1, line.trim()))
        .filter(|(_, line)| !line.is_empty());

    let (_, count) = lines.next().ok_or(ParseError::MissingCount)?;
    let expected: usize = count
        .parse()
        .map_err(|_| ParseError::InvalidCount(count.to_string()))?;

    let points = lines
        .take(expected)
        .map(|(line, text)| parse_point(text).ok_or_else(|| ParseError::InvalidPoint {
            line,
            found: text.to_string(),
        }))
        .collect::<Result<Vec<_>, _>>()?;

    if points.len() < expected {
        return Err(ParseError::MissingPoints {
            expected,
            found: points.len(),
        });
    }
    Ok(points)
}

fn parse_point(text: &str) -> Option<(f64, f64)> {
    let mut fields = text.split_whitespace().map(str::parse::<f64>);
    match (fields.next(), fields.next(), fields.next()) {
        (Some(Ok(x)), Some(Ok(y)), None) => Some((x, y)),
        _ => None,
    }
}

/// Builds an [`L2Norm`] comparing against the `y` values at the `x` values.
///
/// # Errors
///
/// Propagates [`SamplesError`] from the functional.
pub fn least_squares(points: &[(f64, f64)]) -> Result<L2Norm, SamplesError> {
    let domain = Domain::from_abscissas(points.iter().map(|&(x, _)| x));
    let targets = points.iter().map(|&(_, y)| y).collect();
    L2Norm::from_targets(domain, targets)
}

/// Fits `y = a x + b` by Gauss–Newton on the sum of squared residuals and
/// returns `(a, b)`.
///
/// # Errors
///
/// Returns an error if fewer than two distinct abscissas make the normal
/// equations singular, or if the fit does not converge.
pub fn fit_line(points: &[(f64, f64)]) -> Result<(f64, f64), FitError> {
    let objective = least_squares(points)?;
    let solution = GaussNewton::default().minimize(
        &objective,
        &Linear,
        &Vector::from([0.0, 0.0]),
        None,
        (),
    )?;

    if solution.status != Status::Converged {
        return Err(FitError::NotConverged(solution.status));
    }
    Ok((solution.parameters[0], solution.parameters[1]))
}

/// A fitting problem stored as JSON.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Dataset {
    pub name: String,
    pub initial: Vector,
    pub points: Vec<Point>,
}

#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Dataset {
    /// Parses a dataset from JSON.
    ///
    /// # Errors
    ///
    /// Returns an error if the JSON does not describe a dataset.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    #[must_use]
    pub fn pairs(&self) -> Vec<(f64, f64)> {
        self.points.iter().map(|p| (p.x, p.y)).collect()
    }
}
