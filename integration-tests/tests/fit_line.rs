use approx::assert_relative_eq;

use integration_tests::{FitError, ParseError, fit_line, parse_points};
use paramfit_solvers::{linear, optimization};

#[test]
fn fits_exact_line_from_text() {
    let points = parse_points("3\n0 1\n1 3\n2 5\n").unwrap();
    let (a, b) = fit_line(&points).unwrap();

    assert_relative_eq!(a, 2.0, epsilon = 1e-9);
    assert_relative_eq!(b, 1.0, epsilon = 1e-9);
}

#[test]
fn fits_noisy_line_to_least_squares_solution() {
    // Closed form: a = cov(x, y) / var(x), b = ȳ - a x̄.
    let points = [(0.0, 0.9), (1.0, 3.2), (2.0, 4.8), (3.0, 7.1), (4.0, 9.0)];
    let n = points.len() as f64;
    let x_mean = points.iter().map(|p| p.0).sum::<f64>() / n;
    let y_mean = points.iter().map(|p| p.1).sum::<f64>() / n;
    let cov: f64 = points.iter().map(|(x, y)| (x - x_mean) * (y - y_mean)).sum();
    let var: f64 = points.iter().map(|(x, _)| (x - x_mean).powi(2)).sum();

    let (a, b) = fit_line(&points).unwrap();

    assert_relative_eq!(a, cov / var, epsilon = 1e-9);
    assert_relative_eq!(b, y_mean - cov / var * x_mean, epsilon = 1e-9);
}

#[test]
fn single_point_is_degenerate() {
    let result = fit_line(&[(1.0, 2.0)]);

    assert!(matches!(
        result,
        Err(FitError::Optimization(optimization::Error::LinearSolve(
            linear::Error::Singular { .. }
        )))
    ));
}

#[test]
fn no_points_is_degenerate() {
    assert!(matches!(
        fit_line(&[]),
        Err(FitError::Optimization(optimization::Error::LinearSolve(
            linear::Error::Singular { row: 0, .. }
        )))
    ));
}

#[test]
fn parses_with_blank_lines_and_extra_whitespace() {
    let points = parse_points("\n  2\n\n 0.5   -1 \n1e1 2\n").unwrap();
    assert_eq!(points, vec![(0.5, -1.0), (10.0, 2.0)]);
}

#[test]
fn reports_malformed_input() {
    assert_eq!(parse_points(""), Err(ParseError::MissingCount));
    assert_eq!(
        parse_points("two\n"),
        Err(ParseError::InvalidCount("two".into()))
    );
    assert_eq!(
        parse_points("2\n0 1\n"),
        Err(ParseError::MissingPoints {
            expected: 2,
            found: 1
        })
    );
    assert_eq!(
        parse_points("2\n0 1\n1 2 3\n"),
        Err(ParseError::InvalidPoint {
            line: 3,
            found: "1 2 3".into()
        })
    );
}
