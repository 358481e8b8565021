use approx::assert_abs_diff_eq;

use paramfit_core::{
    DifferentiableFunctional, Function, FunctionError, Functional, ParameterGradient, Vector,
};

use crate::{
    line_search,
    optimization::{
        Action, Bounds, Error, Optimizer, Status,
        fixtures::{Line, SumOfSquares, Weights},
    },
};

use super::{Config, ConfigError, ConjugateGradient, Event};

#[test]
fn fits_line_through_points() {
    let objective = SumOfSquares::new(&[(0.0, 1.0), (1.0, 3.0), (2.0, 5.0)]);

    let solution = ConjugateGradient::default()
        .minimize(&objective, &Line, &Vector::from([0.0, 0.0]), None, ())
        .expect("should converge");

    assert_eq!(solution.status, Status::Converged);
    assert_abs_diff_eq!(solution.parameters[0], 2.0, epsilon = 2e-3);
    assert_abs_diff_eq!(solution.parameters[1], 1.0, epsilon = 2e-3);
    assert!(solution.objective < 1e-5);
}

#[test]
fn matches_closed_form_least_squares() {
    // Σ (p x - y)² is minimized by p = Σ x y / Σ x².
    let points = [(1.0, 2.1), (2.0, 3.9), (3.0, 6.2), (4.0, 7.8)];
    let expected = points.iter().map(|(x, y)| x * y).sum::<f64>()
        / points.iter().map(|(x, _)| x * x).sum::<f64>();

    let config = Config::new(1e-6, 100).unwrap();
    let solution = ConjugateGradient::new(config)
        .minimize(&SumOfSquares::new(&points), &Weights, &Vector::from([0.0]), None, ())
        .unwrap();

    assert_eq!(solution.status, Status::Converged);
    assert_abs_diff_eq!(solution.parameters[0], expected, epsilon = 1e-6);
}

#[test]
fn starting_at_minimum_converges_immediately() {
    let objective = SumOfSquares::new(&[(0.0, 1.0), (1.0, 3.0)]);

    let solution = ConjugateGradient::default()
        .minimize(&objective, &Line, &Vector::from([2.0, 1.0]), None, ())
        .unwrap();

    assert_eq!(solution.status, Status::Converged);
    assert_eq!(solution.iters, 0);
    assert_eq!(solution.parameters, Vector::from([2.0, 1.0]));
}

#[test]
fn small_budget_reports_max_iters() {
    // Badly scaled: one step along the steepest descent does not converge.
    let objective = SumOfSquares::new(&[(0.0, 1.0), (10.0, -30.0), (20.0, 50.0)]);
    let config = Config::new(1e-9, 1).unwrap();

    let solution = ConjugateGradient::new(config)
        .minimize(&objective, &Line, &Vector::from([0.0, 0.0]), None, ())
        .unwrap();

    assert_eq!(solution.status, Status::MaxIters);
    assert_eq!(solution.iters, 1);
}

#[test]
fn does_not_modify_initial_parameters() {
    let objective = SumOfSquares::new(&[(0.0, 1.0), (1.0, 3.0)]);
    let initial = Vector::from([0.0, 0.0]);

    let mut optimizer = ConjugateGradient::default();
    Optimizer::minimize(&mut optimizer, &objective, &Line, &initial, None).unwrap();

    assert_eq!(initial, Vector::from([0.0, 0.0]));
}

#[test]
fn observer_sees_decreasing_objective_and_can_stop() {
    let objective = SumOfSquares::new(&[(0.0, 1.0), (1.0, 3.0), (2.0, 5.0)]);
    let mut values = Vec::new();

    let solution = ConjugateGradient::new(Config::new(1e-12, 100).unwrap())
        .minimize(
            &objective,
            &Line,
            &Vector::from([0.0, 0.0]),
            None,
            |event: &Event<'_>| {
                values.push(event.objective);
                (event.iter == 2).then_some(Action::StopEarly)
            },
        )
        .unwrap();

    assert_eq!(solution.status, Status::StoppedByObserver);
    assert_eq!(solution.iters, 2);
    assert_eq!(values.len(), 2);
    assert!(values[1] <= values[0]);
}

#[test]
fn line_search_failures_propagate() {
    let objective = SumOfSquares::new(&[(0.0, 1.0), (1.0, 3.0)]);
    let line_search = line_search::Config::new(1e-6, 1e-7, 0).unwrap();
    let config = Config::default().with_line_search(line_search);

    let result = ConjugateGradient::new(config).minimize(
        &objective,
        &Line,
        &Vector::from([0.0, 0.0]),
        None,
        (),
    );

    assert!(matches!(
        result,
        Err(Error::LineSearch(line_search::Error::Unbounded { expansions: 0 }))
    ));
}

#[test]
fn bounds_dimension_is_checked() {
    let objective = SumOfSquares::new(&[(0.0, 1.0)]);
    let bounds = Bounds::new(Vector::from([0.0]), Vector::from([1.0])).unwrap();

    let result = ConjugateGradient::default().minimize(
        &objective,
        &Line,
        &Vector::from([0.0, 0.0]),
        Some(&bounds),
        (),
    );

    assert!(matches!(result, Err(Error::BoundsDimension { .. })));
}

#[test]
fn config_rejects_non_positive_precision() {
    assert_eq!(Config::new(0.0, 10), Err(ConfigError::Precision));
}

/// Least squares whose gradient drops the last parameter.
struct TruncatedGradient(SumOfSquares);

impl Functional for TruncatedGradient {
    fn value<F: Function + ?Sized>(&self, function: &F) -> Result<f64, FunctionError> {
        self.0.value(function)
    }
}

impl DifferentiableFunctional for TruncatedGradient {
    fn gradient<F: ParameterGradient + ?Sized>(
        &self,
        function: &F,
    ) -> Result<Vector, FunctionError> {
        let full = self.0.gradient(function)?;
        Ok(Vector::from(&full[..full.len() - 1]))
    }
}

#[test]
fn gradient_of_wrong_length_is_an_error() {
    let objective = TruncatedGradient(SumOfSquares::new(&[(0.0, 1.0), (1.0, 3.0)]));

    let result = ConjugateGradient::default().minimize(
        &objective,
        &Line,
        &Vector::from([0.0, 0.0]),
        None,
        (),
    );

    assert!(matches!(
        result,
        Err(Error::GradientLength {
            expected: 2,
            found: 1
        })
    ));
}
