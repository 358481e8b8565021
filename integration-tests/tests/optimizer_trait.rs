//! Every optimizer drives the same least-squares line fit through the
//! `Optimizer` trait.

use integration_tests::least_squares;
use paramfit_core::{Functional, ParametricFunction, Vector};
use paramfit_functionals::L2Norm;
use paramfit_functions::Linear;
use paramfit_solvers::optimization::{
    Bounds, ConjugateGradient, Error, GaussNewton, MonteCarlo, Optimizer, SimulatedAnnealing,
    Solution, annealing, monte_carlo,
};

fn fit<Opt: Optimizer<L2Norm, Linear>>(
    optimizer: &mut Opt,
    initial: &Vector,
    bounds: Option<&Bounds>,
) -> Result<Solution, Error> {
    optimizer.minimize(&line_objective(), &Linear, initial, bounds)
}

fn line_objective() -> L2Norm {
    least_squares(&[(0.0, 1.0), (1.0, 3.0), (2.0, 5.0)]).unwrap()
}

fn bounds() -> Bounds {
    Bounds::new(Vector::from([0.0, 0.0]), Vector::from([4.0, 2.0])).unwrap()
}

#[test]
fn gradient_based_optimizers_find_the_line() {
    let initial = Vector::from([0.0, 0.0]);

    for solution in [
        fit(&mut GaussNewton::default(), &initial, None).unwrap(),
        fit(&mut ConjugateGradient::default(), &initial, None).unwrap(),
    ] {
        assert!((solution.parameters[0] - 2.0).abs() < 2e-3, "{solution:?}");
        assert!((solution.parameters[1] - 1.0).abs() < 2e-3, "{solution:?}");
    }
}

#[test]
fn randomized_optimizers_never_worsen_the_start() {
    let initial = Vector::from([1.0, 1.0]);
    let bounds = bounds();
    let initial_objective = line_objective()
        .value(&Linear.bind(&initial).unwrap())
        .unwrap();

    let mc = fit(
        &mut MonteCarlo::seeded(monte_carlo::Config::default(), 1),
        &initial,
        Some(&bounds),
    )
    .unwrap();
    let sa = fit(
        &mut SimulatedAnnealing::seeded(annealing::Config::default(), 1),
        &initial,
        Some(&bounds),
    )
    .unwrap();

    assert!(mc.objective <= initial_objective);
    assert!(sa.objective <= initial_objective);
}

#[test]
fn shared_preconditions_are_checked_by_every_optimizer() {
    let empty = Vector::default();
    let initial = Vector::from([1.0, 1.0]);
    let wrong_bounds = Bounds::new(Vector::from([0.0]), Vector::from([1.0])).unwrap();

    let results = [
        fit(&mut GaussNewton::default(), &empty, None),
        fit(&mut ConjugateGradient::default(), &empty, None),
        fit(&mut MonteCarlo::seeded(monte_carlo::Config::default(), 0), &empty, None),
        fit(
            &mut SimulatedAnnealing::seeded(annealing::Config::default(), 0),
            &empty,
            None,
        ),
    ];
    assert!(results.iter().all(|r| matches!(r, Err(Error::EmptyParameters))));

    assert!(matches!(
        fit(&mut GaussNewton::default(), &initial, Some(&wrong_bounds)),
        Err(Error::BoundsDimension {
            expected: 2,
            found: 1
        })
    ));
}
