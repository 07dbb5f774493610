//! End-to-end checks of the public solver API.

use nalgebra::{DMatrix, DVector};
use pf_solver::{
    BisectConfig, Monotonic, NewtonConfig, SolverError, bisect, newton_solve,
    newton_solve_bounded,
};

fn scalar(v: f64) -> DVector<f64> {
    DVector::from_element(1, v)
}

#[test]
fn exponential_decay_root() {
    // exp(-x) - 0.2 = 0, root at ln(5)
    let result = newton_solve(
        scalar(0.0),
        |x| Ok(scalar((-x[0]).exp() - 0.2)),
        |x| Ok(DMatrix::from_element(1, 1, -(-x[0]).exp())),
        &NewtonConfig::default(),
    )
    .unwrap();
    assert!((result.x[0] - 5.0_f64.ln()).abs() < 1e-9);
}

#[test]
fn bounded_solve_reports_jacobian_reuse() {
    // A well-behaved solve should reuse the cached Jacobian rather than
    // recomputing it every outer iteration.
    let result = newton_solve_bounded(
        scalar(1.0),
        |x| Ok(scalar(x[0] * x[0] - 2.0)),
        |x| Ok(DMatrix::from_element(1, 1, 2.0 * x[0])),
        &scalar(0.0),
        &scalar(10.0),
        &NewtonConfig::default(),
    )
    .unwrap();
    assert!((result.x[0] - std::f64::consts::SQRT_2).abs() < 1e-6);
    assert!(result.jacobian_evals <= result.iterations);
}

#[test]
fn newton_and_bisection_agree() {
    let target = 3.7;
    let newton = newton_solve(
        scalar(1.0),
        |x| Ok(scalar(x[0] * x[0] * x[0] - target)),
        |x| Ok(DMatrix::from_element(1, 1, 3.0 * x[0] * x[0])),
        &NewtonConfig::default(),
    )
    .unwrap();
    let bisected = bisect(
        0.0,
        4.0,
        |x| Ok(x * x * x),
        target,
        Monotonic::Increasing,
        &BisectConfig::default(),
    )
    .unwrap();
    assert!((newton.x[0] - bisected).abs() < 1e-6);
}

#[test]
fn failure_reports_the_iteration_budget() {
    let config = NewtonConfig {
        max_iterations: 7,
        ..NewtonConfig::default()
    };
    let err = newton_solve(
        scalar(2.0),
        |x| Ok(scalar(x[0] * x[0] + 1.0)),
        |x| Ok(DMatrix::from_element(1, 1, 2.0 * x[0].max(0.5))),
        &config,
    )
    .unwrap_err();
    match err {
        SolverError::ConvergenceFailed { what } => assert!(what.contains('7')),
        other => panic!("unexpected error: {other}"),
    }
}
