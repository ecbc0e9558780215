use super::*;

use std::f64::consts::SQRT_2;

use approx::assert_relative_eq;

use crate::ConfigError;

const CUBIC_ROOT: f64 = 1.521_379_706_804_567_6;

fn cubic() -> Equation {
    Equation::new("x^3 - x - 2", |x| x * x * x - x - 2.0)
}

fn config(epsilon: f64) -> Config {
    Config::new(epsilon, 6).unwrap()
}

#[test]
fn lambda_uses_steepest_end() {
    let eq = cubic();
    let method = FixedPoint::new(&eq, 1.0, 2.0, config(1e-6)).unwrap();

    // f'(1) = 2 and f'(2) = 11.
    assert_relative_eq!(method.lambda(), 1.0 / 11.0, epsilon = 1e-6);
    assert_relative_eq!(method.phi(CUBIC_ROOT).unwrap(), CUBIC_ROOT, epsilon = 1e-12);
}

#[test]
fn lambda_falls_back_to_one_for_flat_ends() {
    let eq = Equation::new("x", |x| x).with_derivative(|_| 0.0);
    let method = FixedPoint::new(&eq, -1.0, 1.0, config(1e-6)).unwrap();

    assert_relative_eq!(method.lambda(), 1.0);
}

#[test]
fn finds_root_of_cubic() {
    let eq = cubic();
    let method = FixedPoint::new(&eq, 1.0, 2.0, config(1e-6)).unwrap();

    assert!(method.check().is_ok());
    let solution = method.solve_unobserved().unwrap();

    assert_eq!(solution.status, Status::Converged);
    assert_relative_eq!(solution.root, CUBIC_ROOT, epsilon = 1e-5);
}

#[test]
fn finds_square_root_of_two() {
    let eq = Equation::new("x^2 - 2", |x| x * x - 2.0);
    let method = FixedPoint::new(&eq, 1.0, 2.0, config(1e-8)).unwrap();

    let solution = method.solve_unobserved().unwrap();

    assert_eq!(solution.status, Status::Converged);
    assert_relative_eq!(solution.root, SQRT_2, epsilon = 1e-7);
}

#[test]
fn check_rejects_expanding_map() {
    // f' < 0 makes phi'(x) = 1 + x/2, which is 1.5 at the left end.
    let eq = Equation::new("2 - x^2", |x| 2.0 - x * x);
    let method = FixedPoint::new(&eq, 1.0, 2.0, config(1e-6)).unwrap();

    match method.check() {
        Err(Inapplicable::ContractionViolated { x, slope }) => {
            assert_relative_eq!(x, 1.0);
            assert!(slope > 1.0);
        }
        other => panic!("expected contraction violation, got {other:?}"),
    }
}

#[test]
fn expanding_map_escapes_the_interval() {
    let eq = Equation::new("2 - x^2", |x| 2.0 - x * x);
    let method = FixedPoint::new(&eq, 1.0, 2.0, config(1e-6)).unwrap();

    match method.solve_unobserved() {
        Err(Error::EscapedInterval { x, .. }) => assert!(x > 2.0),
        other => panic!("expected escape, got {other:?}"),
    }
}

#[test]
fn check_reports_missing_root() {
    let eq = Equation::new("x^2 - 2", |x| x * x - 2.0);
    let method = FixedPoint::new(&eq, 2.0, 3.0, config(1e-6)).unwrap();

    assert!(matches!(method.check(), Err(Inapplicable::NoRoot { .. })));
}

#[test]
fn rejects_empty_or_inverted_interval() {
    let eq = cubic();
    for (left, right) in [(1.0, 1.0), (2.0, 1.0)] {
        assert!(matches!(
            FixedPoint::new(&eq, left, right, config(1e-6)),
            Err(Error::InvalidConfig(ConfigError::EmptyInterval { .. }))
        ));
    }
}

#[test]
fn reports_last_estimate_when_cap_is_reached() {
    let eq = cubic();
    let config = config(1e-12).with_max_iters(3).unwrap();
    let method = FixedPoint::new(&eq, 1.0, 2.0, config).unwrap();

    let mut seen = 0;
    let solution = method
        .solve(|event: &Event| {
            seen = event.iter;
            None
        })
        .unwrap();

    assert_eq!(solution.status, Status::MaxIters);
    assert_eq!(solution.iters, 3);
    assert_eq!(seen, 3);
}

#[test]
fn last_event_meets_both_tolerances() {
    let eq = cubic();
    let epsilon = 1e-8;
    let method = FixedPoint::new(&eq, 1.0, 2.0, config(epsilon)).unwrap();

    let mut last = None;
    let solution = method
        .solve(|event: &Event| {
            last = Some(*event);
            None
        })
        .unwrap();

    let last = last.unwrap();
    assert_eq!(solution.status, Status::Converged);
    assert_eq!(last.iter, solution.iters);
    assert!(last.error <= epsilon);
    assert!(last.residual <= epsilon);
}
