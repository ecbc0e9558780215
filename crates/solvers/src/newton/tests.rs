use super::*;

use std::f64::consts::SQRT_2;

use approx::assert_relative_eq;

fn square_minus_two() -> Equation {
    Equation::new("x^2 - 2", |x| x * x - 2.0)
}

fn config(epsilon: f64) -> Config {
    Config::new(epsilon, 8).unwrap()
}

#[test]
fn finds_square_root_of_two() {
    let eq = square_minus_two();
    let method = Newton::new(&eq, 1.0, config(1e-6)).unwrap();

    let solution = method.solve_unobserved().unwrap();

    assert_eq!(solution.status, Status::Converged);
    assert_relative_eq!(solution.root, SQRT_2, epsilon = 1e-7);
    assert!(solution.iters < 10);
}

#[test]
fn analytic_derivative_converges_quadratically() {
    let eq = square_minus_two().with_derivative(|x| 2.0 * x);
    let method = Newton::new(&eq, 1.0, config(1e-12)).unwrap();

    let mut errors = Vec::new();
    let solution = method
        .solve(|event: &Event| {
            errors.push(event.error);
            None
        })
        .unwrap();

    assert_eq!(solution.status, Status::Converged);
    assert_relative_eq!(solution.root, SQRT_2, epsilon = 1e-12);
    assert!(solution.iters <= 6);
    // Steps 2 and 3 are 0.0833 and 0.00245.
    assert!(errors[2] < errors[1] * errors[1]);
}

#[test]
fn rejects_flat_start() {
    let eq = Equation::new("x^3 - 2", |x| x * x * x - 2.0);

    assert!(matches!(
        Newton::new(&eq, 0.0, config(1e-6)),
        Err(Error::DegenerateStart { .. })
    ));
}

#[test]
fn rejects_non_finite_start() {
    let eq = square_minus_two();

    assert!(matches!(
        Newton::new(&eq, f64::NAN, config(1e-6)),
        Err(Error::InvalidConfig(ConfigError::NonFiniteStart { .. }))
    ));
}

#[test]
fn vanishing_derivative_is_an_error() {
    // The first step from x0 = 1 lands exactly on the minimum at 0.
    let eq = Equation::new("x^2 + 1", |x| x * x + 1.0).with_derivative(|x| 2.0 * x);
    let method = Newton::new(&eq, 1.0, config(1e-6)).unwrap();

    let err = method.solve_unobserved().unwrap_err();

    assert!(matches!(err, Error::DerivativeVanished { iter: 2, .. }));
}

#[test]
fn reports_last_estimate_when_cap_is_reached() {
    let eq = Equation::new("x^2 + 1", |x| x * x + 1.0);
    let config = config(1e-6).with_max_iters(5).unwrap();
    let method = Newton::new(&eq, 0.5, config).unwrap();

    let solution = method.solve_unobserved().unwrap();

    assert_eq!(solution.status, Status::MaxIters);
    assert_eq!(solution.iters, 5);
    assert!(solution.residual >= 1.0);
}

#[test]
fn observer_can_stop_early() {
    let eq = square_minus_two();
    let method = Newton::new(&eq, 1.0, config(1e-12)).unwrap();

    let solution = method
        .solve(|_: &Event| Some(Action::StopEarly))
        .unwrap();

    assert_eq!(solution.status, Status::StoppedByObserver);
    assert_eq!(solution.iters, 1);
    assert_relative_eq!(solution.root, 1.5, epsilon = 1e-3);
}

#[test]
fn check_accepts_steep_start() {
    let eq = square_minus_two();
    let method = Newton::new(&eq, 1.0, config(1e-6)).unwrap();

    assert!(method.check().is_ok());
}

#[test]
fn repeated_solves_are_identical() {
    let eq = square_minus_two();
    let method = Newton::new(&eq, 3.0, config(1e-9)).unwrap();

    assert_eq!(method.solve_unobserved().unwrap(), method.solve_unobserved().unwrap());
}

#[test]
fn check_reports_a_start_that_flattened_after_construction() {
    use std::sync::atomic::{AtomicUsize, Ordering};

    let calls = AtomicUsize::new(0);
    let eq = square_minus_two().with_derivative(move |x| {
        if calls.fetch_add(1, Ordering::Relaxed) == 0 {
            2.0 * x
        } else {
            0.0
        }
    });
    let method = Newton::new(&eq, 1.0, config(1e-6)).unwrap();

    assert!(matches!(
        method.check(),
        Err(Inapplicable::FlatStart { x0, .. }) if x0 == 1.0
    ));
}

#[test]
fn last_event_meets_both_tolerances() {
    let eq = square_minus_two();
    let epsilon = 1e-8;
    let method = Newton::new(&eq, 1.0, config(epsilon)).unwrap();

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
