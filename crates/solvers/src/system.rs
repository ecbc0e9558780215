//! Fixed-point iteration for a system of two equations.
//!
//! # Algorithm
//!
//! The system `f1(x, y) = 0, f2(x, y) = 0` is supplied together with an
//! iteration map `(phi1, phi2)` whose fixed point solves it. Starting from a
//! given point, each iteration applies `(x, y) ← (phi1(x, y), phi2(x, y))`.
//!
//! The step error is the Euclidean length of the change and the residual is
//! the largest `|f_i|` at the new point. The solver stops when both are
//! strictly less than `ε`.
//!
//! # Observer Events
//!
//! One [`Event`] is emitted per iteration, after the new point is evaluated
//! and before the convergence test.

mod event;
mod solution;


pub use event::Event;
pub use solution::Solution;

use std::fmt;

use nonlin_core::Observer;

use crate::{Action, Config, ConfigError, Error, Status, method::report};

/// Iteration cap used when the config does not set one.
pub const DEFAULT_MAX_ITERS: usize = 1_000;

const NAME: &str = "system";

type PlaneFn = dyn Fn([f64; 2]) -> [f64; 2] + Send + Sync;

/// Two equations in `x` and `y` with their iteration map.
pub struct System {
    label: String,
    equations: Box<PlaneFn>,
    map: Box<PlaneFn>,
}

impl System {
    /// Creates a system from its equations `(f1, f2)` and iteration map
    /// `(phi1, phi2)`.
    pub fn new<F, P>(label: impl Into<String>, equations: F, map: P) -> Self
    where
        F: Fn([f64; 2]) -> [f64; 2] + Send + Sync + 'static,
        P: Fn([f64; 2]) -> [f64; 2] + Send + Sync + 'static,
    {
        Self {
            label: label.into(),
            equations: Box::new(equations),
            map: Box::new(map),
        }
    }

    /// Returns the display label.
    #[must_use]
    pub fn label(&self) -> &str {
        &self.label
    }

    /// Evaluates `(f1, f2)` at `point`.
    #[must_use]
    pub fn evaluate(&self, point: [f64; 2]) -> [f64; 2] {
        (self.equations)(point)
    }

    /// Applies the iteration map at `point`.
    #[must_use]
    pub fn step(&self, point: [f64; 2]) -> [f64; 2] {
        (self.map)(point)
    }
}

impl fmt::Debug for System {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("System")
            .field("label", &self.label)
            .finish_non_exhaustive()
    }
}

/// Solves the system by fixed-point iteration from `start`.
///
/// # Errors
///
/// Returns an error if `start` is not finite, or if the map or the equations
/// produce a non-finite value ([`Error::NonFinitePoint`]).
pub fn solve<Obs>(
    system: &System,
    start: [f64; 2],
    config: &Config,
    mut observer: Obs,
) -> Result<Solution, Error>
where
    Obs: Observer<Event, Action>,
{
    if let Some(&value) = start.iter().find(|value| !value.is_finite()) {
        return Err(ConfigError::NonFiniteStart { value }.into());
    }

    let epsilon = config.epsilon();
    let max_iters = config.max_iters_or(DEFAULT_MAX_ITERS);
    let done = |status: Status, point: [f64; 2], values: [f64; 2], iters: usize| {
        if status == Status::MaxIters {
            tracing::warn!(
                method = NAME,
                ?point,
                iters,
                "iteration cap reached without convergence"
            );
        }
        Solution {
            status,
            point,
            values,
            iters,
            decimal_places: config.decimal_places(),
        }
    };

    let mut point_prev = start;

    let mut iter = 0;
    loop {
        iter += 1;

        let point = system.step(point_prev);
        let values = system.evaluate(point);
        if point.iter().chain(&values).any(|value| !value.is_finite()) {
            return Err(Error::NonFinitePoint { iter, point });
        }

        let [dx, dy] = [point[0] - point_prev[0], point[1] - point_prev[1]];
        let event = Event {
            iter,
            point_prev,
            point,
            values,
            error: dx.hypot(dy),
            residual: values[0].abs().max(values[1].abs()),
        };

        if report(NAME, config, &mut observer, &event) {
            return Ok(done(Status::StoppedByObserver, point, values, iter));
        }

        if event.error < epsilon && event.residual < epsilon {
            return Ok(done(Status::Converged, point, values, iter));
        }

        if iter >= max_iters {
            return Ok(done(Status::MaxIters, point, values, iter));
        }

        point_prev = point;
    }
}

/// Solves the system without an observer.
///
/// # Errors
///
/// See [`solve`].
pub fn solve_unobserved(
    system: &System,
    start: [f64; 2],
    config: &Config,
) -> Result<Solution, Error> {
    solve(system, start, config, ())
}
