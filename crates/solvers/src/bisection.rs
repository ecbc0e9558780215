//! Bisection (half-division) for scalar equations.
//!
//! # Algorithm
//!
//! Bisection keeps a bracket `[a, b]` whose ends have opposite signs. Each
//! iteration evaluates the midpoint `x = (a + b) / 2` and replaces the end
//! whose sign matches `f(x)`, halving the bracket.
//!
//! The method stops when the bracket width is within `2ε` and `|f(x)| ≤ ε`,
//! or immediately when the midpoint is an exact root.
//!
//! # When to Use
//!
//! Bisection is appropriate when:
//! - A sign-changing bracket is known
//! - Guaranteed convergence matters more than speed
//! - Derivatives are unavailable or unreliable
//!
//! # Observer Events
//!
//! One [`Event`] is emitted per iteration, after the midpoint is evaluated
//! and before the convergence test. Returning
//! [`Action::StopEarly`](crate::Action::StopEarly) returns the current
//! midpoint with [`Status::StoppedByObserver`].

mod event;


pub use event::Event;

use nonlin_core::{Equation, Observer};

use crate::{
    Action, Config, Error, Inapplicable, Interval, Method, Solution, Status,
    bracket::Bracket,
    method::{check_interval, check_monotonic, finish, report},
};

/// Iteration cap used when the config does not set one.
pub const DEFAULT_MAX_ITERS: usize = 10_000;

/// The bisection method on a fixed interval.
#[derive(Debug, Clone, Copy)]
pub struct Bisection<'a> {
    equation: &'a Equation,
    interval: Interval,
    config: Config,
}

impl<'a> Bisection<'a> {
    /// Creates a bisection method on `[left, right]`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidConfig`] if the bounds are non-finite or
    /// `left >= right`.
    pub fn new(equation: &'a Equation, left: f64, right: f64, config: Config) -> Result<Self, Error> {
        Ok(Self::on(equation, Interval::new(left, right)?, config))
    }

    /// Creates a bisection method on an already validated interval.
    #[must_use]
    pub fn on(equation: &'a Equation, interval: Interval, config: Config) -> Self {
        Self {
            equation,
            interval,
            config,
        }
    }

    /// Returns the starting interval.
    #[must_use]
    pub fn interval(&self) -> Interval {
        self.interval
    }
}

impl Method for Bisection<'_> {
    const NAME: &'static str = "bisection";

    type Event = Event;

    fn equation(&self) -> &Equation {
        self.equation
    }

    fn config(&self) -> &Config {
        &self.config
    }

    fn check(&self) -> Result<(), Inapplicable> {
        check_interval(self.equation, &self.interval)?;
        check_monotonic(self.equation, &self.interval)
    }

    fn solve<Obs>(&self, mut observer: Obs) -> Result<Solution, Error>
    where
        Obs: Observer<Event, Action>,
    {
        let f_left = self.equation.evaluate(self.interval.left())?;
        let f_right = self.equation.evaluate(self.interval.right())?;
        let mut bracket = Bracket::new(&self.interval, f_left, f_right);
        if !bracket.has_sign_change() {
            return Err(Error::NoSignChange {
                left: self.interval.left(),
                right: self.interval.right(),
                f_left,
                f_right,
            });
        }

        let epsilon = self.config.epsilon();
        let max_iters = self.config.max_iters_or(DEFAULT_MAX_ITERS);
        let done = |status, x, f_x, iter| finish(Self::NAME, status, x, f_x, iter, &self.config);

        let mut iter = 0;
        loop {
            iter += 1;

            let x = bracket.midpoint();
            let f_x = self.equation.evaluate(x)?;
            let event = Event {
                iter,
                bracket: bracket.as_array(),
                f_bracket: bracket.values(),
                x,
                f_x,
                error: bracket.width(),
                residual: f_x.abs(),
            };

            if report(Self::NAME, &self.config, &mut observer, &event) {
                return Ok(done(Status::StoppedByObserver, x, f_x, iter));
            }

            // The midpoint lies within half the bracket width of the root.
            #[allow(clippy::float_cmp)]
            if f_x == 0.0 || (event.error <= 2.0 * epsilon && event.residual <= epsilon) {
                return Ok(done(Status::Converged, x, f_x, iter));
            }

            if iter >= max_iters {
                return Ok(done(Status::MaxIters, x, f_x, iter));
            }

            bracket.shrink(x, f_x);
        }
    }
}
