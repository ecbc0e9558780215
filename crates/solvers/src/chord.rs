//! The chord method (false position) for scalar equations.
//!
//! # Algorithm
//!
//! The chord method draws the secant through the bracket ends and takes its
//! zero crossing `x = a - f(a)(b - a) / (f(b) - f(a))` as the next estimate.
//! Before each new secant, the previous estimate replaces `b` if
//! `f(a) f(x_prev) < 0` and `a` otherwise.
//!
//! The method stops when `|x - x_prev| ≤ ε` and `|f(x)| ≤ ε`.
//!
//! # When to Use
//!
//! The chord method is appropriate when:
//! - `f` is monotonic and keeps its convexity on the interval
//! - Derivatives are unavailable
//! - Bisection is too slow
//!
//! # Limitations
//!
//! - **Flat secants**: if `f(b)` and `f(a)` agree to within machine precision
//!   relative to their size, the crossing is undefined and the method fails
//!   with [`Error::DegenerateSecant`]
//! - **One-sided convergence**: on a convex function one end never moves,
//!   so convergence is linear
//!
//! # Observer Events
//!
//! One [`Event`] is emitted per iteration, after the new estimate is
//! evaluated and before the convergence test.

mod event;


pub use event::Event;

use nonlin_core::{Equation, Observer};

use crate::{
    Action, Config, Error, Inapplicable, Interval, Method, Solution, Status,
    bracket::Bracket,
    method::{check_interval, check_monotonic, finish, report, within},
};

/// Iteration cap used when the config does not set one.
pub const DEFAULT_MAX_ITERS: usize = 10_000;

/// The chord method on a fixed interval.
#[derive(Debug, Clone, Copy)]
pub struct Chord<'a> {
    equation: &'a Equation,
    interval: Interval,
    config: Config,
}

impl<'a> Chord<'a> {
    /// Creates a chord method on `[left, right]`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidConfig`] if the bounds are non-finite or
    /// `left >= right`.
    pub fn new(equation: &'a Equation, left: f64, right: f64, config: Config) -> Result<Self, Error> {
        Ok(Self::on(equation, Interval::new(left, right)?, config))
    }

    /// Creates a chord method on an already validated interval.
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

impl Method for Chord<'_> {
    const NAME: &'static str = "chord";

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

        let epsilon = self.config.epsilon();
        let max_iters = self.config.max_iters_or(DEFAULT_MAX_ITERS);
        let done = |status, x, f_x, iter| finish(Self::NAME, status, x, f_x, iter, &self.config);

        let mut x_prev = secant_root(&bracket, 0)?;
        let mut f_prev = self.equation.evaluate(x_prev)?;

        let mut iter = 0;
        loop {
            iter += 1;

            bracket.shrink(x_prev, f_prev);
            let x = secant_root(&bracket, iter)?;
            let f_x = self.equation.evaluate(x)?;
            let event = Event {
                iter,
                bracket: bracket.as_array(),
                f_bracket: bracket.values(),
                x_prev,
                x,
                f_x,
                error: (x - x_prev).abs(),
                residual: f_x.abs(),
            };

            if report(Self::NAME, &self.config, &mut observer, &event) {
                return Ok(done(Status::StoppedByObserver, x, f_x, iter));
            }

            if within(epsilon, event.error, event.residual) {
                return Ok(done(Status::Converged, x, f_x, iter));
            }

            if iter >= max_iters {
                return Ok(done(Status::MaxIters, x, f_x, iter));
            }

            x_prev = x;
            f_prev = f_x;
        }
    }
}

/// The secant crossing, or [`Error::DegenerateSecant`] on iteration `iter`.
///
/// The initial secant through the starting interval is iteration 0.
fn secant_root(bracket: &Bracket, iter: usize) -> Result<f64, Error> {
    bracket.secant_root().ok_or_else(|| {
        let [left, right] = bracket.as_array();
        let [f_left, f_right] = bracket.values();
        Error::DegenerateSecant {
            iter,
            left,
            right,
            f_left,
            f_right,
        }
    })
}
