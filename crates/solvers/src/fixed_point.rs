//! Fixed-point (simple) iteration for scalar equations.
//!
//! # Algorithm
//!
//! The equation is rewritten as `x = phi(x)` with `phi(x) = x - λ f(x)`,
//! where `λ = 1 / max(|f'(left)|, |f'(right)|)` is fixed when the method is
//! built. Starting at the interval midpoint, each iteration applies
//! `x ← phi(x)`.
//!
//! The method stops when `|x - x_prev| ≤ ε` and `|f(x)| ≤ ε`.
//!
//! # When to Use
//!
//! Fixed-point iteration is appropriate when `phi` is a contraction on the
//! interval, which [`check`](Method::check) tests by sampling `|phi'(x)|` at
//! 100 evenly spaced points.
//!
//! # Limitations
//!
//! - **Decreasing functions**: `λ` is always positive, so for `f' < 0` the
//!   map `phi` pushes away from the root and `check` reports the violation
//! - **Escape**: an iterate that leaves the interval ends the run with
//!   [`Error::EscapedInterval`]
//!
//! # Observer Events
//!
//! One [`Event`] is emitted per iteration, after the new estimate is
//! evaluated and before the convergence test.

mod event;

#[cfg(test)]
mod tests;

pub use event::Event;

use nonlin_core::{Equation, EvaluationError, Observer, forward_difference};

use crate::{
    Action, Config, Error, Inapplicable, Interval, Method, Solution, Status,
    method::{check_interval, finish, report, within},
};

/// Iteration cap used when the config does not set one.
pub const DEFAULT_MAX_ITERS: usize = 1_000;

/// Finite-difference step used for `λ` and the contraction check.
pub const PHI_STEP: f64 = 1e-6;

/// Number of points sampled by the contraction check.
pub const CONTRACTION_SAMPLES: usize = 100;

/// Fixed-point iteration on a fixed interval.
#[derive(Debug, Clone, Copy)]
pub struct FixedPoint<'a> {
    equation: &'a Equation,
    interval: Interval,
    config: Config,
    lambda: f64,
}

impl<'a> FixedPoint<'a> {
    /// Creates fixed-point iteration on `[left, right]`.
    ///
    /// # Errors
    ///
    /// Returns an error if the bounds are invalid or `f'` cannot be
    /// evaluated at either end.
    pub fn new(equation: &'a Equation, left: f64, right: f64, config: Config) -> Result<Self, Error> {
        Self::on(equation, Interval::new(left, right)?, config)
    }

    /// Creates fixed-point iteration on an already validated interval.
    ///
    /// # Errors
    ///
    /// Returns an error if `f'` cannot be evaluated at either end.
    pub fn on(equation: &'a Equation, interval: Interval, config: Config) -> Result<Self, Error> {
        let d_left = equation.derivative(interval.left(), PHI_STEP)?;
        let d_right = equation.derivative(interval.right(), PHI_STEP)?;
        let steepest = d_left.abs().max(d_right.abs());
        let lambda = if steepest > 0.0 { steepest.recip() } else { 1.0 };

        Ok(Self {
            equation,
            interval,
            config,
            lambda,
        })
    }

    /// Returns the starting interval.
    #[must_use]
    pub fn interval(&self) -> Interval {
        self.interval
    }

    /// Returns the relaxation factor `λ`.
    #[must_use]
    pub fn lambda(&self) -> f64 {
        self.lambda
    }

    /// Evaluates the iteration map `phi(x) = x - λ f(x)`.
    ///
    /// # Errors
    ///
    /// Returns an error if `f(x)` cannot be evaluated.
    pub fn phi(&self, x: f64) -> Result<f64, EvaluationError> {
        Ok(x - self.lambda * self.equation.evaluate(x)?)
    }
}

impl Method for FixedPoint<'_> {
    const NAME: &'static str = "fixed-point";

    type Event = Event;

    fn equation(&self) -> &Equation {
        self.equation
    }

    fn config(&self) -> &Config {
        &self.config
    }

    fn check(&self) -> Result<(), Inapplicable> {
        check_interval(self.equation, &self.interval)?;

        for x in self.interval.samples(CONTRACTION_SAMPLES) {
            let slope = forward_difference(|x| self.phi(x), x, PHI_STEP)
                .map_err(|source| Inapplicable::DerivativeUnavailable { x, source })?;
            // NaN slopes fail too.
            #[allow(clippy::neg_cmp_op_on_partial_ord)]
            if !(slope.abs() < 1.0) {
                return Err(Inapplicable::ContractionViolated { x, slope });
            }
        }
        Ok(())
    }

    fn solve<Obs>(&self, mut observer: Obs) -> Result<Solution, Error>
    where
        Obs: Observer<Event, Action>,
    {
        let epsilon = self.config.epsilon();
        let max_iters = self.config.max_iters_or(DEFAULT_MAX_ITERS);
        let done = |status, x, f_x, iter| finish(Self::NAME, status, x, f_x, iter, &self.config);

        let mut x_prev = self.interval.midpoint();

        let mut iter = 0;
        loop {
            iter += 1;

            let x = self.phi(x_prev)?;
            if !self.interval.contains(x) {
                return Err(Error::EscapedInterval {
                    iter,
                    x,
                    left: self.interval.left(),
                    right: self.interval.right(),
                });
            }

            let f_x = self.equation.evaluate(x)?;
            let event = Event {
                iter,
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
        }
    }
}
