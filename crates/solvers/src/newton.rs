//! Newton's method for scalar equations.
//!
//! # Algorithm
//!
//! Starting from `x0`, each iteration follows the tangent to its zero
//! crossing: `x ← x - f(x) / f'(x)`. The slope comes from the equation's
//! analytic derivative when one was supplied, and otherwise from a forward
//! difference with step `√ε`.
//!
//! The method stops when `|x - x_prev| ≤ ε` and `|f(x)| ≤ ε`.
//!
//! # When to Use
//!
//! Newton's method is appropriate when:
//! - A good starting point is known
//! - `f` is smooth near the root
//! - Fast (quadratic) convergence is wanted
//!
//! # Limitations
//!
//! - **No bracket**: iterates may wander far from `x0`
//! - **Flat tangents**: a start with `|f'(x0)| ≤ 1e-6` is rejected at
//!   construction, and a slope that becomes numerically zero during the run
//!   fails with [`Error::DerivativeVanished`]
//!
//! # Observer Events
//!
//! One [`Event`] is emitted per iteration, after the new estimate is
//! evaluated and before the convergence test.

mod event;

#[cfg(test)]
mod tests;

pub use event::Event;

use nonlin_core::{DEFAULT_STEP, Equation, Observer};

use crate::{
    Action, Config, ConfigError, Error, Inapplicable, Method, Solution, Status,
    method::{finish, report, within},
};

/// Iteration cap used when the config does not set one.
pub const DEFAULT_MAX_ITERS: usize = 1_000;

/// Smallest starting slope magnitude accepted.
pub const MIN_START_SLOPE: f64 = 1e-6;

/// Slope magnitude treated as zero during iteration.
pub const VANISHING_SLOPE: f64 = 1e-15;

/// Newton's method from a single starting point.
#[derive(Debug, Clone, Copy)]
pub struct Newton<'a> {
    equation: &'a Equation,
    x0: f64,
    config: Config,
}

impl<'a> Newton<'a> {
    /// Creates Newton's method starting at `x0`.
    ///
    /// # Errors
    ///
    /// Returns an error if `x0` is not finite, if `f'(x0)` cannot be
    /// evaluated, or if `|f'(x0)| ≤ 1e-6` ([`Error::DegenerateStart`]).
    pub fn new(equation: &'a Equation, x0: f64, config: Config) -> Result<Self, Error> {
        if !x0.is_finite() {
            return Err(ConfigError::NonFiniteStart { value: x0 }.into());
        }

        let derivative = equation.derivative(x0, DEFAULT_STEP)?;
        if derivative.abs() <= MIN_START_SLOPE {
            return Err(Error::DegenerateStart { x0, derivative });
        }

        Ok(Self {
            equation,
            x0,
            config,
        })
    }

    /// Returns the starting point.
    #[must_use]
    pub fn x0(&self) -> f64 {
        self.x0
    }
}

impl Method for Newton<'_> {
    const NAME: &'static str = "newton";

    type Event = Event;

    fn equation(&self) -> &Equation {
        self.equation
    }

    fn config(&self) -> &Config {
        &self.config
    }

    fn check(&self) -> Result<(), Inapplicable> {
        let x0 = self.x0;
        let derivative = self
            .equation
            .derivative(x0, DEFAULT_STEP)
            .map_err(|source| Inapplicable::DerivativeUnavailable { x: x0, source })?;
        if derivative.abs() <= MIN_START_SLOPE {
            return Err(Inapplicable::FlatStart { x0, derivative });
        }
        Ok(())
    }

    fn solve<Obs>(&self, mut observer: Obs) -> Result<Solution, Error>
    where
        Obs: Observer<Event, Action>,
    {
        let epsilon = self.config.epsilon();
        let step = epsilon.sqrt();
        let max_iters = self.config.max_iters_or(DEFAULT_MAX_ITERS);
        let done = |status, x, f_x, iter| finish(Self::NAME, status, x, f_x, iter, &self.config);

        let mut x_prev = self.x0;
        let mut f_prev = self.equation.evaluate(x_prev)?;

        let mut iter = 0;
        loop {
            iter += 1;

            let derivative = self.equation.derivative(x_prev, step)?;
            if derivative.abs() <= VANISHING_SLOPE {
                return Err(Error::DerivativeVanished {
                    iter,
                    x: x_prev,
                    derivative,
                });
            }

            let x = x_prev - f_prev / derivative;
            let f_x = self.equation.evaluate(x)?;
            let event = Event {
                iter,
                x_prev,
                derivative,
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
