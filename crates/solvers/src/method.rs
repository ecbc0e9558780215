use nonlin_core::{DEFAULT_STEP, Equation, Observer, same_sign};

use crate::{Action, Config, Error, Inapplicable, Interval, Solution, Status};

/// The contract shared by every scalar root-finding method.
///
/// A method is built from an equation and validated parameters, can report
/// whether its convergence preconditions hold with [`check`](Method::check),
/// and runs with [`solve`](Method::solve). Methods hold no mutable state, so
/// solving twice gives identical results.
pub trait Method {
    /// Display name of the method.
    const NAME: &'static str;

    /// Event reported to observers once per iteration.
    type Event;

    /// Returns the equation being solved.
    fn equation(&self) -> &Equation;

    /// Returns the method's configuration.
    fn config(&self) -> &Config;

    /// Tests whether the method's convergence preconditions hold.
    ///
    /// The outcome is advisory; [`solve`](Method::solve) does not call it.
    ///
    /// # Errors
    ///
    /// Returns the first precondition found to fail.
    fn check(&self) -> Result<(), Inapplicable>;

    /// Runs the method, reporting each iteration to `observer`.
    ///
    /// # Errors
    ///
    /// Returns an error if an evaluation fails or the iteration cannot
    /// continue. Exhausting the iteration cap is not an error; it yields
    /// [`Status::MaxIters`].
    fn solve<Obs>(&self, observer: Obs) -> Result<Solution, Error>
    where
        Obs: Observer<Self::Event, Action>;

    /// Runs the method without an observer.
    ///
    /// # Errors
    ///
    /// See [`solve`](Method::solve).
    fn solve_unobserved(&self) -> Result<Solution, Error> {
        self.solve(())
    }
}

/// Writes a per-iteration `debug` record.
pub(crate) trait Record {
    fn record(&self, method: &'static str);
}

/// Logs the event if enabled and passes it to the observer.
///
/// Returns true if the observer asked to stop.
pub(crate) fn report<E, Obs>(
    method: &'static str,
    config: &Config,
    observer: &mut Obs,
    event: &E,
) -> bool
where
    E: Record,
    Obs: Observer<E, Action>,
{
    if config.log() {
        event.record(method);
    }
    matches!(observer.observe(event), Some(Action::StopEarly))
}

/// True when both the step error and the residual are within epsilon.
pub(crate) fn within(epsilon: f64, error: f64, residual: f64) -> bool {
    error <= epsilon && residual <= epsilon
}

pub(crate) fn finish(
    method: &'static str,
    status: Status,
    root: f64,
    residual: f64,
    iters: usize,
    config: &Config,
) -> Solution {
    if status == Status::MaxIters {
        tracing::warn!(
            method,
            root,
            residual,
            iters,
            "iteration cap reached without convergence"
        );
    }
    Solution {
        status,
        root,
        residual,
        iters,
        decimal_places: config.decimal_places(),
    }
}

/// Requires exactly one root on the interval.
///
/// A derivative that cannot be evaluated at either end skips the derivative
/// sign test rather than failing it.
pub(crate) fn check_interval(equation: &Equation, interval: &Interval) -> Result<(), Inapplicable> {
    let (left, right) = (interval.left(), interval.right());
    if !equation.root_exists(left, right, DEFAULT_STEP) {
        return Err(Inapplicable::NoRoot { left, right });
    }
    if let (Ok(d_left), Ok(d_right)) = (
        equation.derivative(left, DEFAULT_STEP),
        equation.derivative(right, DEFAULT_STEP),
    ) {
        if !same_sign(d_left, d_right) {
            return Err(Inapplicable::DerivativeChangesSign {
                left,
                right,
                d_left,
                d_right,
            });
        }
    }
    Ok(())
}

/// Requires `f'` to keep a strict sign between the interval ends.
pub(crate) fn check_monotonic(equation: &Equation, interval: &Interval) -> Result<(), Inapplicable> {
    let (left, right) = (interval.left(), interval.right());
    let slope = |x| {
        equation
            .derivative(x, DEFAULT_STEP)
            .map_err(|source| Inapplicable::DerivativeUnavailable { x, source })
    };
    let (d_left, d_right) = (slope(left)?, slope(right)?);
    if !same_sign(d_left, d_right) {
        return Err(Inapplicable::DerivativeChangesSign {
            left,
            right,
            d_left,
            d_right,
        });
    }
    Ok(())
}
