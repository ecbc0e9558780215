use nonlin_core::EvaluationError;
use thiserror::Error;

use crate::ConfigError;

/// Errors that can occur while constructing or running a method.
#[derive(Debug, Error)]
pub enum Error {
    #[error("invalid config")]
    InvalidConfig(#[from] ConfigError),

    #[error("evaluation failed")]
    Evaluation(#[from] EvaluationError),

    /// The endpoints of the interval have the same sign.
    #[error("no sign change on [{left}, {right}]: f(left) = {f_left}, f(right) = {f_right}")]
    NoSignChange {
        left: f64,
        right: f64,
        f_left: f64,
        f_right: f64,
    },

    /// The derivative at the starting point is too small to take a Newton step.
    #[error("derivative at x0 = {x0} is too close to zero: {derivative}")]
    DegenerateStart { x0: f64, derivative: f64 },

    /// The derivative became numerically zero during iteration.
    #[error("derivative vanished at x = {x} on iteration {iter}: {derivative}")]
    DerivativeVanished { iter: usize, x: f64, derivative: f64 },

    /// A fixed-point iterate left the interval.
    #[error("iterate x = {x} escaped [{left}, {right}] on iteration {iter}")]
    EscapedInterval {
        iter: usize,
        x: f64,
        left: f64,
        right: f64,
    },

    /// The secant through the current bracket is flat or produced a non-finite point.
    #[error(
        "secant through [{left}, {right}] is degenerate on iteration {iter}: \
         f(left) = {f_left}, f(right) = {f_right}"
    )]
    DegenerateSecant {
        iter: usize,
        left: f64,
        right: f64,
        f_left: f64,
        f_right: f64,
    },

    /// A system iteration produced a non-finite point.
    #[error("iteration {iter} produced a non-finite point {point:?}")]
    NonFinitePoint { iter: usize, point: [f64; 2] },
}

/// Why a method's applicability check failed.
///
/// A failed check is advisory: the method can still be run.
#[derive(Debug, Error)]
pub enum Inapplicable {
    #[error("no root or multiple roots on [{left}, {right}]")]
    NoRoot { left: f64, right: f64 },

    #[error("derivative changes sign on [{left}, {right}]: f'(left) = {d_left}, f'(right) = {d_right}")]
    DerivativeChangesSign {
        left: f64,
        right: f64,
        d_left: f64,
        d_right: f64,
    },

    #[error("derivative could not be evaluated at x = {x}")]
    DerivativeUnavailable {
        x: f64,
        #[source]
        source: EvaluationError,
    },

    /// [`Newton::new`](crate::Newton::new) already rejects a flat start, so this
    /// only shows up when the derivative changed since construction, as with
    /// a stateful analytic derivative.
    #[error("derivative at x0 = {x0} is too close to zero: {derivative}")]
    FlatStart { x0: f64, derivative: f64 },

    #[error("contraction condition violated at x={x}: |phi'(x)| = {slope}")]
    ContractionViolated { x: f64, slope: f64 },
}
