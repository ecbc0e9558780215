//! Core traits and types for scalar nonlinear solvers.
//!
//! This crate defines the shared abstractions that methods and observers
//! build on:
//!
//! - [`Equation`] — a labelled scalar function `f(x)` whose roots are sought,
//!   with finite-difference (or analytic) derivatives and a root-existence test
//! - [`EvaluationError`] — why evaluating an equation failed
//! - [`Observer`] — receives solver events and optionally returns control actions
//! - [`Sign`] — sign tests that do not underflow on tiny values
//! - [`IntervalParams`], [`PointParams`] — method parameters loaded from text

mod equation;
mod error;
mod observer;
mod params;
mod sign;

pub use equation::{DEFAULT_STEP, Equation, forward_difference};
pub use error::EvaluationError;
pub use observer::Observer;
pub use params::{IntervalParams, ParamsError, PointParams, decimal_places};
pub use sign::{Sign, opposite_signs, same_sign};
