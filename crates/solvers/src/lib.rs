//! Iterative root finding for scalar nonlinear equations.
//!
//! Four methods share one contract, [`Method`]:
//!
//! - [`bisection`] halves a sign-changing bracket
//! - [`chord`] follows the secant through the bracket ends
//! - [`newton`] follows the tangent from a starting point
//! - [`fixed_point`] iterates `x ← x - λ f(x)` on an interval
//!
//! Each method is built from a borrowed [`Equation`](nonlin_core::Equation)
//! and validated parameters, offers an advisory [`Method::check`], and
//! returns a [`Solution`] from [`Method::solve`]. Every method stops when
//! both the step error and the residual are within epsilon, and reports
//! [`Status::MaxIters`] rather than failing when its iteration cap runs out.
//!
//! [`AnyMethod`] selects a method at runtime, and [`system`] solves a pair of
//! equations by the same fixed-point pattern.

pub mod bisection;
pub mod chord;
pub mod fixed_point;
pub mod newton;
pub mod system;

mod action;
mod any;
mod bracket;
mod config;
mod error;
mod method;
mod solution;

pub use action::Action;
pub use any::{AnyMethod, MethodKind, Start, UnknownMethod};
pub use bisection::Bisection;
pub use chord::Chord;
pub use config::{Config, ConfigError, Interval};
pub use error::{Error, Inapplicable};
pub use fixed_point::FixedPoint;
pub use method::Method;
pub use newton::Newton;
pub use solution::{Solution, Status};
