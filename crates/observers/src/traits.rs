//! Capability traits for cross-method observers.
//!
//! These traits abstract over method-specific event and action types, so one
//! observer can watch any method.
//!
//! # Event traits
//!
//! - [`HasIteration`] — events that carry an iteration index
//! - [`HasIterate`] — events that carry a scalar estimate
//! - [`HasStepError`] — events that carry a step error
//! - [`HasResidual`] — events that carry a residual
//!
//! # Action traits
//!
//! - [`CanStopEarly`] — actions that can signal early termination
//!
//! # Example
//!
//! ```rust
//! use nonlin_core::Observer;
//! use nonlin_observers::traits::{CanStopEarly, HasResidual};
//!
//! struct GoodEnough {
//!     tolerance: f64,
//! }
//!
//! impl<E: HasResidual, A: CanStopEarly> Observer<E, A> for GoodEnough {
//!     fn observe(&mut self, event: &E) -> Option<A> {
//!         (event.residual() < self.tolerance).then(A::stop_early)
//!     }
//! }
//! ```

use nonlin_solvers::{Action, bisection, chord, fixed_point, newton, system};

/// An event that carries the index of its iteration.
pub trait HasIteration {
    /// Returns the iteration index, starting at 1.
    fn iteration(&self) -> usize;
}

/// An event that carries a scalar root estimate.
pub trait HasIterate {
    /// Returns the estimate produced by this iteration.
    fn iterate(&self) -> f64;
}

/// An event that carries a step error.
pub trait HasStepError {
    /// Returns the method's measure of how far the estimate moved.
    fn step_error(&self) -> f64;
}

/// An event that carries a residual.
pub trait HasResidual {
    /// Returns the residual magnitude at the new estimate.
    fn residual(&self) -> f64;
}

/// An action type that can signal early termination.
pub trait CanStopEarly {
    /// Returns the action that stops the method early.
    fn stop_early() -> Self;
}

impl CanStopEarly for Action {
    fn stop_early() -> Self {
        Action::StopEarly
    }
}

macro_rules! scalar_event {
    ($($event:ty),+ $(,)?) => {$(
        impl HasIteration for $event {
            fn iteration(&self) -> usize {
                self.iter
            }
        }

        impl HasIterate for $event {
            fn iterate(&self) -> f64 {
                self.x
            }
        }

        impl HasStepError for $event {
            fn step_error(&self) -> f64 {
                self.error
            }
        }

        impl HasResidual for $event {
            fn residual(&self) -> f64 {
                self.residual
            }
        }
    )+};
}

scalar_event!(bisection::Event, chord::Event, newton::Event, fixed_point::Event);

// --- system::Event carries a point, not a scalar iterate ---

impl HasIteration for system::Event {
    fn iteration(&self) -> usize {
        self.iter
    }
}

impl HasStepError for system::Event {
    fn step_error(&self) -> f64 {
        self.error
    }
}

impl HasResidual for system::Event {
    fn residual(&self) -> f64 {
        self.residual
    }
}
