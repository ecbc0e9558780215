//! Reusable observers for nonlin root-finding methods.
//!
//! This crate provides [`Observer`] implementations and capability traits that
//! work across every method in `nonlin-solvers`.
//!
//! # Modules
//!
//! - [`traits`] — Capability traits for cross-method observers
//!   ([`HasIteration`], [`HasIterate`], [`HasStepError`], [`HasResidual`],
//!   [`CanStopEarly`])
//!
//! # Observers
//!
//! - [`TracingObserver`] — emits one `tracing` event per iteration
//! - [`Trace`] — records the iteration history for later inspection
//! - [`Cancellation`] — stops a running method when signalled from elsewhere
//!
//! [`Observer`]: nonlin_core::Observer
//! [`HasIteration`]: traits::HasIteration
//! [`HasIterate`]: traits::HasIterate
//! [`HasStepError`]: traits::HasStepError
//! [`HasResidual`]: traits::HasResidual
//! [`CanStopEarly`]: traits::CanStopEarly

pub mod traits;

mod cancel;
mod log;
mod trace;

pub use cancel::Cancellation;
pub use log::TracingObserver;
pub use trace::{Record, Trace};
