use std::sync::{
    Arc,
    atomic::{AtomicBool, Ordering},
};

use nonlin_core::Observer;

use crate::traits::CanStopEarly;

/// Stops a running method once [`cancel`](Cancellation::cancel) is called.
///
/// Clones share one flag, so a clone can be handed to another thread while
/// the first is passed to `solve`. The method stops at the next iteration
/// boundary with `Status::StoppedByObserver`.
#[derive(Debug, Clone, Default)]
pub struct Cancellation {
    flag: Arc<AtomicBool>,
}

impl Cancellation {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Requests that observed methods stop.
    pub fn cancel(&self) {
        self.flag.store(true, Ordering::Relaxed);
    }

    #[must_use]
    pub fn is_cancelled(&self) -> bool {
        self.flag.load(Ordering::Relaxed)
    }
}

impl<E, A: CanStopEarly> Observer<E, A> for Cancellation {
    fn observe(&mut self, _event: &E) -> Option<A> {
        self.is_cancelled().then(A::stop_early)
    }
}
