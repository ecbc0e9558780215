/// Watches a method iterate and optionally steers it.
///
/// Every method reports one event per iteration (iteration index, current
/// bracket or point, step error, residual). An observer sees each event in
/// order, synchronously with the iteration that produced it, and returns
/// `Some(action)` to request a method-specific action or `None` to let the
/// method carry on.
///
/// Closures of the form `FnMut(&E) -> Option<A>` are observers, and `()` is
/// the observer that watches nothing.
pub trait Observer<E, A> {
    /// Receives one event and optionally returns a control action.
    fn observe(&mut self, event: &E) -> Option<A>;
}

impl<E, A, F> Observer<E, A> for F
where
    F: FnMut(&E) -> Option<A>,
{
    fn observe(&mut self, event: &E) -> Option<A> {
        self(event)
    }
}

impl<E, A> Observer<E, A> for () {
    fn observe(&mut self, _event: &E) -> Option<A> {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn drive<O: Observer<f64, ()>>(mut observer: O, events: &[f64]) -> usize {
        events
            .iter()
            .filter(|event| observer.observe(event).is_some())
            .count()
    }

    #[test]
    fn closure_can_request_actions() {
        let actions = drive(|event: &f64| (*event > 1.0).then_some(()), &[0.5, 1.5, 2.0]);
        assert_eq!(actions, 2);
    }

    #[test]
    fn unit_observer_never_acts() {
        assert_eq!(drive((), &[1.0, 2.0, 3.0]), 0);
    }
}
