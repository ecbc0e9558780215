use nonlin_core::Observer;
use tracing::info;

use crate::traits::{HasIteration, HasResidual, HasStepError};

/// Emits one `info` event per iteration through `tracing`.
///
/// Each record carries the observer's label, the iteration index, the step
/// error and the residual. The observer never acts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TracingObserver {
    label: &'static str,
}

impl TracingObserver {
    /// Creates an observer whose records are tagged with `label`.
    #[must_use]
    pub fn new(label: &'static str) -> Self {
        Self { label }
    }

    /// Returns the label attached to every record.
    #[must_use]
    pub fn label(&self) -> &'static str {
        self.label
    }
}

impl Default for TracingObserver {
    fn default() -> Self {
        Self::new("solve")
    }
}

impl<E, A> Observer<E, A> for TracingObserver
where
    E: HasIteration + HasStepError + HasResidual,
{
    fn observe(&mut self, event: &E) -> Option<A> {
        info!(
            label = self.label,
            iter = event.iteration(),
            error = event.step_error(),
            residual = event.residual(),
            "iteration"
        );
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use nonlin_core::Equation;
    use nonlin_solvers::{Config, Method, Newton, Status, system};
    use tracing::Level;

    #[test]
    fn logs_without_changing_the_result() {
        let _ = tracing_subscriber::fmt()
            .with_max_level(Level::DEBUG)
            .with_test_writer()
            .try_init();

        let eq = Equation::new("x^2 - 2", |x| x * x - 2.0);
        let config = Config::new(1e-10, 10).unwrap().with_log(true);
        let method = Newton::new(&eq, 1.0, config).unwrap();

        let logged = method.solve(TracingObserver::new("newton")).unwrap();
        let silent = method.solve_unobserved().unwrap();

        assert_eq!(logged, silent);
        assert_eq!(logged.status, Status::Converged);
    }

    #[test]
    fn watches_systems_too() {
        let circle = system::System::new(
            "circle",
            |[x, y]| [x * x + y * y - 1.0, x - y],
            |[_, y]| [y, (0.5_f64).sqrt()],
        );
        let config = Config::new(1e-9, 9).unwrap();

        let solution = system::solve(&circle, [0.5, 0.5], &config, TracingObserver::default()).unwrap();

        assert_eq!(solution.status, Status::Converged);
    }
}
