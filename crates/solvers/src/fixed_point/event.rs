use crate::method::Record;

/// One fixed-point iteration.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Event {
    /// Iteration index, starting at 1.
    pub iter: usize,

    /// Point the map was applied to.
    pub x_prev: f64,

    /// New estimate `phi(x_prev)`.
    pub x: f64,

    /// Function value at `x`.
    pub f_x: f64,

    /// Step error `|x - x_prev|`.
    pub error: f64,

    /// Residual `|f(x)|`.
    pub residual: f64,
}

impl Record for Event {
    fn record(&self, method: &'static str) {
        tracing::debug!(
            method,
            iter = self.iter,
            x_prev = self.x_prev,
            x = self.x,
            f_x = self.f_x,
            error = self.error,
            residual = self.residual,
            "iteration"
        );
    }
}
