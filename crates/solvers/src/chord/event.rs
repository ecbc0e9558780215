use crate::method::Record;

/// One chord iteration.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Event {
    /// Iteration index, starting at 1.
    pub iter: usize,

    /// Bracket `[a, b]` the secant was drawn through.
    pub bracket: [f64; 2],

    /// Function values at the bracket ends.
    pub f_bracket: [f64; 2],

    /// Previous estimate.
    pub x_prev: f64,

    /// Secant zero crossing.
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
        let [left, right] = self.bracket;
        tracing::debug!(
            method,
            iter = self.iter,
            left,
            right,
            x = self.x,
            f_x = self.f_x,
            error = self.error,
            residual = self.residual,
            "iteration"
        );
    }
}
