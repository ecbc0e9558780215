use crate::method::Record;

/// One bisection iteration.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Event {
    /// Iteration index, starting at 1.
    pub iter: usize,

    /// Bracket `[a, b]` the midpoint was taken from.
    pub bracket: [f64; 2],

    /// Function values at the bracket ends.
    pub f_bracket: [f64; 2],

    /// Midpoint of the bracket.
    pub x: f64,

    /// Function value at the midpoint.
    pub f_x: f64,

    /// Bracket width `|b - a|`.
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
