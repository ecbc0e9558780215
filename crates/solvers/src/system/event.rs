use crate::method::Record;

/// One system iteration.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Event {
    /// Iteration index, starting at 1.
    pub iter: usize,

    /// Point the map was applied to.
    pub point_prev: [f64; 2],

    /// New estimate `(phi1, phi2)` at `point_prev`.
    pub point: [f64; 2],

    /// Equation values at `point`.
    pub values: [f64; 2],

    /// Euclidean length of the step.
    pub error: f64,

    /// Largest absolute equation value.
    pub residual: f64,
}

impl Record for Event {
    fn record(&self, method: &'static str) {
        let [x, y] = self.point;
        tracing::debug!(
            method,
            iter = self.iter,
            x,
            y,
            error = self.error,
            residual = self.residual,
            "iteration"
        );
    }
}
