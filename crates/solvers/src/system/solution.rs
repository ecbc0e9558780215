use std::fmt;

use crate::Status;

/// The result of solving a system of two equations.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Solution {
    /// Final solver status.
    pub status: Status,

    /// Estimate `(x, y)` at the final iteration.
    pub point: [f64; 2],

    /// Signed equation values at `point`.
    pub values: [f64; 2],

    /// Iterations performed, at least one.
    pub iters: usize,

    /// Decimal places used by the [`Display`](fmt::Display) impl.
    pub decimal_places: usize,
}

impl Solution {
    /// Returns true if the solver converged.
    #[must_use]
    pub fn is_converged(&self) -> bool {
        self.status == Status::Converged
    }
}

impl fmt::Display for Solution {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let places = self.decimal_places;
        let [x, y] = self.point;
        let [f1, f2] = self.values;
        writeln!(f, "x = {x:.places$}, y = {y:.places$}")?;
        writeln!(f, "f1 = {f1:.places$}, f2 = {f2:.places$}")?;
        write!(f, "iterations: {}", self.iters)?;
        if self.status != Status::Converged {
            write!(f, " ({:?})", self.status)?;
        }
        Ok(())
    }
}
