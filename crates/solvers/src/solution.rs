use std::fmt;

/// Indicates whether a method converged or hit the iteration limit.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Status {
    /// Both the step error and the residual are within epsilon.
    Converged,

    /// Reached the iteration limit without converging.
    MaxIters,

    /// Stopped early due to an observer decision.
    StoppedByObserver,
}

/// The result of running a scalar method.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Solution {
    /// Final method status.
    pub status: Status,

    /// Root estimate at the final iteration.
    pub root: f64,

    /// Signed function value `f(root)`.
    pub residual: f64,

    /// Iterations performed, at least one.
    pub iters: usize,

    /// Decimal places used by the [`Display`](fmt::Display) impl.
    pub decimal_places: usize,
}

impl Solution {
    /// Returns true if the method converged.
    #[must_use]
    pub fn is_converged(&self) -> bool {
        self.status == Status::Converged
    }
}

impl fmt::Display for Solution {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let places = self.decimal_places;
        writeln!(f, "x = {:.*}", places, self.root)?;
        writeln!(f, "f(x) = {:.*}", places, self.residual)?;
        write!(f, "iterations: {}", self.iters)?;
        if self.status != Status::Converged {
            write!(f, " ({:?})", self.status)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn displays_with_requested_precision() {
        let solution = Solution {
            status: Status::Converged,
            root: std::f64::consts::SQRT_2,
            residual: 4.5e-7,
            iters: 21,
            decimal_places: 4,
        };
        assert_eq!(solution.to_string(), "x = 1.4142\nf(x) = 0.0000\niterations: 21");
    }

    #[test]
    fn display_flags_unconverged_runs() {
        let solution = Solution {
            status: Status::MaxIters,
            root: 1.25,
            residual: -0.4375,
            iters: 3,
            decimal_places: 2,
        };
        assert!(!solution.is_converged());
        assert_eq!(solution.to_string(), "x = 1.25\nf(x) = -0.44\niterations: 3 (MaxIters)");
    }
}
