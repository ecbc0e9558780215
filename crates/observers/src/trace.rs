use std::fmt;

use nonlin_core::Observer;

use crate::traits::{HasIterate, HasIteration, HasResidual, HasStepError};

/// One recorded iteration.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Record {
    pub iter: usize,
    pub x: f64,
    pub error: f64,
    pub residual: f64,
}

/// Collects the iteration history of a scalar method.
///
/// Pass `&mut trace` as the observer; the trace is left holding one
/// [`Record`] per iteration. Its [`Display`](fmt::Display) impl renders the
/// history as a table.
///
/// # Example
///
/// ```
/// use nonlin_core::Equation;
/// use nonlin_observers::Trace;
/// use nonlin_solvers::{Bisection, Config, Method};
///
/// let eq = Equation::new("x^2 - 2", |x| x * x - 2.0);
/// let method = Bisection::new(&eq, 0.0, 2.0, Config::new(1e-3, 3).unwrap()).unwrap();
///
/// let mut trace = Trace::new();
/// let solution = method.solve(&mut trace).unwrap();
///
/// assert_eq!(trace.len(), solution.iters);
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Trace {
    records: Vec<Record>,
    decimal_places: Option<usize>,
}

impl Trace {
    /// Creates an empty trace.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the number of decimal places used when rendering the table.
    #[must_use]
    pub fn with_decimal_places(self, decimal_places: usize) -> Self {
        Self {
            decimal_places: Some(decimal_places),
            ..self
        }
    }

    /// Returns the records in iteration order.
    #[must_use]
    pub fn records(&self) -> &[Record] {
        &self.records
    }

    /// Returns the most recent record.
    #[must_use]
    pub fn last(&self) -> Option<&Record> {
        self.records.last()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.records.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Discards all records.
    pub fn clear(&mut self) {
        self.records.clear();
    }

    /// Consumes the trace, returning its records.
    #[must_use]
    pub fn into_records(self) -> Vec<Record> {
        self.records
    }
}

impl<E, A> Observer<E, A> for &mut Trace
where
    E: HasIteration + HasIterate + HasStepError + HasResidual,
{
    fn observe(&mut self, event: &E) -> Option<A> {
        self.records.push(Record {
            iter: event.iteration(),
            x: event.iterate(),
            error: event.step_error(),
            residual: event.residual(),
        });
        None
    }
}

impl fmt::Display for Trace {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let places = self.decimal_places.unwrap_or(6);
        let width = places + 8;
        write!(
            f,
            "{:>5}  {:>width$}  {:>width$}  {:>width$}",
            "iter", "x", "error", "residual"
        )?;
        for record in &self.records {
            write!(
                f,
                "\n{:>5}  {:>width$.places$}  {:>width$.places$e}  {:>width$.places$e}",
                record.iter, record.x, record.error, record.residual
            )?;
        }
        Ok(())
    }
}
