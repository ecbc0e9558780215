use std::error::Error as StdError;

use thiserror::Error;

/// Errors that can occur when evaluating an [`Equation`](crate::Equation).
#[derive(Debug, Error)]
pub enum EvaluationError {
    /// The wrapped function reported a failure.
    #[error("evaluation of {label} failed at x = {x}")]
    Failed {
        label: String,
        x: f64,
        #[source]
        source: Box<dyn StdError + Send + Sync>,
    },

    /// The function returned NaN or an infinity.
    #[error("{label} is not finite at x = {x}: got {value}")]
    NonFinite { label: String, x: f64, value: f64 },

    /// The requested evaluation point is NaN or an infinity.
    #[error("cannot evaluate {label} at non-finite x = {x}")]
    NonFiniteInput { label: String, x: f64 },
}

impl EvaluationError {
    /// Returns the x value at which evaluation was attempted.
    #[must_use]
    pub fn x(&self) -> f64 {
        match self {
            Self::Failed { x, .. } | Self::NonFinite { x, .. } | Self::NonFiniteInput { x, .. } => {
                *x
            }
        }
    }
}
