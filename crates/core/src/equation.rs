use std::{error::Error as StdError, fmt, sync::Arc};

use crate::{EvaluationError, opposite_signs, same_sign};

/// Default finite-difference step used for derivative approximations.
pub const DEFAULT_STEP: f64 = 1e-5;

type BoxError = Box<dyn StdError + Send + Sync>;
type ScalarFn = dyn Fn(f64) -> Result<f64, BoxError> + Send + Sync;

/// A scalar equation `f(x) = 0` with a human-readable label.
///
/// An `Equation` is built once and then only read. Cloning is cheap (the
/// wrapped functions are reference counted), and methods borrow it, so one
/// equation can back any number of method instances.
///
/// # Example
///
/// ```
/// use nonlin_core::{DEFAULT_STEP, Equation};
///
/// let eq = Equation::new("x^2 - 2", |x| x * x - 2.0);
///
/// assert_eq!(eq.evaluate(2.0).unwrap(), 2.0);
/// assert!(eq.root_exists(0.0, 2.0, DEFAULT_STEP));
/// ```
#[derive(Clone)]
pub struct Equation {
    label: String,
    function: Arc<ScalarFn>,
    derivative: Option<Arc<ScalarFn>>,
}

impl Equation {
    /// Wraps an infallible scalar function.
    ///
    /// Non-finite return values still surface as
    /// [`EvaluationError::NonFinite`] when evaluated.
    pub fn new<F>(label: impl Into<String>, function: F) -> Self
    where
        F: Fn(f64) -> f64 + Send + Sync + 'static,
    {
        Self {
            label: label.into(),
            function: Arc::new(move |x: f64| -> Result<f64, BoxError> { Ok(function(x)) }),
            derivative: None,
        }
    }

    /// Wraps a scalar function that may fail.
    ///
    /// The function's error is kept as the source of
    /// [`EvaluationError::Failed`].
    pub fn fallible<F, E>(label: impl Into<String>, function: F) -> Self
    where
        F: Fn(f64) -> Result<f64, E> + Send + Sync + 'static,
        E: StdError + Send + Sync + 'static,
    {
        Self {
            label: label.into(),
            function: Arc::new(move |x: f64| -> Result<f64, BoxError> {
                function(x).map_err(BoxError::from)
            }),
            derivative: None,
        }
    }

    /// Supplies an analytic derivative, used instead of finite differences.
    #[must_use]
    pub fn with_derivative<D>(mut self, derivative: D) -> Self
    where
        D: Fn(f64) -> f64 + Send + Sync + 'static,
    {
        self.derivative = Some(Arc::new(move |x: f64| -> Result<f64, BoxError> {
            Ok(derivative(x))
        }));
        self
    }

    /// Returns the display label.
    #[must_use]
    pub fn label(&self) -> &str {
        &self.label
    }

    /// Returns true if an analytic derivative was supplied.
    #[must_use]
    pub fn has_derivative(&self) -> bool {
        self.derivative.is_some()
    }

    /// Evaluates `f(x)`.
    ///
    /// # Errors
    ///
    /// Returns an error if `x` is not finite, the function fails, or the
    /// function returns a non-finite value.
    pub fn evaluate(&self, x: f64) -> Result<f64, EvaluationError> {
        Self::call(&*self.function, &self.label, x)
    }

    /// Evaluates `f'(x)`.
    ///
    /// Uses the analytic derivative when one was supplied, otherwise the
    /// forward difference `(f(x + step) - f(x)) / step`.
    ///
    /// # Errors
    ///
    /// Returns an error if any underlying evaluation fails or the resulting
    /// slope is not finite (for example when `step` is zero).
    pub fn derivative(&self, x: f64, step: f64) -> Result<f64, EvaluationError> {
        if let Some(derivative) = &self.derivative {
            return Self::call(&**derivative, &self.label, x);
        }

        let slope = forward_difference(|x| self.evaluate(x), x, step)?;
        if slope.is_finite() {
            Ok(slope)
        } else {
            Err(EvaluationError::NonFinite {
                label: format!("d/dx {}", self.label),
                x,
                value: slope,
            })
        }
    }

    /// Returns true if `[left, right]` holds exactly one root.
    ///
    /// Requires `f(left)` and `f(right)` to have strictly opposite signs, and
    /// `f'(left)` and `f'(right)` to share a nonzero sign.
    /// Any evaluation failure counts as "no root".
    #[must_use]
    pub fn root_exists(&self, left: f64, right: f64, step: f64) -> bool {
        let test = || -> Result<bool, EvaluationError> {
            let sign_change = opposite_signs(self.evaluate(left)?, self.evaluate(right)?);
            let monotonic = same_sign(self.derivative(left, step)?, self.derivative(right, step)?);
            Ok(sign_change && monotonic)
        };
        test().unwrap_or(false)
    }

    fn call(function: &ScalarFn, label: &str, x: f64) -> Result<f64, EvaluationError> {
        if !x.is_finite() {
            return Err(EvaluationError::NonFiniteInput {
                label: label.to_owned(),
                x,
            });
        }

        let value = function(x).map_err(|source| EvaluationError::Failed {
            label: label.to_owned(),
            x,
            source,
        })?;

        if !value.is_finite() {
            return Err(EvaluationError::NonFinite {
                label: label.to_owned(),
                x,
                value,
            });
        }

        Ok(value)
    }
}

impl fmt::Debug for Equation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Equation")
            .field("label", &self.label)
            .field("analytic_derivative", &self.derivative.is_some())
            .finish_non_exhaustive()
    }
}

impl fmt::Display for Equation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.label)
    }
}

/// Forward-difference slope of a fallible function at `x`.
///
/// The quotient is returned as computed and may be non-finite.
///
/// # Errors
///
/// Propagates the first error returned by `function`.
pub fn forward_difference<F, E>(function: F, x: f64, step: f64) -> Result<f64, E>
where
    F: Fn(f64) -> Result<f64, E>,
{
    let here = function(x)?;
    let ahead = function(x + step)?;
    Ok((ahead - here) / step)
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;
    use thiserror::Error;

    #[derive(Debug, Error)]
    #[error("negative argument")]
    struct NegativeArgument;

    fn square_minus_two() -> Equation {
        Equation::new("x^2 - 2", |x| x * x - 2.0)
    }

    #[test]
    fn evaluates_wrapped_function() {
        let eq = square_minus_two();
        assert_relative_eq!(eq.evaluate(3.0).unwrap(), 7.0);
        assert_eq!(eq.label(), "x^2 - 2");
        assert_eq!(eq.to_string(), "x^2 - 2");
    }

    #[test]
    fn non_finite_value_is_an_error() {
        let eq = Equation::new("1/x", |x| 1.0 / x);
        let err = eq.evaluate(0.0).unwrap_err();
        assert!(matches!(err, EvaluationError::NonFinite { .. }));
        assert_relative_eq!(err.x(), 0.0);
    }

    #[test]
    fn non_finite_input_is_an_error() {
        let eq = square_minus_two();
        assert!(matches!(
            eq.evaluate(f64::NAN),
            Err(EvaluationError::NonFiniteInput { .. })
        ));
    }

    #[test]
    fn fallible_function_error_is_kept_as_source() {
        let eq = Equation::fallible("sqrt", |x: f64| {
            if x < 0.0 {
                Err(NegativeArgument)
            } else {
                Ok(x.sqrt())
            }
        });

        assert_relative_eq!(eq.evaluate(4.0).unwrap(), 2.0);

        let err = eq.evaluate(-1.0).unwrap_err();
        assert!(matches!(err, EvaluationError::Failed { .. }));
        let source = StdError::source(&err).expect("source is kept");
        assert_eq!(source.to_string(), "negative argument");
    }

    #[test]
    fn derivative_uses_forward_difference() {
        let eq = square_minus_two();
        let slope = eq.derivative(3.0, DEFAULT_STEP).unwrap();
        assert_relative_eq!(slope, 6.0, epsilon = 1e-4);
    }

    #[test]
    fn derivative_prefers_analytic_form() {
        let eq = square_minus_two().with_derivative(|x| 2.0 * x);
        assert!(eq.has_derivative());
        // A huge step would ruin the difference quotient but is ignored here.
        assert_relative_eq!(eq.derivative(3.0, 10.0).unwrap(), 6.0);
    }

    #[test]
    fn zero_step_derivative_is_an_error() {
        let eq = square_minus_two();
        assert!(matches!(
            eq.derivative(1.0, 0.0),
            Err(EvaluationError::NonFinite { .. })
        ));
    }

    #[test]
    fn root_exists_with_sign_change_and_monotonic_ends() {
        let eq = square_minus_two();
        assert!(eq.root_exists(0.0, 2.0, DEFAULT_STEP));
        assert!(eq.root_exists(1.0, 2.0, DEFAULT_STEP));
    }

    #[test]
    fn root_exists_rejects_missing_sign_change() {
        let eq = square_minus_two();
        assert!(!eq.root_exists(-2.0, 2.0, DEFAULT_STEP));
        assert!(!eq.root_exists(2.0, 3.0, DEFAULT_STEP));
    }

    #[test]
    fn root_exists_rejects_derivative_sign_change() {
        // (x - 3)(x + 1): f changes sign on [0, 5] but f' goes from -2 to 8.
        let eq = Equation::new("x^2 - 2x - 3", |x| x * x - 2.0 * x - 3.0);
        assert!(!eq.root_exists(0.0, 5.0, DEFAULT_STEP));
    }

    #[test]
    fn root_exists_on_a_badly_scaled_function() {
        let eq = Equation::new("1e-200 (x - 1.3)", |x| 1e-200 * (x - 1.3));
        assert!(eq.root_exists(0.0, 2.0, DEFAULT_STEP));
        assert!(!eq.root_exists(1.5, 2.0, DEFAULT_STEP));
    }

    #[test]
    fn root_exists_fails_closed_on_evaluation_error() {
        let eq = Equation::new("ln(x)", f64::ln);
        assert!(!eq.root_exists(-1.0, 2.0, DEFAULT_STEP));
    }

    #[test]
    fn forward_difference_propagates_errors() {
        let result = forward_difference(|_| Err::<f64, _>(NegativeArgument), 1.0, 0.1);
        assert!(result.is_err());
    }
}
