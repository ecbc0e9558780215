use nonlin_core::{IntervalParams, PointParams};
use thiserror::Error;

/// Configuration shared by every method.
///
/// `epsilon` is the target accuracy for both the step error and the residual.
/// `decimal_places` only affects how a [`Solution`](crate::Solution) is
/// printed. When `max_iters` is unset each method falls back to its own
/// default cap.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Config {
    epsilon: f64,
    decimal_places: usize,
    max_iters: Option<usize>,
    log: bool,
}

/// Errors that can occur when validating method parameters.
#[derive(Debug, Error, Clone, Copy, PartialEq)]
pub enum ConfigError {
    #[error("epsilon must be finite and positive, got {value}")]
    Epsilon { value: f64 },

    #[error("decimal_places must be non-negative, got {value}")]
    DecimalPlaces { value: i64 },

    #[error("max_iters must be at least 1")]
    ZeroMaxIters,

    #[error("interval bound must be finite, got {value}")]
    NonFiniteBound { value: f64 },

    #[error("interval [{left}, {right}] is empty: left must be strictly less than right")]
    EmptyInterval { left: f64, right: f64 },

    #[error("starting point must be finite, got {value}")]
    NonFiniteStart { value: f64 },

    #[error("{method} expects {expected}")]
    StartMismatch {
        method: &'static str,
        expected: &'static str,
    },
}

impl Default for Config {
    fn default() -> Self {
        Self {
            epsilon: 1e-6,
            decimal_places: 6,
            max_iters: None,
            log: false,
        }
    }
}

impl Config {
    /// Creates a new config.
    ///
    /// # Errors
    ///
    /// Returns an error if `epsilon` is not finite and positive, or if
    /// `decimal_places` is negative.
    pub fn new(epsilon: f64, decimal_places: i64) -> Result<Self, ConfigError> {
        if !epsilon.is_finite() || epsilon <= 0.0 {
            return Err(ConfigError::Epsilon { value: epsilon });
        }
        let places = usize::try_from(decimal_places).map_err(|_| ConfigError::DecimalPlaces {
            value: decimal_places,
        })?;

        Ok(Self {
            epsilon,
            decimal_places: places,
            max_iters: None,
            log: false,
        })
    }

    /// Overrides the method's default iteration cap.
    ///
    /// # Errors
    ///
    /// Returns an error if `max_iters` is zero.
    pub fn with_max_iters(self, max_iters: usize) -> Result<Self, ConfigError> {
        if max_iters == 0 {
            return Err(ConfigError::ZeroMaxIters);
        }
        Ok(Self {
            max_iters: Some(max_iters),
            ..self
        })
    }

    /// Enables or disables a `debug` tracing record per iteration.
    #[must_use]
    pub fn with_log(self, log: bool) -> Self {
        Self { log, ..self }
    }

    /// Returns the target accuracy.
    #[must_use]
    pub fn epsilon(&self) -> f64 {
        self.epsilon
    }

    /// Returns the number of decimal places used when printing results.
    #[must_use]
    pub fn decimal_places(&self) -> usize {
        self.decimal_places
    }

    /// Returns the explicit iteration cap, if one was set.
    #[must_use]
    pub fn max_iters(&self) -> Option<usize> {
        self.max_iters
    }

    /// Returns true if per-iteration logging is enabled.
    #[must_use]
    pub fn log(&self) -> bool {
        self.log
    }

    pub(crate) fn max_iters_or(&self, default: usize) -> usize {
        self.max_iters.unwrap_or(default)
    }
}

impl TryFrom<&IntervalParams> for Config {
    type Error = ConfigError;

    fn try_from(params: &IntervalParams) -> Result<Self, Self::Error> {
        from_parts(params.epsilon, params.decimal_places)
    }
}

impl TryFrom<&PointParams> for Config {
    type Error = ConfigError;

    fn try_from(params: &PointParams) -> Result<Self, Self::Error> {
        from_parts(params.epsilon, params.decimal_places)
    }
}

fn from_parts(epsilon: f64, decimal_places: usize) -> Result<Config, ConfigError> {
    let places = i64::try_from(decimal_places).unwrap_or(i64::MAX);
    Config::new(epsilon, places)
}

/// A closed interval `[left, right]` with finite bounds and `left < right`.
///
/// Unlike a bracket, an interval is never reordered: bounds given the wrong
/// way round are rejected.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Interval {
    left: f64,
    right: f64,
}

impl Interval {
    /// Creates a validated interval.
    ///
    /// # Errors
    ///
    /// Returns an error if either bound is non-finite or `left >= right`.
    pub fn new(left: f64, right: f64) -> Result<Self, ConfigError> {
        for value in [left, right] {
            if !value.is_finite() {
                return Err(ConfigError::NonFiniteBound { value });
            }
        }
        if left >= right {
            return Err(ConfigError::EmptyInterval { left, right });
        }
        Ok(Self { left, right })
    }

    #[must_use]
    pub fn left(&self) -> f64 {
        self.left
    }

    #[must_use]
    pub fn right(&self) -> f64 {
        self.right
    }

    #[must_use]
    pub fn width(&self) -> f64 {
        self.right - self.left
    }

    #[must_use]
    pub fn midpoint(&self) -> f64 {
        0.5 * (self.left + self.right)
    }

    /// Returns true if `x` lies in the closed interval.
    #[must_use]
    pub fn contains(&self, x: f64) -> bool {
        (self.left..=self.right).contains(&x)
    }

    /// Returns `count` evenly spaced points from `left` to `right` inclusive.
    pub(crate) fn samples(&self, count: usize) -> impl Iterator<Item = f64> + '_ {
        let last = count.saturating_sub(1).max(1) as f64;
        (0..count).map(move |i| {
            if i + 1 == count {
                self.right
            } else {
                self.left + self.width() * (i as f64) / last
            }
        })
    }
}

impl TryFrom<&IntervalParams> for Interval {
    type Error = ConfigError;

    fn try_from(params: &IntervalParams) -> Result<Self, Self::Error> {
        Self::new(params.left, params.right)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;

    #[test]
    fn rejects_bad_epsilon() {
        for epsilon in [0.0, -1e-3, f64::NAN, f64::INFINITY] {
            assert!(matches!(
                Config::new(epsilon, 3),
                Err(ConfigError::Epsilon { .. })
            ));
        }
    }

    #[test]
    fn rejects_negative_decimal_places() {
        assert_eq!(
            Config::new(1e-3, -1),
            Err(ConfigError::DecimalPlaces { value: -1 })
        );
    }

    #[test]
    fn zero_iteration_cap_is_rejected() {
        let config = Config::new(1e-3, 3).unwrap();
        assert_eq!(config.with_max_iters(0), Err(ConfigError::ZeroMaxIters));
        assert_eq!(config.with_max_iters(5).unwrap().max_iters(), Some(5));
        assert_eq!(config.max_iters_or(42), 42);
    }

    #[test]
    fn interval_rejects_empty_and_inverted_bounds() {
        assert!(matches!(
            Interval::new(1.0, 1.0),
            Err(ConfigError::EmptyInterval { .. })
        ));
        assert!(matches!(
            Interval::new(2.0, 1.0),
            Err(ConfigError::EmptyInterval { .. })
        ));
        assert!(matches!(
            Interval::new(f64::NEG_INFINITY, 1.0),
            Err(ConfigError::NonFiniteBound { .. })
        ));
    }

    #[test]
    fn samples_cover_both_ends() {
        let interval = Interval::new(1.0, 2.0).unwrap();
        let samples: Vec<_> = interval.samples(5).collect();
        assert_eq!(samples.len(), 5);
        assert_relative_eq!(samples[0], 1.0);
        assert_relative_eq!(samples[2], 1.5);
        assert_relative_eq!(samples[4], 2.0);
    }

    #[test]
    fn builds_from_params() {
        let params = IntervalParams {
            left: 0.0,
            right: 2.0,
            epsilon: 1e-4,
            decimal_places: 4,
        };
        let config = Config::try_from(&params).unwrap();
        let interval = Interval::try_from(&params).unwrap();
        assert_eq!(config.decimal_places(), 4);
        assert_relative_eq!(interval.width(), 2.0);
    }
}
