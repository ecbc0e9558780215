//! Method parameters read from plain text.
//!
//! The text format holds one value per line. Interval methods read
//! `left`, `right`, `epsilon`; point methods read `x0`, `epsilon`. Blank
//! lines are skipped and anything after the expected values is ignored.
//!
//! The number of decimal places used to print results is taken from the way
//! epsilon is written: `0.001` and `1e-3` both give 3.

use std::{fs, io, num::ParseFloatError, path::Path, str::FromStr};

use thiserror::Error;

/// Errors that can occur when reading method parameters.
#[derive(Debug, Error)]
pub enum ParamsError {
    #[error("failed to read parameters from {path}")]
    Io {
        path: String,
        #[source]
        source: io::Error,
    },

    #[error("missing value for {name}")]
    Missing { name: &'static str },

    #[error("invalid value for {name}: {value:?}")]
    InvalidNumber {
        name: &'static str,
        value: String,
        #[source]
        source: ParseFloatError,
    },

    #[error("epsilon {value:?} is not a plain decimal literal")]
    InvalidEpsilon { value: String },
}

/// Parameters for interval-based methods.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct IntervalParams {
    pub left: f64,
    pub right: f64,
    pub epsilon: f64,
    pub decimal_places: usize,
}

/// Parameters for methods started from a single point.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PointParams {
    pub x0: f64,
    pub epsilon: f64,
    pub decimal_places: usize,
}

impl IntervalParams {
    /// Reads interval parameters from a file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or its contents are invalid.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ParamsError> {
        read(path.as_ref())?.parse()
    }
}

impl FromStr for IntervalParams {
    type Err = ParamsError;

    fn from_str(text: &str) -> Result<Self, Self::Err> {
        let mut lines = values(text);
        let left = number(lines.next(), "left")?;
        let right = number(lines.next(), "right")?;
        let (epsilon, decimal_places) = tolerance(lines.next())?;
        Ok(Self {
            left,
            right,
            epsilon,
            decimal_places,
        })
    }
}

impl PointParams {
    /// Reads point parameters from a file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or its contents are invalid.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ParamsError> {
        read(path.as_ref())?.parse()
    }
}

impl FromStr for PointParams {
    type Err = ParamsError;

    fn from_str(text: &str) -> Result<Self, Self::Err> {
        let mut lines = values(text);
        let x0 = number(lines.next(), "x0")?;
        let (epsilon, decimal_places) = tolerance(lines.next())?;
        Ok(Self {
            x0,
            epsilon,
            decimal_places,
        })
    }
}

/// Returns the number of decimal places implied by a written tolerance.
///
/// Counts fractional digits and shifts by the exponent, so `"0.010"` gives 3,
/// `"1e-6"` gives 6 and `"2.5E-3"` gives 4. Integers and positive exponents
/// give 0. Returns `None` if `literal` is not a plain decimal number or its
/// exponent is out of range.
#[must_use]
pub fn decimal_places(literal: &str) -> Option<usize> {
    let literal = literal.trim();
    let unsigned = literal.strip_prefix(['+', '-']).unwrap_or(literal);

    let (mantissa, exponent) = match unsigned.find(['e', 'E']) {
        Some(at) => (&unsigned[..at], unsigned[at + 1..].parse::<i64>().ok()?),
        None => (unsigned, 0),
    };

    let (whole, fraction) = mantissa.split_once('.').unwrap_or((mantissa, ""));
    let all_digits = |s: &str| s.bytes().all(|b| b.is_ascii_digit());
    if (whole.is_empty() && fraction.is_empty()) || !all_digits(whole) || !all_digits(fraction) {
        return None;
    }

    let fraction_digits = i64::try_from(fraction.len()).ok()?;
    usize::try_from(fraction_digits.checked_sub(exponent)?.max(0)).ok()
}

fn read(path: &Path) -> Result<String, ParamsError> {
    fs::read_to_string(path).map_err(|source| ParamsError::Io {
        path: path.display().to_string(),
        source,
    })
}

fn values(text: &str) -> impl Iterator<Item = &str> {
    text.lines().map(str::trim).filter(|line| !line.is_empty())
}

fn number(value: Option<&str>, name: &'static str) -> Result<f64, ParamsError> {
    let value = value.ok_or(ParamsError::Missing { name })?;
    value
        .parse()
        .map_err(|source| ParamsError::InvalidNumber {
            name,
            value: value.to_owned(),
            source,
        })
}

fn tolerance(value: Option<&str>) -> Result<(f64, usize), ParamsError> {
    let epsilon = number(value, "epsilon")?;
    let literal = value.unwrap_or_default();
    let places = decimal_places(literal).ok_or_else(|| ParamsError::InvalidEpsilon {
        value: literal.to_owned(),
    })?;
    Ok((epsilon, places))
}
