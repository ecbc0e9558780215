use std::{fmt, str::FromStr};

use nonlin_core::{Equation, Observer};
use thiserror::Error;

use crate::{
    Action, Bisection, Chord, Config, ConfigError, Error, FixedPoint, Inapplicable, Interval,
    Method, Newton, Solution, bisection, chord, fixed_point, newton,
};

/// Names one of the scalar methods.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MethodKind {
    Bisection,
    Chord,
    Newton,
    FixedPoint,
}

/// Where a method starts from.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Start {
    /// A closed interval, for bisection, chord and fixed-point iteration.
    Interval(Interval),

    /// A single point, for Newton's method.
    Point(f64),
}

/// A method name that could not be parsed.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("unknown method {0:?}")]
pub struct UnknownMethod(pub String);

impl MethodKind {
    /// Every method, in presentation order.
    pub const ALL: [Self; 4] = [Self::Bisection, Self::Chord, Self::Newton, Self::FixedPoint];

    /// Returns the method's display name.
    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            Self::Bisection => Bisection::NAME,
            Self::Chord => Chord::NAME,
            Self::Newton => Newton::NAME,
            Self::FixedPoint => FixedPoint::NAME,
        }
    }

    /// Returns true if the method starts from an interval.
    #[must_use]
    pub fn uses_interval(self) -> bool {
        self != Self::Newton
    }

    /// Builds the method.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::StartMismatch`] if `start` does not suit the
    /// method, or any construction error of the method itself.
    pub fn build(
        self,
        equation: &Equation,
        start: Start,
        config: Config,
    ) -> Result<AnyMethod<'_>, Error> {
        let mismatch = |expected| ConfigError::StartMismatch {
            method: self.name(),
            expected,
        };
        let method: AnyMethod<'_> = match (self, start) {
            (Self::Bisection, Start::Interval(interval)) => {
                Bisection::on(equation, interval, config).into()
            }
            (Self::Chord, Start::Interval(interval)) => Chord::on(equation, interval, config).into(),
            (Self::FixedPoint, Start::Interval(interval)) => {
                FixedPoint::on(equation, interval, config)?.into()
            }
            (Self::Newton, Start::Point(x0)) => Newton::new(equation, x0, config)?.into(),
            (Self::Newton, Start::Interval(_)) => return Err(mismatch("a starting point").into()),
            (_, Start::Point(_)) => return Err(mismatch("an interval").into()),
        };
        Ok(method)
    }
}

impl fmt::Display for MethodKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for MethodKind {
    type Err = UnknownMethod;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_ascii_lowercase().replace(['_', ' '], "-");
        Self::ALL
            .into_iter()
            .find(|kind| kind.name() == wanted)
            .ok_or_else(|| UnknownMethod(s.to_owned()))
    }
}

/// Any scalar method, chosen at runtime.
#[derive(Debug, Clone, Copy)]
pub enum AnyMethod<'a> {
    Bisection(Bisection<'a>),
    Chord(Chord<'a>),
    Newton(Newton<'a>),
    FixedPoint(FixedPoint<'a>),
}

impl AnyMethod<'_> {
    /// Returns which method this is.
    #[must_use]
    pub fn kind(&self) -> MethodKind {
        match self {
            Self::Bisection(_) => MethodKind::Bisection,
            Self::Chord(_) => MethodKind::Chord,
            Self::Newton(_) => MethodKind::Newton,
            Self::FixedPoint(_) => MethodKind::FixedPoint,
        }
    }

    /// Returns the method's configuration.
    #[must_use]
    pub fn config(&self) -> &Config {
        match self {
            Self::Bisection(m) => m.config(),
            Self::Chord(m) => m.config(),
            Self::Newton(m) => m.config(),
            Self::FixedPoint(m) => m.config(),
        }
    }

    /// Tests the method's convergence preconditions.
    ///
    /// # Errors
    ///
    /// See [`Method::check`].
    pub fn check(&self) -> Result<(), Inapplicable> {
        match self {
            Self::Bisection(m) => m.check(),
            Self::Chord(m) => m.check(),
            Self::Newton(m) => m.check(),
            Self::FixedPoint(m) => m.check(),
        }
    }

    /// Runs the method with an observer that accepts every method's events.
    ///
    /// # Errors
    ///
    /// See [`Method::solve`].
    pub fn solve<Obs>(&self, observer: Obs) -> Result<Solution, Error>
    where
        Obs: Observer<bisection::Event, Action>
            + Observer<chord::Event, Action>
            + Observer<newton::Event, Action>
            + Observer<fixed_point::Event, Action>,
    {
        match self {
            Self::Bisection(m) => m.solve(observer),
            Self::Chord(m) => m.solve(observer),
            Self::Newton(m) => m.solve(observer),
            Self::FixedPoint(m) => m.solve(observer),
        }
    }

    /// Runs the method without an observer.
    ///
    /// # Errors
    ///
    /// See [`Method::solve`].
    pub fn solve_unobserved(&self) -> Result<Solution, Error> {
        self.solve(())
    }
}

impl<'a> From<Bisection<'a>> for AnyMethod<'a> {
    fn from(method: Bisection<'a>) -> Self {
        Self::Bisection(method)
    }
}

impl<'a> From<Chord<'a>> for AnyMethod<'a> {
    fn from(method: Chord<'a>) -> Self {
        Self::Chord(method)
    }
}

impl<'a> From<Newton<'a>> for AnyMethod<'a> {
    fn from(method: Newton<'a>) -> Self {
        Self::Newton(method)
    }
}

impl<'a> From<FixedPoint<'a>> for AnyMethod<'a> {
    fn from(method: FixedPoint<'a>) -> Self {
        Self::FixedPoint(method)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use std::f64::consts::SQRT_2;

    use approx::assert_relative_eq;

    #[test]
    fn parses_method_names() {
        assert_eq!("bisection".parse::<MethodKind>(), Ok(MethodKind::Bisection));
        assert_eq!(" Fixed_Point ".parse::<MethodKind>(), Ok(MethodKind::FixedPoint));
        assert_eq!(
            "secant".parse::<MethodKind>(),
            Err(UnknownMethod("secant".to_owned()))
        );
        for kind in MethodKind::ALL {
            assert_eq!(kind.to_string().parse::<MethodKind>(), Ok(kind));
        }
    }

    #[test]
    fn every_method_agrees_on_the_root() {
        let eq = Equation::new("x^2 - 2", |x| x * x - 2.0);
        let config = Config::new(1e-8, 8).unwrap();
        let interval = Interval::new(1.0, 2.0).unwrap();

        for kind in MethodKind::ALL {
            let start = if kind.uses_interval() {
                Start::Interval(interval)
            } else {
                Start::Point(1.0)
            };
            let method = kind.build(&eq, start, config).unwrap();
            assert_eq!(method.kind(), kind);
            assert!(method.check().is_ok(), "{kind} should apply");

            let solution = method.solve_unobserved().unwrap();
            assert!(solution.is_converged(), "{kind} should converge");
            assert_relative_eq!(solution.root, SQRT_2, epsilon = 1e-7);
        }
    }

    #[test]
    fn start_must_suit_the_method() {
        let eq = Equation::new("x^2 - 2", |x| x * x - 2.0);
        let config = Config::default();
        let interval = Interval::new(1.0, 2.0).unwrap();

        assert!(matches!(
            MethodKind::Newton.build(&eq, Start::Interval(interval), config),
            Err(Error::InvalidConfig(ConfigError::StartMismatch { method: "newton", .. }))
        ));
        assert!(matches!(
            MethodKind::Chord.build(&eq, Start::Point(1.0), config),
            Err(Error::InvalidConfig(ConfigError::StartMismatch { method: "chord", .. }))
        ));
    }
}
