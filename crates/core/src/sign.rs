/// The sign of a function value or slope.
///
/// Sign tests compare signs directly instead of testing a product against
/// zero, since the product of two tiny values underflows to zero.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Sign {
    Negative,
    /// Exactly zero (either signed zero), or NaN.
    Zero,
    Positive,
}

impl Sign {
    /// Returns the sign of `value`.
    #[must_use]
    pub fn of(value: f64) -> Self {
        if value > 0.0 {
            Self::Positive
        } else if value < 0.0 {
            Self::Negative
        } else {
            Self::Zero
        }
    }

    /// Returns true if one sign is positive and the other negative.
    #[must_use]
    pub fn is_opposite(self, other: Self) -> bool {
        matches!(
            (self, other),
            (Self::Positive, Self::Negative) | (Self::Negative, Self::Positive)
        )
    }

    /// Returns true if both signs are the same and nonzero.
    #[must_use]
    pub fn agrees_with(self, other: Self) -> bool {
        self == other && self != Self::Zero
    }
}

/// Returns true if `a` and `b` are nonzero with opposite signs.
#[must_use]
pub fn opposite_signs(a: f64, b: f64) -> bool {
    Sign::of(a).is_opposite(Sign::of(b))
}

/// Returns true if `a` and `b` are nonzero with the same sign.
#[must_use]
pub fn same_sign(a: f64, b: f64) -> bool {
    Sign::of(a).agrees_with(Sign::of(b))
}
