use nonlin_core::opposite_signs;

use crate::Interval;

/// Current bracket bounds and their function values.
#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) struct Bracket {
    left: f64,
    right: f64,
    f_left: f64,
    f_right: f64,
}

impl Bracket {
    pub(crate) fn new(interval: &Interval, f_left: f64, f_right: f64) -> Self {
        Self {
            left: interval.left(),
            right: interval.right(),
            f_left,
            f_right,
        }
    }

    pub(crate) fn as_array(&self) -> [f64; 2] {
        [self.left, self.right]
    }

    pub(crate) fn values(&self) -> [f64; 2] {
        [self.f_left, self.f_right]
    }

    pub(crate) fn midpoint(&self) -> f64 {
        0.5 * (self.left + self.right)
    }

    pub(crate) fn width(&self) -> f64 {
        self.right - self.left
    }

    /// Returns true if the end values have strictly opposite signs.
    pub(crate) fn has_sign_change(&self) -> bool {
        opposite_signs(self.f_left, self.f_right)
    }

    /// Where the secant through both ends crosses zero.
    ///
    /// Returns `None` if the secant is flat relative to the end values or the
    /// crossing is not finite.
    pub(crate) fn secant_root(&self) -> Option<f64> {
        let rise = self.f_right - self.f_left;
        let scale = self.f_left.abs().max(self.f_right.abs());
        if rise.abs() <= f64::EPSILON * scale {
            return None;
        }
        let x = self.left - self.f_left * (self.right - self.left) / rise;
        x.is_finite().then_some(x)
    }

    /// Replaces the right end if `f(left)` and `f(x)` have opposite signs,
    /// otherwise the left end.
    pub(crate) fn shrink(&mut self, x: f64, f_x: f64) {
        if opposite_signs(self.f_left, f_x) {
            self.right = x;
            self.f_right = f_x;
        } else {
            self.left = x;
            self.f_left = f_x;
        }
    }
}
