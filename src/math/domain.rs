use std::cmp::Ordering;

use super::Point2;

/// Divisor applied to a value range to obtain its tolerance: `10^(f64::DIGITS - 2)`.
const RANGE_DIVISOR: f64 = 1e13;

/// Tolerance domain for values in `[0, 1]`, such as curve parameters.
pub const UNSIGNED_SCALAR: NumericDomain = NumericDomain {
    epsilon: 1.0 / RANGE_DIVISOR,
};

/// Tolerance domain for values in `[-1, 1]`, such as unit vector components.
pub const SIGNED_SCALAR: NumericDomain = NumericDomain {
    epsilon: 2.0 / RANGE_DIVISOR,
};

/// An epsilon-tolerant comparison domain for `f64` values.
///
/// Any two values whose difference is at most `epsilon` compare as equal.
/// The epsilon is meant to be chosen relative to the magnitude of the values
/// being compared, either directly or from the range they are known to lie in.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NumericDomain {
    epsilon: f64,
}

impl NumericDomain {
    /// Creates a domain with the given tolerance. Negative values are made positive.
    #[must_use]
    pub fn new(epsilon: f64) -> Self {
        Self {
            epsilon: epsilon.abs(),
        }
    }

    /// Creates a domain sized for values lying in `[min, max]`.
    #[must_use]
    pub fn from_range(min: f64, max: f64) -> Self {
        Self {
            epsilon: (max - min).abs() / RANGE_DIVISOR,
        }
    }

    /// Creates a domain sized for the coordinates of `points`.
    ///
    /// The range is symmetric around zero and never narrower than `[-1, 1]`.
    #[must_use]
    pub fn for_points(points: &[Point2]) -> Self {
        let extent = points
            .iter()
            .fold(1.0_f64, |acc, p| acc.max(p.x.abs()).max(p.y.abs()));
        Self::from_range(-extent, extent)
    }

    #[must_use]
    pub fn epsilon(&self) -> f64 {
        self.epsilon
    }

    /// Returns `-1`, `0` or `1`; values within epsilon of zero have sign `0`.
    #[must_use]
    pub fn sign(&self, value: f64) -> i32 {
        if value > self.epsilon {
            1
        } else if value < -self.epsilon {
            -1
        } else {
            0
        }
    }

    #[must_use]
    pub fn is_near_zero(&self, value: f64) -> bool {
        value.abs() <= self.epsilon
    }

    #[must_use]
    pub fn is_near_equal(&self, a: f64, b: f64) -> bool {
        self.is_near_zero(a - b)
    }

    #[must_use]
    pub fn is_less_than(&self, a: f64, b: f64) -> bool {
        self.compare(a, b) == Ordering::Less
    }

    #[must_use]
    pub fn is_less_than_or_equal(&self, a: f64, b: f64) -> bool {
        self.compare(a, b) != Ordering::Greater
    }

    #[must_use]
    pub fn is_greater_than(&self, a: f64, b: f64) -> bool {
        self.compare(a, b) == Ordering::Greater
    }

    #[must_use]
    pub fn is_greater_than_or_equal(&self, a: f64, b: f64) -> bool {
        self.compare(a, b) != Ordering::Less
    }

    /// Orders `a` relative to `b`, treating values within epsilon as equal.
    #[must_use]
    pub fn compare(&self, a: f64, b: f64) -> Ordering {
        match self.sign(a - b) {
            1 => Ordering::Greater,
            -1 => Ordering::Less,
            _ => Ordering::Equal,
        }
    }

    /// Replaces `value` with `target` if the two are near equal.
    ///
    /// Returns whether the snap happened; `value` is untouched otherwise.
    pub fn try_snap(&self, value: &mut f64, target: f64) -> bool {
        if self.is_near_equal(*value, target) {
            *value = target;
            true
        } else {
            false
        }
    }

    /// Ensures `value` lies in `[min, max]`.
    ///
    /// Values already inside are left alone. Values outside by no more than
    /// epsilon are clamped onto the nearest bound. Returns `false`, leaving
    /// `value` untouched, when it lies genuinely outside the range.
    pub fn try_snap_range(&self, value: &mut f64, min: f64, max: f64) -> bool {
        if *value < min {
            self.try_snap(value, min)
        } else if *value > max {
            self.try_snap(value, max)
        } else {
            true
        }
    }
}

impl Default for NumericDomain {
    fn default() -> Self {
        UNSIGNED_SCALAR
    }
}
