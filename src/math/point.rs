use crate::error::{GeometryError, Result};

use super::{NumericDomain, SIGNED_SCALAR};

/// A 2D position or displacement.
///
/// The same type serves both roles. Componentwise helpers come from nalgebra
/// (`inf`, `sup`, `component_mul`, `lerp`, `norm`, `metric_distance`); the
/// planar extras live on [`PointExt`].
pub type Point2 = nalgebra::Vector2<f64>;

/// Planar operations nalgebra does not provide for [`Point2`].
pub trait PointExt: Sized {
    /// Signed area of the parallelogram spanned by `self` and `other`.
    ///
    /// Positive when `other` lies counter-clockwise of `self`.
    fn determinant(&self, other: &Self) -> f64;

    /// Returns the unit vector pointing the same way.
    ///
    /// # Errors
    ///
    /// Returns [`GeometryError::ZeroLengthVector`] if the norm is near zero.
    fn to_unit(&self) -> Result<Self>;

    /// Componentwise division.
    ///
    /// # Errors
    ///
    /// Returns [`GeometryError::DivisionByZero`] if either component of
    /// `divisor` is zero.
    fn try_div(&self, divisor: &Self) -> Result<Self>;

    /// Rotates counter-clockwise about the origin by `angle` radians.
    #[must_use]
    fn rotate(&self, angle: f64) -> Self;

    /// The vector rotated a quarter turn counter-clockwise.
    #[must_use]
    fn left_perp(&self) -> Self;

    /// Angle from the positive x axis, in `(-π, π]`.
    fn polar_angle(&self) -> f64;

    #[must_use]
    fn midpoint(&self, other: &Self) -> Self;

    fn is_near_equal(&self, other: &Self, domain: &NumericDomain) -> bool;
}

impl PointExt for Point2 {
    fn determinant(&self, other: &Self) -> f64 {
        self.perp(other)
    }

    fn to_unit(&self) -> Result<Self> {
        let len = self.norm();
        if SIGNED_SCALAR.is_near_zero(len) {
            return Err(GeometryError::ZeroLengthVector);
        }
        Ok(self / len)
    }

    fn try_div(&self, divisor: &Self) -> Result<Self> {
        if divisor.x == 0.0 || divisor.y == 0.0 {
            return Err(GeometryError::DivisionByZero);
        }
        Ok(self.component_div(divisor))
    }

    fn rotate(&self, angle: f64) -> Self {
        nalgebra::Rotation2::new(angle) * self
    }

    fn left_perp(&self) -> Self {
        Self::new(-self.y, self.x)
    }

    fn polar_angle(&self) -> f64 {
        self.y.atan2(self.x)
    }

    fn midpoint(&self, other: &Self) -> Self {
        (self + other) * 0.5
    }

    fn is_near_equal(&self, other: &Self, domain: &NumericDomain) -> bool {
        domain.is_near_equal(self.x, other.x) && domain.is_near_equal(self.y, other.y)
    }
}
