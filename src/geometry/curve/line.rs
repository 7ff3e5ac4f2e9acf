use crate::error::Result;
use crate::math::{NumericDomain, Point2, PointExt, SIGNED_SCALAR};

use super::{Curve2, LineEq2, LineSeg2};

/// An infinite line `P(t) = origin + t * delta` with a unit-length `delta`.
///
/// Since `delta` is a unit vector, `t` measures arc length from the origin.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Line2 {
    origin: Point2,
    delta: Point2,
}

impl Line2 {
    /// Creates a line through `origin` heading along `direction`.
    ///
    /// # Errors
    ///
    /// Returns [`GeometryError::ZeroLengthVector`](crate::GeometryError::ZeroLengthVector)
    /// if `direction` has near-zero length.
    pub fn new(origin: Point2, direction: Point2) -> Result<Self> {
        Ok(Self {
            origin,
            delta: direction.to_unit()?,
        })
    }

    /// Creates the line through `from` and `to`, directed from `from` to `to`.
    ///
    /// # Errors
    ///
    /// Returns [`GeometryError::ZeroLengthVector`](crate::GeometryError::ZeroLengthVector)
    /// if the points coincide.
    pub fn from_points(from: Point2, to: Point2) -> Result<Self> {
        Self::new(from, to - from)
    }

    /// Creates the infinite extension of `segment`.
    ///
    /// # Errors
    ///
    /// Returns [`GeometryError::ZeroLengthVector`](crate::GeometryError::ZeroLengthVector)
    /// if the segment has near-zero length.
    pub fn from_segment(segment: &LineSeg2) -> Result<Self> {
        Self::from_points(segment.start(), segment.end())
    }

    #[must_use]
    pub fn origin(&self) -> Point2 {
        self.origin
    }

    /// Unit direction of the line.
    #[must_use]
    pub fn delta(&self) -> Point2 {
        self.delta
    }

    pub fn set_origin(&mut self, origin: Point2) {
        self.origin = origin;
    }

    /// Replaces the direction, normalising it.
    ///
    /// # Errors
    ///
    /// Returns [`GeometryError::ZeroLengthVector`](crate::GeometryError::ZeroLengthVector)
    /// and leaves the line unchanged if `direction` has near-zero length.
    pub fn set_delta(&mut self, direction: Point2) -> Result<()> {
        self.delta = direction.to_unit()?;
        Ok(())
    }

    #[must_use]
    pub fn point_at(&self, t: f64) -> Point2 {
        self.origin + self.delta * t
    }

    /// Parameter of the orthogonal projection of `p` onto the line.
    #[must_use]
    pub fn parameter(&self, p: Point2) -> f64 {
        (p - self.origin).dot(&self.delta)
    }

    #[must_use]
    pub fn project_point(&self, p: Point2) -> Point2 {
        self.point_at(self.parameter(p))
    }

    /// The same line with the opposite direction.
    #[must_use]
    pub fn reversed(&self) -> Self {
        Self {
            origin: self.origin,
            delta: -self.delta,
        }
    }

    #[must_use]
    pub fn is_horizontal(&self) -> bool {
        SIGNED_SCALAR.is_near_zero(self.delta.y)
    }

    #[must_use]
    pub fn is_vertical(&self) -> bool {
        SIGNED_SCALAR.is_near_zero(self.delta.x)
    }

    #[must_use]
    pub fn is_parallel(&self, other: &Self) -> bool {
        SIGNED_SCALAR.is_near_zero(self.delta.determinant(&other.delta))
    }

    #[must_use]
    pub fn is_perpendicular(&self, other: &Self) -> bool {
        SIGNED_SCALAR.is_near_zero(self.delta.dot(&other.delta))
    }

    /// Whether both lines describe the same set of points.
    ///
    /// `domain` judges the distance between the lines and should match the
    /// coordinate scale.
    #[must_use]
    pub fn is_colinear(&self, other: &Self, domain: &NumericDomain) -> bool {
        self.is_parallel(other) && domain.is_near_zero(self.distance_to_point(other.origin))
    }

    /// Cross product of the direction with the offset of `p` from the origin.
    ///
    /// Positive when `p` lies to the left of the line.
    #[must_use]
    pub fn determinant(&self, p: Point2) -> f64 {
        self.delta.determinant(&(p - self.origin))
    }

    /// Signed perpendicular distance from `p`; positive on the left.
    #[must_use]
    pub fn distance_to_point(&self, p: Point2) -> f64 {
        self.determinant(p)
    }

    /// Parameters `(t, u)` such that `self.point_at(t) == other.point_at(u)`.
    ///
    /// Returns `None` when the lines are parallel or coincident.
    #[must_use]
    pub fn try_intersection_params(&self, other: &Self) -> Option<(f64, f64)> {
        let det = self.delta.determinant(&other.delta);
        if SIGNED_SCALAR.is_near_zero(det) {
            return None;
        }
        let offset = other.origin - self.origin;
        let t = offset.determinant(&other.delta) / det;
        let u = offset.determinant(&self.delta) / det;
        Some((t, u))
    }

    #[must_use]
    pub fn try_intersection(&self, other: &Self) -> Option<Point2> {
        self.try_intersection_params(other)
            .map(|(t, _)| self.point_at(t))
    }
}

impl From<&LineEq2> for Line2 {
    fn from(eq: &LineEq2) -> Self {
        // Direction is the normal turned a quarter clockwise; the origin is the
        // foot of the perpendicular from (0, 0).
        let normal = eq.normal();
        Self {
            origin: normal * -eq.c(),
            delta: Point2::new(normal.y, -normal.x),
        }
    }
}
