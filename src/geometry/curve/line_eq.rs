use std::f64::consts::FRAC_PI_2;

use crate::error::Result;
use crate::math::{Point2, PointExt, SIGNED_SCALAR};

use super::{Curve2, Line2, LineSeg2};

/// A line in general form `a*x + b*y + c = 0`, normalised so that `a² + b² = 1`.
///
/// `(a, b)` is the unit normal pointing to the left of the line direction and
/// `c` is the negated signed distance of the line from the origin along it.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LineEq2 {
    a: f64,
    b: f64,
    c: f64,
}

impl LineEq2 {
    /// Creates an equation from raw coefficients, normalising them.
    ///
    /// # Errors
    ///
    /// Returns [`GeometryError::ZeroLengthVector`](crate::GeometryError::ZeroLengthVector)
    /// if `(a, b)` has near-zero length.
    pub fn new(a: f64, b: f64, c: f64) -> Result<Self> {
        let normal = Point2::new(a, b);
        let len = normal.norm();
        let unit = normal.to_unit()?;
        Ok(Self {
            a: unit.x,
            b: unit.y,
            c: c / len,
        })
    }

    /// Creates the equation of the line through `from` and `to`.
    ///
    /// # Errors
    ///
    /// Returns [`GeometryError::ZeroLengthVector`](crate::GeometryError::ZeroLengthVector)
    /// if the points coincide.
    pub fn from_points(from: Point2, to: Point2) -> Result<Self> {
        Ok(Self::from(&Line2::from_points(from, to)?))
    }

    /// Creates the equation of the line carrying `segment`.
    ///
    /// # Errors
    ///
    /// Returns [`GeometryError::ZeroLengthVector`](crate::GeometryError::ZeroLengthVector)
    /// if the segment has near-zero length.
    pub fn from_segment(segment: &LineSeg2) -> Result<Self> {
        Self::from_points(segment.start(), segment.end())
    }

    #[must_use]
    pub fn a(&self) -> f64 {
        self.a
    }

    #[must_use]
    pub fn b(&self) -> f64 {
        self.b
    }

    #[must_use]
    pub fn c(&self) -> f64 {
        self.c
    }

    #[must_use]
    pub fn normal(&self) -> Point2 {
        Point2::new(self.a, self.b)
    }

    /// Signed distance from `p`; positive on the side the normal points to.
    #[must_use]
    pub fn distance_to_point(&self, p: Point2) -> f64 {
        self.a * p.x + self.b * p.y + self.c
    }

    #[must_use]
    pub fn project_point(&self, p: Point2) -> Point2 {
        p - self.normal() * self.distance_to_point(p)
    }

    #[must_use]
    pub fn is_horizontal(&self) -> bool {
        SIGNED_SCALAR.is_near_zero(self.a)
    }

    #[must_use]
    pub fn is_vertical(&self) -> bool {
        SIGNED_SCALAR.is_near_zero(self.b)
    }

    #[must_use]
    pub fn is_parallel(&self, other: &Self) -> bool {
        SIGNED_SCALAR.is_near_zero(self.normal().determinant(&other.normal()))
    }

    #[must_use]
    pub fn is_perpendicular(&self, other: &Self) -> bool {
        SIGNED_SCALAR.is_near_zero(self.normal().dot(&other.normal()))
    }

    /// Signed angle in `[-π/2, π/2]` from this line to `other`.
    ///
    /// Lines are undirected here, so the result is the smaller rotation that
    /// makes them parallel; counter-clockwise is positive.
    #[must_use]
    pub fn angle_to(&self, other: &Self) -> f64 {
        let cross = self.a * other.b - other.a * self.b;
        let dot = self.a * other.a + self.b * other.b;
        if dot == 0.0 {
            return FRAC_PI_2.copysign(cross);
        }
        (cross / dot).atan()
    }

    /// The line perpendicular to this one passing through `p`.
    ///
    /// Its normal is this line's direction, so the result stays normalised.
    #[must_use]
    pub fn perp_through_point(&self, p: Point2) -> Self {
        Self {
            a: self.b,
            b: -self.a,
            c: self.a * p.y - self.b * p.x,
        }
    }

    /// Point shared by both lines, or `None` when they are parallel.
    #[must_use]
    pub fn try_intersection(&self, other: &Self) -> Option<Point2> {
        let det = self.a * other.b - other.a * self.b;
        if SIGNED_SCALAR.is_near_zero(det) {
            return None;
        }
        Some(Point2::new(
            (self.b * other.c - other.b * self.c) / det,
            (other.a * self.c - self.a * other.c) / det,
        ))
    }
}

impl From<&Line2> for LineEq2 {
    fn from(line: &Line2) -> Self {
        let normal = line.delta().left_perp();
        Self {
            a: normal.x,
            b: normal.y,
            c: -normal.dot(&line.origin()),
        }
    }
}
