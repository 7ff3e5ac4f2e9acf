//! Axis-aligned rectangles.
//!
//! A [`Rect2`] is stored as an `origin` (its minimum corner) and non-negative
//! `extents`. The rectangle with both fields exactly zero is *empty* and acts
//! as the identity for [`Rect2::combine`] and [`Rect2::combine_rect`], so an
//! accumulator can start from [`Rect2::empty`].

mod clip;

pub use clip::{Outcode, MAX_CLIP_PASSES};

use crate::error::{GeometryError, Result};
use crate::math::{NumericDomain, Point2};

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Rect2 {
    origin: Point2,
    extents: Point2,
}

impl Rect2 {
    /// Creates a rectangle with its minimum corner at `origin`.
    ///
    /// # Errors
    ///
    /// Returns [`GeometryError::NegativeSize`] if either extent is negative.
    pub fn new(origin: Point2, extents: Point2) -> Result<Self> {
        check_extents(extents)?;
        Ok(Self { origin, extents })
    }

    /// Smallest rectangle containing both points, in any order.
    #[must_use]
    pub fn from_points(a: Point2, b: Point2) -> Self {
        let origin = a.inf(&b);
        Self {
            origin,
            extents: a.sup(&b) - origin,
        }
    }

    /// Zero-size rectangle located at `p`.
    #[must_use]
    pub fn from_point(p: Point2) -> Self {
        Self {
            origin: p,
            extents: Point2::zeros(),
        }
    }

    #[must_use]
    pub const fn empty() -> Self {
        Self {
            origin: Point2::new(0.0, 0.0),
            extents: Point2::new(0.0, 0.0),
        }
    }

    /// True only when origin and extents are both exactly zero.
    ///
    /// A zero-area rectangle anywhere else still counts as a location.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.origin == Point2::zeros() && self.extents == Point2::zeros()
    }

    #[must_use]
    pub fn origin(&self) -> Point2 {
        self.origin
    }

    #[must_use]
    pub fn extents(&self) -> Point2 {
        self.extents
    }

    pub fn set_origin(&mut self, origin: Point2) {
        self.origin = origin;
    }

    /// # Errors
    ///
    /// Returns [`GeometryError::NegativeSize`] and leaves the rectangle
    /// unchanged if either extent is negative.
    pub fn set_extents(&mut self, extents: Point2) -> Result<()> {
        check_extents(extents)?;
        self.extents = extents;
        Ok(())
    }

    #[must_use]
    pub fn min(&self) -> Point2 {
        self.origin
    }

    #[must_use]
    pub fn max(&self) -> Point2 {
        self.origin + self.extents
    }

    #[must_use]
    pub fn width(&self) -> f64 {
        self.extents.x
    }

    #[must_use]
    pub fn height(&self) -> f64 {
        self.extents.y
    }

    #[must_use]
    pub fn centre(&self) -> Point2 {
        self.origin + self.extents * 0.5
    }

    #[must_use]
    pub fn area(&self) -> f64 {
        self.extents.x * self.extents.y
    }

    /// Smallest rectangle containing `self` and `p`.
    #[must_use]
    pub fn combine(self, p: Point2) -> Self {
        if self.is_empty() {
            return Self::from_point(p);
        }
        Self::from_points(self.min().inf(&p), self.max().sup(&p))
    }

    pub fn combine_to(&mut self, p: Point2) {
        *self = self.combine(p);
    }

    /// Smallest rectangle containing both rectangles.
    #[must_use]
    pub fn combine_rect(self, other: &Self) -> Self {
        if other.is_empty() {
            return self;
        }
        if self.is_empty() {
            return *other;
        }
        Self::from_points(self.min().inf(&other.min()), self.max().sup(&other.max()))
    }

    pub fn combine_rect_to(&mut self, other: &Self) {
        *self = self.combine_rect(other);
    }

    /// Whether `p` lies inside, counting the minimum edges but not the maximum ones.
    #[must_use]
    pub fn contains(&self, p: Point2) -> bool {
        let max = self.max();
        p.x >= self.origin.x && p.x < max.x && p.y >= self.origin.y && p.y < max.y
    }

    /// Whether the rectangles overlap; rectangles that only touch along an
    /// edge or corner count as overlapping. The empty rectangle overlaps nothing.
    #[must_use]
    pub fn intersects(&self, other: &Self) -> bool {
        if self.is_empty() || other.is_empty() {
            return false;
        }
        let (a_max, b_max) = (self.max(), other.max());
        !(a_max.x < other.origin.x
            || b_max.x < self.origin.x
            || a_max.y < other.origin.y
            || b_max.y < self.origin.y)
    }

    /// Overlap of both rectangles, or `None` when they are separate.
    #[must_use]
    pub fn try_intersect(&self, other: &Self) -> Option<Self> {
        if !self.intersects(other) {
            return None;
        }
        Some(Self::from_points(
            self.min().sup(&other.min()),
            self.max().inf(&other.max()),
        ))
    }

    /// Tolerance domain sized to the coordinate span of the rectangle.
    #[must_use]
    pub fn create_domain(&self) -> NumericDomain {
        let (min, max) = (self.min(), self.max());
        NumericDomain::from_range(min.x.min(min.y), max.x.max(max.y))
    }
}

fn check_extents(extents: Point2) -> Result<()> {
    if extents.x < 0.0 || extents.y < 0.0 {
        return Err(GeometryError::NegativeSize {
            width: extents.x,
            height: extents.y,
        });
    }
    Ok(())
}
