use crate::geometry::Rect2;

use super::{NumericDomain, Point2};

/// Integer coordinate on a snapping grid.
pub type GridPoint = nalgebra::Point2<i64>;

/// Fraction of the `i64` range used by the grid; two decimal digits are kept as headroom.
#[allow(clippy::cast_precision_loss)]
const GRID_EXTENT: f64 = i64::MAX as f64 / 100.0;

/// Maps real coordinates inside a bounding rectangle onto an `i64` grid and back.
///
/// The largest dimension of the rectangle spans nearly the full usable integer
/// range, so grid comparisons downstream are exact and order-preserving while
/// the round trip loses as little precision as `f64` allows. Points outside
/// the rectangle still map, with reduced headroom, and saturate at the `i64`
/// limits.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SnapContext {
    origin: Point2,
    domain: NumericDomain,
    scale: Point2,
}

impl SnapContext {
    #[must_use]
    pub fn new(bounds: &Rect2) -> Self {
        let extents = bounds.extents();
        let mut span = extents.x.max(extents.y);
        let domain = bounds.create_domain();
        if domain.is_near_zero(span) || span <= 0.0 {
            span = 1.0;
        }
        let factor = GRID_EXTENT / span;
        tracing::trace!(span, factor, "snap context created");
        Self {
            origin: bounds.min(),
            domain,
            scale: Point2::new(factor, factor),
        }
    }

    #[must_use]
    pub fn origin(&self) -> Point2 {
        self.origin
    }

    /// Tolerance domain matching the bounding rectangle.
    #[must_use]
    pub fn domain(&self) -> &NumericDomain {
        &self.domain
    }

    #[must_use]
    pub fn scale(&self) -> Point2 {
        self.scale
    }

    /// Rounds `p` to the nearest grid point.
    #[must_use]
    #[allow(clippy::cast_possible_truncation)]
    pub fn snap_point(&self, p: Point2) -> GridPoint {
        let scaled = (p - self.origin).component_mul(&self.scale);
        GridPoint::new(scaled.x.round() as i64, scaled.y.round() as i64)
    }

    /// Maps a grid point back to real coordinates.
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn unsnap(&self, p: GridPoint) -> Point2 {
        Point2::new(
            p.x as f64 / self.scale.x + self.origin.x,
            p.y as f64 / self.scale.y + self.origin.y,
        )
    }

    /// Converts a length (not a position) to grid units.
    #[must_use]
    #[allow(clippy::cast_possible_truncation)]
    pub fn snap_value(&self, value: f64) -> i64 {
        (value * self.scale.x).round() as i64
    }

    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn unsnap_value(&self, value: i64) -> f64 {
        value as f64 / self.scale.x
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn context() -> SnapContext {
        let rect = Rect2::new(Point2::new(-10.0, 5.0), Point2::new(40.0, 20.0)).unwrap();
        SnapContext::new(&rect)
    }

    #[test]
    fn origin_maps_to_zero() {
        let ctx = context();
        assert_eq!(ctx.snap_point(Point2::new(-10.0, 5.0)), GridPoint::new(0, 0));
    }

    #[test]
    fn largest_dimension_uses_most_of_the_range() {
        let ctx = context();
        let far = ctx.snap_point(Point2::new(30.0, 5.0));
        assert!(far.x > i64::MAX / 101);
        assert!(far.x <= i64::MAX / 99);
    }

    #[test]
    fn round_trip_is_precise() {
        let ctx = context();
        for p in [
            Point2::new(0.0, 10.0),
            Point2::new(29.999, 24.5),
            Point2::new(-9.25, 5.125),
        ] {
            let back = ctx.unsnap(ctx.snap_point(p));
            assert!((back.x - p.x).abs() < 1e-12, "{back:?} vs {p:?}");
            assert!((back.y - p.y).abs() < 1e-12, "{back:?} vs {p:?}");
        }
    }

    #[test]
    fn snapping_preserves_order() {
        let ctx = context();
        let a = ctx.snap_point(Point2::new(1.0, 7.0));
        let b = ctx.snap_point(Point2::new(1.0 + 1e-9, 7.0 - 1e-9));
        assert!(a.x < b.x);
        assert!(a.y > b.y);
    }

    #[test]
    fn degenerate_bounds_still_snap() {
        let ctx = SnapContext::new(&Rect2::from_point(Point2::new(2.0, 3.0)));
        let p = Point2::new(2.5, 3.5);
        let back = ctx.unsnap(ctx.snap_point(p));
        assert!((back.x - p.x).abs() < 1e-12);
        assert!((back.y - p.y).abs() < 1e-12);
    }

    #[test]
    fn values_scale_like_positions() {
        let ctx = context();
        let len = ctx.snap_value(2.5);
        assert!((ctx.unsnap_value(len) - 2.5).abs() < 1e-12);
        let a = ctx.snap_point(Point2::new(0.0, 5.0));
        let b = ctx.snap_point(Point2::new(2.5, 5.0));
        assert!((b.x - a.x - len).abs() <= 16);
    }
}
