use crate::geometry::Rect2;
use crate::math::{NumericDomain, Point2, PointExt, SIGNED_SCALAR};
use crate::tessellation::TessellationParams;

use super::{Curve2, Line2};

/// A bounded segment `P(t) = start + t * (end - start)` for `t` in `[0, 1]`.
///
/// Zero-length segments are allowed; distance queries then measure from `start`.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct LineSeg2 {
    start: Point2,
    end: Point2,
}

impl LineSeg2 {
    #[must_use]
    pub fn new(start: Point2, end: Point2) -> Self {
        Self { start, end }
    }

    pub fn set_start(&mut self, start: Point2) {
        self.start = start;
    }

    pub fn set_end(&mut self, end: Point2) {
        self.end = end;
    }

    /// Vector from `start` to `end`.
    #[must_use]
    pub fn delta(&self) -> Point2 {
        self.end - self.start
    }

    #[must_use]
    pub fn length(&self) -> f64 {
        self.delta().norm()
    }

    #[must_use]
    pub fn midpoint(&self) -> Point2 {
        self.start.midpoint(&self.end)
    }

    #[must_use]
    pub fn reversed(&self) -> Self {
        Self::new(self.end, self.start)
    }

    #[must_use]
    pub fn bounds(&self) -> Rect2 {
        Rect2::from_points(self.start, self.end)
    }

    /// Unclamped parameter of the foot of the perpendicular from `p`.
    ///
    /// Returns `None` for a zero-length segment.
    fn projection_param(&self, p: Point2) -> Option<f64> {
        let delta = self.delta();
        let len_sq = delta.norm_squared();
        if len_sq == 0.0 {
            return None;
        }
        Some((p - self.start).dot(&delta) / len_sq)
    }

    /// Distance from `p` to the infinite extension of the segment.
    ///
    /// Returns `(distance, t)` where `t` is not clamped to `[0, 1]`.
    #[must_use]
    pub fn perp_distance_to_point(&self, p: Point2) -> (f64, f64) {
        match self.projection_param(p) {
            Some(t) => (self.point_at(t).metric_distance(&p), t),
            None => (self.start.metric_distance(&p), 0.0),
        }
    }

    /// Parameters `(t, u)` of the crossing point on `self` and `other`.
    ///
    /// Both parameters must fall inside `[0, 1]`; values outside by no more
    /// than the `domain` tolerance are snapped onto the boundary. Returns
    /// `None` for parallel or degenerate segments and for crossings beyond
    /// either end.
    #[must_use]
    pub fn try_intersection_params(
        &self,
        other: &Self,
        domain: &NumericDomain,
    ) -> Option<(f64, f64)> {
        let (mut t, mut u) = solve_crossing(self.start, self.delta(), other.start, other.delta())?;
        if domain.try_snap_range(&mut t, 0.0, 1.0) && domain.try_snap_range(&mut u, 0.0, 1.0) {
            Some((t, u))
        } else {
            None
        }
    }

    /// Crossing point with `other`, if the segments actually meet.
    #[must_use]
    pub fn try_intersection(&self, other: &Self, domain: &NumericDomain) -> Option<Point2> {
        self.try_intersection_params(other, domain)
            .map(|(t, _)| self.point_at(t))
    }

    /// Parameters `(t, u)` where the segment crosses an infinite `line`.
    ///
    /// `t` is the segment parameter and must lie in `[0, 1]` (snapped under
    /// `domain`); `u` is the arc-length parameter along `line`.
    #[must_use]
    pub fn try_line_intersection_params(
        &self,
        line: &Line2,
        domain: &NumericDomain,
    ) -> Option<(f64, f64)> {
        let (mut t, u) = solve_crossing(self.start, self.delta(), line.origin(), line.delta())?;
        domain.try_snap_range(&mut t, 0.0, 1.0).then_some((t, u))
    }
}

/// Solves `p1 + t * d1 = p2 + u * d2` by Cramer's rule.
///
/// The determinant is judged relative to the direction lengths so that the
/// parallel test does not depend on the segment scale.
fn solve_crossing(p1: Point2, d1: Point2, p2: Point2, d2: Point2) -> Option<(f64, f64)> {
    let scale = d1.norm() * d2.norm();
    if scale == 0.0 {
        return None;
    }
    let det = d1.determinant(&d2);
    if SIGNED_SCALAR.is_near_zero(det / scale) {
        return None;
    }
    let offset = p2 - p1;
    Some((offset.determinant(&d2) / det, offset.determinant(&d1) / det))
}

impl Curve2 for LineSeg2 {
    fn start(&self) -> Point2 {
        self.start
    }

    fn end(&self) -> Point2 {
        self.end
    }

    fn point_at(&self, t: f64) -> Point2 {
        self.start + self.delta() * t
    }

    fn parameter(&self, p: Point2) -> f64 {
        self.projection_param(p).map_or(0.0, |t| t.clamp(0.0, 1.0))
    }

    fn distance_to_point(&self, p: Point2) -> (f64, f64) {
        let t = self.parameter(p);
        (self.point_at(t).metric_distance(&p), t)
    }

    fn to_polyline_range(
        &self,
        _params: &TessellationParams,
        start_param: f64,
        end_param: f64,
    ) -> Vec<Point2> {
        vec![self.point_at(start_param), self.point_at(end_param)]
    }
}
