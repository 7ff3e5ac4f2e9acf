use crate::geometry::Rect2;
use crate::math::Point2;

use super::Curve2;

/// Quadratic Bézier curve `(1-t)²·S + 2(1-t)t·C + t²·E`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct QuadBezier2 {
    pub start: Point2,
    pub ctrl: Point2,
    pub end: Point2,
}

impl QuadBezier2 {
    #[must_use]
    pub fn new(start: Point2, ctrl: Point2, end: Point2) -> Self {
        Self { start, ctrl, end }
    }

    /// First derivative with respect to `t`.
    #[must_use]
    pub fn derivative(&self, t: f64) -> Point2 {
        let mt = 1.0 - t;
        (self.ctrl - self.start) * (2.0 * mt) + (self.end - self.ctrl) * (2.0 * t)
    }

    /// Splits the curve at `t` by de Casteljau subdivision.
    #[must_use]
    pub fn split(&self, t: f64) -> (Self, Self) {
        let a = self.start.lerp(&self.ctrl, t);
        let b = self.ctrl.lerp(&self.end, t);
        let mid = a.lerp(&b, t);
        (Self::new(self.start, a, mid), Self::new(mid, b, self.end))
    }

    /// Bounding box of the control polygon, which contains the curve.
    #[must_use]
    pub fn bounds(&self) -> Rect2 {
        hull_bounds(self.start, &[self.ctrl, self.end])
    }
}

impl Curve2 for QuadBezier2 {
    fn start(&self) -> Point2 {
        self.start
    }

    fn end(&self) -> Point2 {
        self.end
    }

    fn point_at(&self, t: f64) -> Point2 {
        let mt = 1.0 - t;
        self.start * (mt * mt) + self.ctrl * (2.0 * mt * t) + self.end * (t * t)
    }
}

/// Cubic Bézier curve with two control points.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CubicBezier2 {
    pub start: Point2,
    pub ctrl1: Point2,
    pub ctrl2: Point2,
    pub end: Point2,
}

impl CubicBezier2 {
    #[must_use]
    pub fn new(start: Point2, ctrl1: Point2, ctrl2: Point2, end: Point2) -> Self {
        Self {
            start,
            ctrl1,
            ctrl2,
            end,
        }
    }

    /// Degree elevation of a quadratic curve; traces the same points.
    #[must_use]
    pub fn from_quad(quad: &QuadBezier2) -> Self {
        Self::new(
            quad.start,
            quad.start + (quad.ctrl - quad.start) * (2.0 / 3.0),
            quad.end + (quad.ctrl - quad.end) * (2.0 / 3.0),
            quad.end,
        )
    }

    #[must_use]
    pub fn derivative(&self, t: f64) -> Point2 {
        let mt = 1.0 - t;
        (self.ctrl1 - self.start) * (3.0 * mt * mt)
            + (self.ctrl2 - self.ctrl1) * (6.0 * mt * t)
            + (self.end - self.ctrl2) * (3.0 * t * t)
    }

    #[must_use]
    pub fn split(&self, t: f64) -> (Self, Self) {
        let ab = self.start.lerp(&self.ctrl1, t);
        let bc = self.ctrl1.lerp(&self.ctrl2, t);
        let cd = self.ctrl2.lerp(&self.end, t);
        let abc = ab.lerp(&bc, t);
        let bcd = bc.lerp(&cd, t);
        let mid = abc.lerp(&bcd, t);
        (
            Self::new(self.start, ab, abc, mid),
            Self::new(mid, bcd, cd, self.end),
        )
    }

    /// Bounding box of the control polygon, which contains the curve.
    #[must_use]
    pub fn bounds(&self) -> Rect2 {
        hull_bounds(self.start, &[self.ctrl1, self.ctrl2, self.end])
    }
}

impl Curve2 for CubicBezier2 {
    fn start(&self) -> Point2 {
        self.start
    }

    fn end(&self) -> Point2 {
        self.end
    }

    fn point_at(&self, t: f64) -> Point2 {
        let mt = 1.0 - t;
        self.start * (mt * mt * mt)
            + self.ctrl1 * (3.0 * mt * mt * t)
            + self.ctrl2 * (3.0 * mt * t * t)
            + self.end * (t * t * t)
    }
}

fn hull_bounds(first: Point2, rest: &[Point2]) -> Rect2 {
    let (lo, hi) = rest
        .iter()
        .fold((first, first), |(lo, hi), &p| (lo.inf(&p), hi.sup(&p)));
    Rect2::from_points(lo, hi)
}

#[cfg(test)]
mod tests {
    use approx::assert_relative_eq;

    use super::*;

    const TOL: f64 = 1e-10;

    fn quad() -> QuadBezier2 {
        QuadBezier2::new(Point2::new(0.0, 0.0), Point2::new(1.0, 2.0), Point2::new(2.0, 0.0))
    }

    fn cubic() -> CubicBezier2 {
        CubicBezier2::new(
            Point2::new(0.0, 0.0),
            Point2::new(1.0, 3.0),
            Point2::new(3.0, 3.0),
            Point2::new(4.0, 0.0),
        )
    }

    #[test]
    fn quad_endpoints_and_midpoint() {
        let q = quad();
        assert_eq!(q.point_at(0.0), q.start);
        assert_eq!(q.point_at(1.0), q.end);
        let mid = q.point_at(0.5);
        assert_relative_eq!(mid.x, 1.0, epsilon = TOL);
        assert_relative_eq!(mid.y, 1.0, epsilon = TOL);
    }

    #[test]
    fn cubic_endpoints_and_midpoint() {
        let c = cubic();
        assert_eq!(c.point_at(0.0), c.start);
        assert_eq!(c.point_at(1.0), c.end);
        let mid = c.point_at(0.5);
        assert_relative_eq!(mid.x, 2.0, epsilon = TOL);
        assert_relative_eq!(mid.y, 2.25, epsilon = TOL);
    }

    #[test]
    fn quad_parameter_round_trip() {
        let q = quad();
        for i in 0..=20 {
            let t = f64::from(i) / 20.0;
            let p = q.point_at(t);
            let back = q.point_at(q.parameter(p));
            assert!(back.metric_distance(&p) < 1e-9, "t={t} p={p:?} back={back:?}");
        }
    }

    #[test]
    fn cubic_parameter_round_trip() {
        let c = cubic();
        for i in 0..=20 {
            let t = f64::from(i) / 20.0;
            let p = c.point_at(t);
            let back = c.point_at(c.parameter(p));
            assert!(back.metric_distance(&p) < 1e-9, "t={t} p={p:?} back={back:?}");
        }
    }

    #[test]
    fn distance_to_off_curve_point() {
        // Apex of the quad is (1, 1); a point straight above it is nearest there.
        let (d, t) = quad().distance_to_point(Point2::new(1.0, 3.0));
        assert_relative_eq!(d, 2.0, epsilon = 1e-9);
        assert_relative_eq!(t, 0.5, epsilon = 1e-6);
    }

    #[test]
    fn split_halves_meet_on_curve() {
        let c = cubic();
        let (left, right) = c.split(0.3);
        let on_curve = c.point_at(0.3);
        assert_relative_eq!(left.end.x, on_curve.x, epsilon = TOL);
        assert_relative_eq!(left.end.y, on_curve.y, epsilon = TOL);
        assert_eq!(left.end, right.start);
        let p = left.point_at(0.5);
        let q = c.point_at(0.15);
        assert_relative_eq!(p.x, q.x, epsilon = TOL);
        assert_relative_eq!(p.y, q.y, epsilon = TOL);

        let (ql, qr) = quad().split(0.5);
        assert_relative_eq!(ql.end.x, 1.0, epsilon = TOL);
        assert_eq!(qr.end, quad().end);
    }

    #[test]
    fn degree_elevation_traces_same_curve() {
        let q = quad();
        let c = CubicBezier2::from_quad(&q);
        for i in 0..=8 {
            let t = f64::from(i) / 8.0;
            assert!(q.point_at(t).metric_distance(&c.point_at(t)) < TOL);
        }
    }

    #[test]
    fn derivative_matches_finite_difference() {
        let c = cubic();
        let h = 1e-6;
        let fd = (c.point_at(0.4 + h) - c.point_at(0.4 - h)) / (2.0 * h);
        let d = c.derivative(0.4);
        assert_relative_eq!(d.x, fd.x, epsilon = 1e-5);
        assert_relative_eq!(d.y, fd.y, epsilon = 1e-5);

        let q = quad();
        assert_relative_eq!(q.derivative(0.5).y, 0.0, epsilon = TOL);
    }

    #[test]
    fn bounds_contain_control_polygon() {
        let r = cubic().bounds();
        assert_eq!(r.min(), Point2::new(0.0, 0.0));
        assert_eq!(r.max(), Point2::new(4.0, 3.0));

        // Closed loop starting at the origin still counts the origin.
        let loop_quad = QuadBezier2::new(Point2::zeros(), Point2::new(2.0, 2.0), Point2::zeros());
        let r = loop_quad.bounds();
        assert_eq!(r.min(), Point2::zeros());
        assert_eq!(r.max(), Point2::new(2.0, 2.0));
    }
}
