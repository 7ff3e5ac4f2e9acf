use crate::geometry::curve::Curve2;
use crate::math::{Point2, UNSIGNED_SCALAR};

/// Iteration cap for the bracket bisection.
///
/// The bracket halves every step, so about fifty steps already exhaust `f64`
/// resolution on `[0, 1]`.
pub const MAX_BISECTION_STEPS: usize = 128;

/// Uniform samples taken over `[0, 1]` to seed [`nearest_point_param`].
pub const NEAREST_SEED_SAMPLES: u32 = 16;

/// Result of a closest point query.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ClosestPointResult {
    /// The closest point on the curve.
    pub point: Point2,
    /// The parameter value at the closest point.
    pub parameter: f64,
    /// The distance from the query point to the closest point.
    pub distance: f64,
}

/// Finds the closest point on any [`Curve2`] to a given point.
pub struct ClosestPointOnCurve<'a, C: Curve2 + ?Sized> {
    curve: &'a C,
    point: Point2,
}

impl<'a, C: Curve2 + ?Sized> ClosestPointOnCurve<'a, C> {
    /// Creates a new `ClosestPointOnCurve` query.
    #[must_use]
    pub fn new(curve: &'a C, point: Point2) -> Self {
        Self { curve, point }
    }

    /// Executes the query.
    ///
    /// Uses the curve's own [`Curve2::distance_to_point`], so closed-form
    /// overrides such as those of segments and arcs take precedence over the
    /// generic search.
    #[must_use]
    pub fn execute(&self) -> ClosestPointResult {
        let (distance, parameter) = self.curve.distance_to_point(self.point);
        ClosestPointResult {
            point: self.curve.point_at(parameter),
            parameter,
            distance,
        }
    }
}

/// Parameter in `[lo, hi]` of the curve point nearest to `point`.
///
/// Each step probes the quarter points on either side of the bracket
/// midpoint and keeps the half-width bracket centred on whichever of the
/// three is closest to `point`. Stops once the bracket collapses under
/// [`UNSIGNED_SCALAR`] or after [`MAX_BISECTION_STEPS`], returning the best
/// of both bracket ends and the midpoint.
///
/// This is hill climbing, not a global search: if the distance has several
/// local minima inside the bracket the result may be any of them.
pub fn find_nearest_point_param<C: Curve2 + ?Sized>(
    curve: &C,
    point: Point2,
    lo: f64,
    hi: f64,
) -> f64 {
    let distance = |t: f64| curve.point_at(t).metric_distance(&point);

    let (mut lo, mut hi) = (lo, hi);
    let mut mid = 0.5 * (lo + hi);
    let (mut d_lo, mut d_mid, mut d_hi) = (distance(lo), distance(mid), distance(hi));
    let mut settled = false;

    for _ in 0..MAX_BISECTION_STEPS {
        if UNSIGNED_SCALAR.is_near_equal(lo, hi) {
            settled = true;
            break;
        }
        let (q1, q3) = (0.5 * (lo + mid), 0.5 * (mid + hi));
        let (d1, d3) = (distance(q1), distance(q3));
        if d1 < d_mid && d1 <= d3 {
            (hi, d_hi) = (mid, d_mid);
            (mid, d_mid) = (q1, d1);
        } else if d3 < d_mid {
            (lo, d_lo) = (mid, d_mid);
            (mid, d_mid) = (q3, d3);
        } else {
            (lo, d_lo) = (q1, d1);
            (hi, d_hi) = (q3, d3);
        }
    }
    if !settled {
        tracing::debug!(lo, hi, "nearest point bisection hit its step limit");
    }

    [(mid, d_mid), (lo, d_lo), (hi, d_hi)]
        .into_iter()
        .fold((mid, f64::INFINITY), |best, cand| {
            if cand.1 < best.1 {
                cand
            } else {
                best
            }
        })
        .0
}

/// Parameter in `[0, 1]` of the curve point nearest to `point`.
///
/// Scans [`NEAREST_SEED_SAMPLES`] evenly spaced parameters first and only
/// bisects around the best sample, so curves that come close to `point` in
/// several places still resolve to the globally nearest one.
pub fn nearest_point_param<C: Curve2 + ?Sized>(curve: &C, point: Point2) -> f64 {
    let samples = NEAREST_SEED_SAMPLES;
    let step = f64::from(samples).recip();

    let (best_i, best_d) = (0..=samples)
        .map(|i| (i, curve.point_at(f64::from(i) * step).metric_distance(&point)))
        .fold((0, f64::INFINITY), |best, cand| {
            if cand.1 < best.1 {
                cand
            } else {
                best
            }
        });

    let seed = f64::from(best_i) * step;
    let lo = (seed - step).max(0.0);
    let hi = (seed + step).min(1.0);
    let t = find_nearest_point_param(curve, point, lo, hi);

    // Only rounding can make the refined parameter worse than the seed.
    if curve.point_at(t).metric_distance(&point) <= best_d {
        t
    } else {
        seed
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use approx::assert_relative_eq;

    use super::*;
    use crate::geometry::curve::{Arc2, CubicBezier2, LineSeg2, QuadBezier2};

    /// Wrapper that hides the closed-form overrides of the inner curve.
    struct Generic<C>(C);

    impl<C: Curve2> Curve2 for Generic<C> {
        fn start(&self) -> Point2 {
            self.0.start()
        }

        fn end(&self) -> Point2 {
            self.0.end()
        }

        fn point_at(&self, t: f64) -> Point2 {
            self.0.point_at(t)
        }
    }

    #[test]
    fn bisection_on_a_segment_matches_projection() {
        let seg = LineSeg2::new(Point2::new(0.0, 0.0), Point2::new(10.0, 0.0));
        let t = find_nearest_point_param(&seg, Point2::new(3.0, 4.0), 0.0, 1.0);
        assert_relative_eq!(t, 0.3, epsilon = 1e-9);

        let generic = Generic(seg);
        assert_relative_eq!(generic.parameter(Point2::new(7.0, -2.0)), 0.7, epsilon = 1e-9);
        assert_relative_eq!(generic.parameter(Point2::new(-7.0, 1.0)), 0.0, epsilon = 1e-12);
        assert_relative_eq!(generic.parameter(Point2::new(17.0, 1.0)), 1.0, epsilon = 1e-12);
    }

    #[test]
    fn empty_bracket_returns_its_bound() {
        let seg = LineSeg2::new(Point2::new(0.0, 0.0), Point2::new(1.0, 0.0));
        let t = find_nearest_point_param(&seg, Point2::new(0.9, 0.0), 0.25, 0.25);
        assert!((t - 0.25).abs() < f64::EPSILON);
    }

    #[test]
    fn seeding_finds_the_global_minimum() {
        // A closed loop: both ends of the full range sit at the same point, so
        // comparing them alone says nothing about which half holds the target.
        let cubic = CubicBezier2::new(
            Point2::new(0.0, 0.0),
            Point2::new(10.0, 10.0),
            Point2::new(-10.0, 10.0),
            Point2::new(0.0, 0.0),
        );
        let target = cubic.point_at(0.8);
        let t = nearest_point_param(&cubic, target);
        assert!(cubic.point_at(t).metric_distance(&target) < 1e-9, "t={t}");
    }

    #[test]
    fn arc_generic_search_agrees_with_closed_form() {
        let arc = Arc2::new(
            Point2::new(0.0, 5.0),
            Point2::new(10.0, 5.0),
            Point2::new(5.0, 5.0),
            0.0,
            true,
            false,
        )
        .unwrap();
        let params = arc.parameters();
        let p = Point2::new(8.0, 1.0);
        let closed = params.parameter(p);
        let generic = nearest_point_param(&params, p);
        assert_relative_eq!(closed, generic, epsilon = 1e-9);
    }

    #[test]
    fn query_reports_point_parameter_and_distance() {
        let quad = QuadBezier2::new(
            Point2::new(0.0, 0.0),
            Point2::new(1.0, 2.0),
            Point2::new(2.0, 0.0),
        );
        let result = ClosestPointOnCurve::new(&quad, Point2::new(1.0, 3.0)).execute();
        assert_relative_eq!(result.parameter, 0.5, epsilon = 1e-6);
        assert_relative_eq!(result.distance, 2.0, epsilon = 1e-9);
        assert_relative_eq!(result.point.x, 1.0, epsilon = 1e-6);
        assert_relative_eq!(result.point.y, 1.0, epsilon = 1e-9);

        let seg = LineSeg2::new(Point2::new(0.0, 0.0), Point2::new(10.0, 0.0));
        let result = ClosestPointOnCurve::new(&seg, Point2::new(5.0, 3.0)).execute();
        assert_eq!(result.point, Point2::new(5.0, 0.0));
        assert!((result.distance - 3.0).abs() < 1e-12);
    }

    #[test]
    fn works_through_a_trait_object() {
        let seg = LineSeg2::new(Point2::new(0.0, 0.0), Point2::new(0.0, 4.0));
        let curve: &dyn Curve2 = &seg;
        let t = find_nearest_point_param(curve, Point2::new(1.0, 1.0), 0.0, 1.0);
        assert_relative_eq!(t, 0.25, epsilon = 1e-9);
    }
}
