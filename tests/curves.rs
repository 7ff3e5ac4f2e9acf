//! End-to-end checks across curve types, clipping and snapping.
#![allow(clippy::unwrap_used)]

mod common;

use common::{assert_near, init_tracing, p};
use planegeo::geometry::{
    Arc2, CubicBezier2, Curve2, Line2, LineEq2, LineSeg2, QuadBezier2, Rect2,
};
use planegeo::math::{LinearTransform2, NumericDomain, Point2, SnapContext, UNSIGNED_SCALAR};
use planegeo::operations::query::ClosestPointOnCurve;
use planegeo::tessellation::{TessellateCurve, TessellationParams};
use planegeo::GeometryError;

fn sample_params() -> impl Iterator<Item = f64> {
    (0..=20).map(|i| f64::from(i) / 20.0)
}

fn check_round_trip<C: Curve2>(curve: &C, tol: f64) {
    for t in sample_params() {
        let on = curve.point_at(t);
        let back = curve.point_at(curve.parameter(on));
        assert_near(back, on, tol);
    }
}

#[test]
fn every_curve_round_trips_its_parameter() {
    init_tracing();
    check_round_trip(&LineSeg2::new(p(-4.0, 1.0), p(6.0, 3.5)), 1e-12);
    check_round_trip(&QuadBezier2::new(p(0.0, 0.0), p(3.0, 6.0), p(6.0, -1.0)), 1e-9);
    check_round_trip(
        &CubicBezier2::new(p(0.0, 0.0), p(2.0, 5.0), p(5.0, -3.0), p(7.0, 2.0)),
        1e-9,
    );
    let arc = Arc2::new(p(3.0, 0.0), p(0.0, 2.0), p(3.0, 2.0), 0.0, false, false).unwrap();
    check_round_trip(&arc.parameters(), 1e-9);
}

#[test]
fn segment_intersection_is_shared_by_both_segments() {
    let a = LineSeg2::new(p(2.0, 1.0), p(57.0, 56.0));
    let b = LineSeg2::new(p(25.0, 2.0), p(-38.0, 65.0));
    let (t, u) = a.try_intersection_params(&b, &UNSIGNED_SCALAR).unwrap();
    assert!((0.0..=1.0).contains(&t) && (0.0..=1.0).contains(&u));
    assert_near(a.point_at(t), p(14.0, 13.0), 1e-9);
    assert_near(a.point_at(t), b.point_at(u), 1e-9);
}

#[test]
fn semicircle_from_the_documented_example() {
    let arc = Arc2::new(p(0.0, 5.0), p(10.0, 5.0), p(5.0, 5.0), 0.0, true, false).unwrap();
    let params = arc.parameters();
    assert_eq!(params.centre(), p(5.0, 5.0));
    assert!((params.radius() - 5.0).abs() < f64::EPSILON);
    assert!((params.angle_delta().abs() - std::f64::consts::PI).abs() < 1e-12);

    assert_eq!(
        Arc2::new(p(1.0, 1.0), p(1.0, 1.0), p(5.0, 5.0), 0.0, true, false),
        Err(GeometryError::CoincidentEndpoints)
    );
    assert!(matches!(
        Arc2::new(p(0.0, 0.0), p(20.0, 0.0), p(5.0, 3.0), 0.0, true, false),
        Err(GeometryError::ExcessiveArcSpan { .. })
    ));
}

#[test]
fn mirrored_arc_keeps_its_shape_through_from_axes() {
    let arc = Arc2::new(p(4.0, 0.0), p(0.0, 2.0), p(4.0, 2.0), 0.3, false, true).unwrap();
    let params = arc.parameters();
    let mirror = LinearTransform2::scale(-1.0, 1.0);
    let shift = p(10.0, -3.0);
    let map = |q: Point2| mirror.apply(q) + shift;

    let mirrored = Arc2::from_axes(
        map(params.centre()),
        map(params.x_axis_end()),
        map(params.y_axis_end()),
        map(arc.start()),
        map(arc.end()),
        arc.is_large_sweep(),
        arc.is_clockwise_sweep(),
    )
    .unwrap();
    assert_ne!(mirrored.is_clockwise_sweep(), arc.is_clockwise_sweep());

    let mirrored_params = mirrored.parameters();
    assert_near(mirrored_params.centre(), map(params.centre()), 1e-9);
    for t in sample_params() {
        let (d, _) = mirrored_params.distance_to_point(map(params.point_at(t)));
        assert!(d < 1e-9, "t={t} d={d}");
    }
}

#[test]
fn clipping_follows_the_documented_cases() {
    let rect = Rect2::new(p(0.0, 0.0), p(10.0, 10.0)).unwrap();

    assert!(rect.clip_segment(&LineSeg2::new(p(-5.0, -1.0), p(-1.0, 20.0))).is_none());

    let inside = LineSeg2::new(p(1.0, 1.0), p(8.0, 3.0));
    assert_eq!(rect.clip_segment(&inside), Some(inside));

    let straddling = LineSeg2::new(p(5.0, 2.0), p(5.0, -8.0));
    let clipped = rect.clip_segment(&straddling).unwrap();
    assert_eq!(clipped.start(), straddling.start());
    assert_eq!(clipped.end(), p(5.0, 0.0));

    let diagonal = Line2::from_points(p(-1.0, -1.0), p(1.0, 1.0)).unwrap();
    let through = rect.clip_line(&diagonal).unwrap();
    assert_near(through.start(), p(0.0, 0.0), 1e-9);
    assert_near(through.end(), p(10.0, 10.0), 1e-9);
    let eq = LineEq2::from(&diagonal);
    let through_eq = rect.clip_line_eq(&eq).unwrap();
    assert_near(through_eq.start(), through.start(), 1e-9);
}

#[test]
fn closest_point_and_tessellation_agree() {
    init_tracing();
    let cubic = CubicBezier2::new(p(0.0, 0.0), p(0.0, 10.0), p(10.0, 10.0), p(10.0, 0.0));
    let polyline = TessellateCurve::new(&cubic, TessellationParams::with_tolerance(1e-3)).execute();
    assert_eq!(polyline.points.first().copied(), Some(cubic.start()));
    assert_eq!(polyline.points.last().copied(), Some(cubic.end()));

    for &vertex in &polyline.points {
        let result = ClosestPointOnCurve::new(&cubic, vertex).execute();
        assert!(result.distance < 1e-9, "vertex {vertex:?} off curve by {}", result.distance);
    }
}

#[test]
fn snapping_preserves_order_inside_the_bounds() {
    let bounds = Rect2::from_points(p(-100.0, -50.0), p(300.0, 75.0));
    let ctx = SnapContext::new(&bounds);
    let a = ctx.snap_point(p(10.0, 10.0));
    let b = ctx.snap_point(p(10.0 + 1e-9, 10.0));
    assert!(a.x < b.x);
    assert_near(ctx.unsnap(a), p(10.0, 10.0), 1e-12);

    let domain: &NumericDomain = ctx.domain();
    assert!((domain.epsilon() - 400.0 / 1e13).abs() < 1e-20);
}
