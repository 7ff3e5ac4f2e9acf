//! Elliptical arcs in SVG endpoint parameterisation.
//!
//! An [`Arc2`] stores what an SVG `A` path command stores: two endpoints, the
//! two ellipse radii, the ellipse rotation and the large-arc/sweep flags.
//! Evaluating points on it needs the centre form, which is derived once into
//! an [`ArcParameters`] value that the caller keeps for as long as the arc is
//! unchanged.
//!
//! The derivation maps the ellipse onto a circle with a linear transform
//! (rotate by `-angle`, then stretch x so both radii become `axes.y`), solves
//! for the circle centre from the chord, and maps results back with the
//! inverse transform.

use std::f64::consts::{PI, TAU};

use crate::error::{GeometryError, Result};
use crate::math::{LinearTransform2, NumericDomain, Point2, PointExt, SIGNED_SCALAR};

use super::Curve2;

/// An elliptical arc from `start` to `end`.
///
/// `axes.x` is the radius along the ellipse's own x axis and `axes.y` the
/// radius along its y axis, before rotating the ellipse by `angle` radians.
/// Angles follow the y-up convention, so a clockwise sweep runs through
/// decreasing angles.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Arc2 {
    start: Point2,
    end: Point2,
    axes: Point2,
    angle: f64,
    large_sweep: bool,
    clockwise_sweep: bool,
}

impl Arc2 {
    /// Creates an arc from its endpoint parameterisation.
    ///
    /// # Errors
    ///
    /// - [`GeometryError::NegativeSize`] if either radius is negative
    /// - [`GeometryError::InvalidArgument`] if either radius is zero
    /// - [`GeometryError::CoincidentEndpoints`] if `start` and `end` coincide
    /// - [`GeometryError::ExcessiveArcSpan`] if the chord is longer than the
    ///   larger ellipse diameter. This rejects arcs that can never be built,
    ///   but some rotated, strongly eccentric ellipses still pass it and end up
    ///   with a zero-offset centre in [`Arc2::parameters`].
    pub fn new(
        start: Point2,
        end: Point2,
        axes: Point2,
        angle: f64,
        large_sweep: bool,
        clockwise_sweep: bool,
    ) -> Result<Self> {
        validate(start, end, axes)?;
        Ok(Self {
            start,
            end,
            axes,
            angle,
            large_sweep,
            clockwise_sweep,
        })
    }

    /// Rebuilds an arc from its centre and the ends of its two radius vectors.
    ///
    /// This is the form produced by mapping an [`ArcParameters`]'s centre,
    /// [`x_axis_end`](ArcParameters::x_axis_end) and
    /// [`y_axis_end`](ArcParameters::y_axis_end) through a transform. The radii
    /// and rotation are read off the radius vectors; when the transform
    /// mirrored the plane (the radius vectors turn clockwise) the sweep
    /// direction is inverted to keep tracing the same points.
    ///
    /// # Errors
    ///
    /// Same as [`Arc2::new`].
    pub fn from_axes(
        centre: Point2,
        x_axis_end: Point2,
        y_axis_end: Point2,
        start: Point2,
        end: Point2,
        large_sweep: bool,
        clockwise_sweep: bool,
    ) -> Result<Self> {
        let x_radius = x_axis_end - centre;
        let y_radius = y_axis_end - centre;
        let mirrored = x_radius.determinant(&y_radius) < 0.0;
        let axes = Point2::new(x_radius.norm(), y_radius.norm());
        Self::new(
            start,
            end,
            axes,
            x_radius.polar_angle(),
            large_sweep,
            clockwise_sweep != mirrored,
        )
    }

    #[must_use]
    pub fn start(&self) -> Point2 {
        self.start
    }

    #[must_use]
    pub fn end(&self) -> Point2 {
        self.end
    }

    #[must_use]
    pub fn axes(&self) -> Point2 {
        self.axes
    }

    /// Rotation of the ellipse in radians.
    #[must_use]
    pub fn angle(&self) -> f64 {
        self.angle
    }

    #[must_use]
    pub fn is_large_sweep(&self) -> bool {
        self.large_sweep
    }

    #[must_use]
    pub fn is_clockwise_sweep(&self) -> bool {
        self.clockwise_sweep
    }

    /// Moves both endpoints.
    ///
    /// # Errors
    ///
    /// Same as [`Arc2::new`]; the arc is left unchanged on error.
    pub fn set_endpoints(&mut self, start: Point2, end: Point2) -> Result<()> {
        validate(start, end, self.axes)?;
        self.start = start;
        self.end = end;
        Ok(())
    }

    /// Replaces the ellipse radii and rotation.
    ///
    /// # Errors
    ///
    /// Same as [`Arc2::new`]; the arc is left unchanged on error.
    pub fn set_ellipse(&mut self, axes: Point2, angle: f64) -> Result<()> {
        validate(self.start, self.end, axes)?;
        self.axes = axes;
        self.angle = angle;
        Ok(())
    }

    pub fn set_large_sweep(&mut self, large_sweep: bool) {
        self.large_sweep = large_sweep;
    }

    pub fn set_clockwise_sweep(&mut self, clockwise_sweep: bool) {
        self.clockwise_sweep = clockwise_sweep;
    }

    /// Derives the centre form of the arc.
    ///
    /// The result is a snapshot: it does not follow later changes to `self`.
    #[must_use]
    pub fn parameters(&self) -> ArcParameters {
        ArcParameters::new(self)
    }

    /// Flattens the arc into a polyline within `tolerance`.
    #[must_use]
    pub fn to_polyline(&self, tolerance: f64) -> Vec<Point2> {
        self.parameters().to_polyline(tolerance)
    }
}

fn validate(start: Point2, end: Point2, axes: Point2) -> Result<()> {
    if axes.x < 0.0 || axes.y < 0.0 {
        return Err(GeometryError::NegativeSize {
            width: axes.x,
            height: axes.y,
        });
    }
    if axes.x == 0.0 || axes.y == 0.0 {
        return Err(GeometryError::InvalidArgument(
            "ellipse radii must be non-zero".to_owned(),
        ));
    }

    let domain = NumericDomain::for_points(&[start, end]);
    if start.is_near_equal(&end, &domain) {
        return Err(GeometryError::CoincidentEndpoints);
    }

    let chord = start.metric_distance(&end);
    let diameter = 2.0 * axes.x.max(axes.y);
    if domain.is_greater_than(chord, diameter) {
        return Err(GeometryError::ExcessiveArcSpan { chord, diameter });
    }
    Ok(())
}

/// Centre form of an [`Arc2`], derived by [`Arc2::parameters`].
///
/// Points are evaluated on a circle of radius [`radius`](Self::radius) and
/// mapped to the ellipse with [`to_ellipse`](Self::to_ellipse). The parameter
/// `t` in `[0, 1]` maps linearly onto the angle range
/// `start_angle ..= start_angle + angle_delta`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ArcParameters {
    start: Point2,
    end: Point2,
    centre: Point2,
    circle_centre: Point2,
    to_circle: LinearTransform2,
    to_ellipse: LinearTransform2,
    radius: f64,
    start_angle: f64,
    angle_delta: f64,
}

impl ArcParameters {
    fn new(arc: &Arc2) -> Self {
        let radius = arc.axes.y;
        let stretch = arc.axes.y / arc.axes.x;
        let to_circle = LinearTransform2::rotation(-arc.angle)
            .then(&LinearTransform2::scale(stretch, 1.0));
        let to_ellipse = LinearTransform2::scale(stretch.recip(), 1.0)
            .then(&LinearTransform2::rotation(arc.angle));

        let s = to_circle.apply(arc.start);
        let e = to_circle.apply(arc.end);
        let chord = e - s;
        let chord_len = chord.norm();
        let half_chord = chord_len * 0.5;

        let mut radicand = radius * radius - half_chord * half_chord;
        if radicand < 0.0 {
            tracing::debug!(
                radicand,
                radius,
                half_chord,
                "arc chord exceeds circle diameter, clamping"
            );
            radicand = 0.0;
        }
        let offset = radicand.sqrt();

        // The centre sits left of the chord exactly when both flags agree.
        let left_normal = if chord_len > 0.0 {
            chord.left_perp() / chord_len
        } else {
            Point2::zeros()
        };
        let side = if arc.large_sweep == arc.clockwise_sweep {
            1.0
        } else {
            -1.0
        };
        let circle_centre = s.midpoint(&e) + left_normal * (side * offset);

        let start_angle = (s - circle_centre).polar_angle();
        let end_angle = (e - circle_centre).polar_angle();
        let mut angle_delta = end_angle - start_angle;
        if arc.clockwise_sweep {
            if angle_delta > 0.0 {
                angle_delta -= TAU;
            }
        } else if angle_delta < 0.0 {
            angle_delta += TAU;
        }

        let centre = to_ellipse.apply(circle_centre);
        tracing::trace!(?centre, radius, start_angle, angle_delta, "arc parameters derived");

        Self {
            start: arc.start,
            end: arc.end,
            centre,
            circle_centre,
            to_circle,
            to_ellipse,
            radius,
            start_angle,
            angle_delta,
        }
    }

    /// Centre of the ellipse.
    #[must_use]
    pub fn centre(&self) -> Point2 {
        self.centre
    }

    /// Centre of the arc in circle space.
    #[must_use]
    pub fn circle_centre(&self) -> Point2 {
        self.circle_centre
    }

    /// Radius of the arc in circle space, equal to `axes.y`.
    #[must_use]
    pub fn radius(&self) -> f64 {
        self.radius
    }

    #[must_use]
    pub fn start_angle(&self) -> f64 {
        self.start_angle
    }

    #[must_use]
    pub fn end_angle(&self) -> f64 {
        self.start_angle + self.angle_delta
    }

    /// Signed sweep in circle space; negative for clockwise arcs, `|Δ| < 2π`.
    #[must_use]
    pub fn angle_delta(&self) -> f64 {
        self.angle_delta
    }

    #[must_use]
    pub fn is_clockwise(&self) -> bool {
        self.angle_delta < 0.0
    }

    #[must_use]
    pub fn is_large(&self) -> bool {
        self.angle_delta.abs() > PI
    }

    /// Maps circle-space offsets onto the ellipse.
    #[must_use]
    pub fn to_ellipse(&self) -> &LinearTransform2 {
        &self.to_ellipse
    }

    /// Maps ellipse-space points into circle space.
    #[must_use]
    pub fn to_circle(&self) -> &LinearTransform2 {
        &self.to_circle
    }

    /// End of the ellipse radius along its own x axis.
    #[must_use]
    pub fn x_axis_end(&self) -> Point2 {
        self.centre + self.to_ellipse.apply(Point2::new(self.radius, 0.0))
    }

    /// End of the ellipse radius along its own y axis.
    #[must_use]
    pub fn y_axis_end(&self) -> Point2 {
        self.centre + self.to_ellipse.apply(Point2::new(0.0, self.radius))
    }

    /// Position of `p` along the sweep as an angle offset from `start_angle`,
    /// folded into the sweep direction. The result lies in `[0, 2π)` for
    /// counter-clockwise arcs and `(-2π, 0]` for clockwise ones.
    fn sweep_offset(&self, p: Point2) -> Option<f64> {
        let q = self.to_circle.apply(p) - self.circle_centre;
        if SIGNED_SCALAR.is_near_zero(q.norm() / self.radius) {
            return None;
        }
        let raw = q.polar_angle() - self.start_angle;
        Some(if self.angle_delta >= 0.0 {
            raw.rem_euclid(TAU)
        } else {
            -(-raw).rem_euclid(TAU)
        })
    }
}

impl Curve2 for ArcParameters {
    fn start(&self) -> Point2 {
        self.start
    }

    fn end(&self) -> Point2 {
        self.end
    }

    fn point_at(&self, t: f64) -> Point2 {
        let (sin, cos) = (self.start_angle + t * self.angle_delta).sin_cos();
        self.centre + self.to_ellipse.apply(Point2::new(cos, sin) * self.radius)
    }

    /// Parameter of the arc point at the same circle-space angle as `p`.
    ///
    /// Points whose angle falls outside the sweep map to whichever endpoint
    /// is nearer; the centre itself maps to `0`.
    fn parameter(&self, p: Point2) -> f64 {
        let Some(offset) = self.sweep_offset(p) else {
            return 0.0;
        };
        if self.angle_delta == 0.0 {
            return 0.0;
        }
        let t = offset / self.angle_delta;
        if t <= 1.0 {
            return t.clamp(0.0, 1.0);
        }
        if p.metric_distance(&self.point_at(0.0)) <= p.metric_distance(&self.point_at(1.0)) {
            0.0
        } else {
            1.0
        }
    }
}
