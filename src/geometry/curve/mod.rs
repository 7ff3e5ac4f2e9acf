mod arc;
mod bezier;
mod line;
mod line_eq;
mod line_seg;

pub use arc::{Arc2, ArcParameters};
pub use bezier::{CubicBezier2, QuadBezier2};
pub use line::Line2;
pub use line_eq::LineEq2;
pub use line_seg::LineSeg2;

use crate::math::Point2;
use crate::operations::query::nearest_point_param;
use crate::tessellation::{simplify_line_points, TessellationParams};

/// A bounded parametric curve in the plane, defined over `t` in `[0, 1]`.
///
/// Only [`start`](Curve2::start), [`end`](Curve2::end) and
/// [`point_at`](Curve2::point_at) are required. The remaining queries default
/// to the generic nearest-point search and adaptive flattening, which are
/// monomorphised per curve type; implementors with a closed form override them.
pub trait Curve2 {
    fn start(&self) -> Point2;

    fn end(&self) -> Point2;

    /// Evaluates the curve at parameter `t`.
    fn point_at(&self, t: f64) -> Point2;

    /// Parameter of the point on the curve nearest to `p`.
    fn parameter(&self, p: Point2) -> f64 {
        nearest_point_param(self, p)
    }

    /// Distance from `p` to the curve, with the parameter of the nearest point.
    fn distance_to_point(&self, p: Point2) -> (f64, f64) {
        let t = self.parameter(p);
        (self.point_at(t).metric_distance(&p), t)
    }

    /// Flattens the whole curve into a polyline within `tolerance`.
    fn to_polyline(&self, tolerance: f64) -> Vec<Point2> {
        self.to_polyline_range(&TessellationParams::with_tolerance(tolerance), 0.0, 1.0)
    }

    /// Flattens the curve between two parameters.
    ///
    /// The first point is `point_at(start_param)` and the last is
    /// `point_at(end_param)`; `end_param < start_param` walks the curve backwards.
    fn to_polyline_range(
        &self,
        params: &TessellationParams,
        start_param: f64,
        end_param: f64,
    ) -> Vec<Point2> {
        simplify_line_points(self, params, start_param, end_param)
    }
}
