//! Adaptive flattening of parametric curves.
//!
//! A span `[a, b]` is split at its parameter midpoint whenever the curve point
//! there is farther than the tolerance from the midpoint of the chord
//! `P(a)..P(b)`. Flat stretches therefore cost a constant number of samples
//! while tight bends subdivide until they fit.

use crate::geometry::curve::Curve2;
use crate::math::{Point2, PointExt};

use super::TessellationParams;

struct Flattener<'a, C: ?Sized> {
    curve: &'a C,
    params: &'a TessellationParams,
    out: Vec<f64>,
    capped: usize,
}

impl<C: Curve2 + ?Sized> Flattener<'_, C> {
    /// Appends the interior samples of `[a, b]` in walking order.
    fn subdivide(&mut self, a: f64, pa: Point2, b: f64, pb: Point2, depth: u32) {
        let mid = 0.5 * (a + b);
        let pm = self.curve.point_at(mid);

        let flat = pm.metric_distance(&pa.midpoint(&pb)) < self.params.tolerance;
        // max_depth wins over min_depth.
        if depth >= self.params.max_depth {
            if !flat {
                self.capped += 1;
            }
            return;
        }
        if depth >= self.params.min_depth && flat {
            return;
        }

        self.subdivide(a, pa, mid, pm, depth + 1);
        self.out.push(mid);
        self.subdivide(mid, pm, b, pb, depth + 1);
    }
}

/// Parameters of a polyline approximating `curve` between two parameters.
///
/// The list starts with `start_param` and ends with `end_param`; when
/// `end_param < start_param` it is decreasing.
pub fn simplify_line_params<C: Curve2 + ?Sized>(
    curve: &C,
    params: &TessellationParams,
    start_param: f64,
    end_param: f64,
) -> Vec<f64> {
    let mut flattener = Flattener {
        curve,
        params,
        out: vec![start_param],
        capped: 0,
    };
    flattener.subdivide(
        start_param,
        curve.point_at(start_param),
        end_param,
        curve.point_at(end_param),
        0,
    );
    flattener.out.push(end_param);

    if flattener.capped > 0 {
        tracing::debug!(
            spans = flattener.capped,
            max_depth = params.max_depth,
            tolerance = params.tolerance,
            "flattening hit its depth limit"
        );
    }
    tracing::trace!(samples = flattener.out.len(), "curve flattened");
    flattener.out
}

/// Points of a polyline approximating `curve` between two parameters.
///
/// The first and last points are exactly `point_at(start_param)` and
/// `point_at(end_param)`.
pub fn simplify_line_points<C: Curve2 + ?Sized>(
    curve: &C,
    params: &TessellationParams,
    start_param: f64,
    end_param: f64,
) -> Vec<Point2> {
    simplify_line_params(curve, params, start_param, end_param)
        .into_iter()
        .map(|t| curve.point_at(t))
        .collect()
}
