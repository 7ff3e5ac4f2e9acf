mod flatten;
mod tessellate_curve;

pub use flatten::{simplify_line_params, simplify_line_points};
pub use tessellate_curve::TessellateCurve;

use crate::math::Point2;

/// Parameters controlling curve flattening.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TessellationParams {
    /// Maximum allowed deviation of a chord midpoint from the curve.
    pub tolerance: f64,
    /// Subdivision depth reached before the flatness test is trusted.
    ///
    /// The test only looks at span midpoints, so a span whose curve crosses
    /// its chord exactly halfway (a symmetric S) looks flat at depth 0.
    pub min_depth: u32,
    /// Subdivision depth at which a span is accepted regardless of flatness.
    /// Caps `min_depth` when the two disagree.
    pub max_depth: u32,
}

impl TessellationParams {
    /// Default depth limits with the given tolerance.
    #[must_use]
    pub fn with_tolerance(tolerance: f64) -> Self {
        Self {
            tolerance,
            ..Self::default()
        }
    }
}

impl Default for TessellationParams {
    fn default() -> Self {
        Self {
            tolerance: 0.01,
            min_depth: 2,
            max_depth: 20,
        }
    }
}

/// A polyline approximation of a curve.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Polyline {
    /// The ordered vertices of the polyline.
    pub points: Vec<Point2>,
}

impl Polyline {
    /// Sum of the segment lengths.
    #[must_use]
    pub fn length(&self) -> f64 {
        self.points
            .windows(2)
            .map(|w| w[0].metric_distance(&w[1]))
            .sum()
    }
}
