use crate::geometry::curve::Curve2;

use super::{Polyline, TessellationParams};

/// Tessellates a whole curve into a polyline.
pub struct TessellateCurve<'a, C: Curve2 + ?Sized> {
    curve: &'a C,
    params: TessellationParams,
}

impl<'a, C: Curve2 + ?Sized> TessellateCurve<'a, C> {
    /// Creates a new `TessellateCurve` operation.
    #[must_use]
    pub fn new(curve: &'a C, params: TessellationParams) -> Self {
        Self { curve, params }
    }

    /// Executes the tessellation over `t` in `[0, 1]`.
    #[must_use]
    pub fn execute(&self) -> Polyline {
        Polyline {
            points: self.curve.to_polyline_range(&self.params, 0.0, 1.0),
        }
    }
}
