use crate::geometry::curve::{Curve2, Line2, LineEq2, LineSeg2};
use crate::math::Point2;

use super::Rect2;

/// Endpoint replacements after which Cohen–Sutherland clipping gives up.
///
/// Each endpoint crosses at most two edges, so a well-formed input settles
/// in four passes; the margin absorbs rounding on the replaced coordinates.
pub const MAX_CLIP_PASSES: usize = 8;

/// Cohen–Sutherland region code of a point relative to a rectangle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Outcode(u8);

impl Outcode {
    pub const INSIDE: Self = Self(0);
    pub const LEFT: Self = Self(1);
    pub const RIGHT: Self = Self(2);
    pub const BOTTOM: Self = Self(4);
    pub const TOP: Self = Self(8);

    #[must_use]
    pub fn bits(self) -> u8 {
        self.0
    }

    #[must_use]
    pub fn is_inside(self) -> bool {
        self.0 == 0
    }

    #[must_use]
    pub fn contains(self, flag: Self) -> bool {
        self.0 & flag.0 != 0
    }

    /// Whether both codes lie outside the same edge.
    #[must_use]
    pub fn shares_side(self, other: Self) -> bool {
        self.0 & other.0 != 0
    }

    fn with(self, flag: Self, set: bool) -> Self {
        if set {
            Self(self.0 | flag.0)
        } else {
            self
        }
    }
}

impl Rect2 {
    /// Region code of `p`; points on an edge count as inside.
    #[must_use]
    pub fn outcode(&self, p: Point2) -> Outcode {
        let (min, max) = (self.min(), self.max());
        Outcode::INSIDE
            .with(Outcode::LEFT, p.x < min.x)
            .with(Outcode::RIGHT, p.x > max.x)
            .with(Outcode::BOTTOM, p.y < min.y)
            .with(Outcode::TOP, p.y > max.y)
    }

    /// Clips `segment` to the rectangle with the Cohen–Sutherland algorithm.
    ///
    /// Returns `None` when no part of the segment lies inside. Endpoints that
    /// are already inside are returned unchanged; an outside endpoint is moved
    /// onto the violated edge, checking top, bottom, right and left in turn.
    #[must_use]
    pub fn clip_segment(&self, segment: &LineSeg2) -> Option<LineSeg2> {
        let (min, max) = (self.min(), self.max());
        let mut start = segment.start();
        let mut end = segment.end();
        let mut start_code = self.outcode(start);
        let mut end_code = self.outcode(end);

        for pass in 0..=MAX_CLIP_PASSES {
            if start_code.is_inside() && end_code.is_inside() {
                return Some(LineSeg2::new(start, end));
            }
            if start_code.shares_side(end_code) || pass == MAX_CLIP_PASSES {
                break;
            }

            let (outside, from, to) = if start_code.is_inside() {
                (end_code, end, start)
            } else {
                (start_code, start, end)
            };
            let d = to - from;
            let moved = if outside.contains(Outcode::TOP) {
                Point2::new(from.x + d.x * (max.y - from.y) / d.y, max.y)
            } else if outside.contains(Outcode::BOTTOM) {
                Point2::new(from.x + d.x * (min.y - from.y) / d.y, min.y)
            } else if outside.contains(Outcode::RIGHT) {
                Point2::new(max.x, from.y + d.y * (max.x - from.x) / d.x)
            } else {
                Point2::new(min.x, from.y + d.y * (min.x - from.x) / d.x)
            };

            if start_code.is_inside() {
                end = moved;
                end_code = self.outcode(end);
            } else {
                start = moved;
                start_code = self.outcode(start);
            }
        }

        if !start_code.shares_side(end_code) {
            tracing::debug!(?start, ?end, "segment clipping did not settle");
        }
        None
    }

    /// Portion of an infinite `line` inside the rectangle, directed like the line.
    ///
    /// Returns `None` when the line misses the rectangle.
    #[must_use]
    pub fn clip_line(&self, line: &Line2) -> Option<LineSeg2> {
        let (min, max) = (self.min(), self.max());
        let domain = self.create_domain();
        let origin = line.origin();
        let delta = line.delta();

        if line.is_horizontal() {
            let y = origin.y;
            if domain.is_less_than(y, min.y) || domain.is_greater_than(y, max.y) {
                return None;
            }
            let (a, b) = (Point2::new(min.x, y), Point2::new(max.x, y));
            return Some(if delta.x >= 0.0 {
                LineSeg2::new(a, b)
            } else {
                LineSeg2::new(b, a)
            });
        }
        if line.is_vertical() {
            let x = origin.x;
            if domain.is_less_than(x, min.x) || domain.is_greater_than(x, max.x) {
                return None;
            }
            let (a, b) = (Point2::new(x, min.y), Point2::new(x, max.y));
            return Some(if delta.y >= 0.0 {
                LineSeg2::new(a, b)
            } else {
                LineSeg2::new(b, a)
            });
        }

        let mut params = [
            (min.x - origin.x) / delta.x,
            (max.x - origin.x) / delta.x,
            (min.y - origin.y) / delta.y,
            (max.y - origin.y) / delta.y,
        ];
        params.sort_by(f64::total_cmp);
        let (t0, t1) = (params[1], params[2]);
        // A line grazing a corner enters and leaves at the same parameter.
        if domain.is_near_equal(t0, t1) {
            return None;
        }

        // The middle span is only inside when the line really crosses the box.
        let mid = line.point_at((t0 + t1) * 0.5);
        let inside = domain.is_greater_than_or_equal(mid.x, min.x)
            && domain.is_less_than_or_equal(mid.x, max.x)
            && domain.is_greater_than_or_equal(mid.y, min.y)
            && domain.is_less_than_or_equal(mid.y, max.y);
        inside.then(|| LineSeg2::new(line.point_at(t0), line.point_at(t1)))
    }

    /// Same as [`Rect2::clip_line`] for a line in general form.
    #[must_use]
    pub fn clip_line_eq(&self, eq: &LineEq2) -> Option<LineSeg2> {
        self.clip_line(&Line2::from(eq))
    }
}
