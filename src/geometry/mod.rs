pub mod curve;
pub mod rect;

pub use curve::{
    Arc2, ArcParameters, CubicBezier2, Curve2, Line2, LineEq2, LineSeg2, QuadBezier2,
};
pub use rect::Rect2;
