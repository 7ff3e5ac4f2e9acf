pub mod domain;
pub mod point;
pub mod snap;
pub mod transform;

pub use domain::{NumericDomain, SIGNED_SCALAR, UNSIGNED_SCALAR};
pub use point::{Point2, PointExt};
pub use snap::{GridPoint, SnapContext};
pub use transform::LinearTransform2;
