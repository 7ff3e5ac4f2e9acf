use thiserror::Error;

/// Errors raised when constructing or mutating geometric primitives.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum GeometryError {
    /// A direction, chord or segment collapsed to (near) zero length.
    #[error("zero-length vector")]
    ZeroLengthVector,

    #[error("negative size: width = {width}, height = {height}")]
    NegativeSize { width: f64, height: f64 },

    /// Componentwise division where a divisor component is zero.
    #[error("division by zero")]
    DivisionByZero,

    #[error("arc start and end points coincide")]
    CoincidentEndpoints,

    /// The chord between the arc endpoints is longer than the ellipse diameter.
    #[error("arc chord {chord} exceeds ellipse diameter {diameter}")]
    ExcessiveArcSpan { chord: f64, diameter: f64 },

    #[error("invalid argument: {0}")]
    InvalidArgument(String),
}

/// Convenience type alias for results using [`GeometryError`].
pub type Result<T> = std::result::Result<T, GeometryError>;
