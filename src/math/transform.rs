use std::ops::Mul;

use nalgebra::Matrix2;

use crate::error::{GeometryError, Result};

use super::Point2;

/// A 2x2 linear map on [`Point2`] values.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LinearTransform2 {
    matrix: Matrix2<f64>,
}

impl LinearTransform2 {
    #[must_use]
    pub fn identity() -> Self {
        Self {
            matrix: Matrix2::identity(),
        }
    }

    #[must_use]
    pub fn from_matrix(matrix: Matrix2<f64>) -> Self {
        Self { matrix }
    }

    /// Builds a transform from row-major coefficients `[m00, m01, m10, m11]`.
    ///
    /// # Errors
    ///
    /// Returns [`GeometryError::InvalidArgument`] unless exactly four coefficients are given.
    pub fn from_slice(coefficients: &[f64]) -> Result<Self> {
        if coefficients.len() != 4 {
            return Err(GeometryError::InvalidArgument(format!(
                "a 2x2 transform needs 4 coefficients, got {}",
                coefficients.len()
            )));
        }
        Ok(Self {
            matrix: Matrix2::from_row_slice(coefficients),
        })
    }

    /// Counter-clockwise rotation by `angle` radians.
    #[must_use]
    pub fn rotation(angle: f64) -> Self {
        let (sin, cos) = angle.sin_cos();
        Self {
            matrix: Matrix2::new(cos, -sin, sin, cos),
        }
    }

    #[must_use]
    pub fn scale(sx: f64, sy: f64) -> Self {
        Self {
            matrix: Matrix2::new(sx, 0.0, 0.0, sy),
        }
    }

    #[must_use]
    pub fn matrix(&self) -> &Matrix2<f64> {
        &self.matrix
    }

    /// Composition applying `self` first, then `next`.
    #[must_use]
    pub fn then(&self, next: &Self) -> Self {
        Self {
            matrix: next.matrix * self.matrix,
        }
    }

    #[must_use]
    pub fn apply(&self, p: Point2) -> Point2 {
        self.matrix * p
    }

    #[must_use]
    pub fn determinant(&self) -> f64 {
        self.matrix.determinant()
    }

    /// The inverse map, or `None` if the matrix is singular.
    #[must_use]
    pub fn try_inverse(&self) -> Option<Self> {
        self.matrix.try_inverse().map(|matrix| Self { matrix })
    }
}

impl Default for LinearTransform2 {
    fn default() -> Self {
        Self::identity()
    }
}

impl Mul<Point2> for &LinearTransform2 {
    type Output = Point2;

    fn mul(self, rhs: Point2) -> Point2 {
        self.apply(rhs)
    }
}
