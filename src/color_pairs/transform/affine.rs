use crate::color_pairs::common::error::{ColorPairsError, Result};

/// 2D affine map from source-channel pixel coordinates to reference-image
/// pixel coordinates.
///
/// ```text
/// x = column * a11 + row * a12 + a13
/// y = column * a21 + row * a22 + a23
/// ```
///
/// Only the source -> reference direction is ever evaluated, so the matrix
/// does not need to be invertible.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AffineTransform {
    coefficients: [f64; 6],
}

impl AffineTransform {
    /// Coefficients in row-major order `[a11, a12, a13, a21, a22, a23]`.
    pub fn new(coefficients: [f64; 6]) -> Result<Self> {
        if let Some(index) = coefficients.iter().position(|c| !c.is_finite()) {
            return Err(ColorPairsError::NonFiniteCoefficient { index });
        }
        Ok(Self { coefficients })
    }

    pub fn identity() -> Self {
        Self {
            coefficients: [1.0, 0.0, 0.0, 0.0, 1.0, 0.0],
        }
    }

    pub fn translation(dx: f64, dy: f64) -> Result<Self> {
        Self::new([1.0, 0.0, dx, 0.0, 1.0, dy])
    }

    pub fn coefficients(&self) -> &[f64; 6] {
        &self.coefficients
    }

    /// Maps source pixel `(column, row)` to reference pixel `(x, y)`.
    pub fn apply(&self, column: f64, row: f64) -> (f64, f64) {
        let [a11, a12, a13, a21, a22, a23] = self.coefficients;
        (
            column * a11 + row * a12 + a13,
            column * a21 + row * a22 + a23,
        )
    }
}

impl Default for AffineTransform {
    fn default() -> Self {
        Self::identity()
    }
}
