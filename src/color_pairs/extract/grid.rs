use std::ops::Range;

use crate::color_pairs::extract::types::SamplePoint;

/// Row-major walk over a strided subgrid of a `width`-wide pixel lattice.
///
/// Rows start at `rows.start` and advance by `stride` while below `rows.end`;
/// each row visits columns `0, stride, 2 * stride, ...` below `width`.
#[derive(Debug, Clone)]
pub struct SampleGrid {
    width: usize,
    stride: usize,
    row: usize,
    row_end: usize,
    col: usize,
}

impl SampleGrid {
    pub fn new(width: usize, height: usize, stride: usize) -> Self {
        Self::with_rows(width, 0..height, stride)
    }

    pub fn with_rows(width: usize, rows: Range<usize>, stride: usize) -> Self {
        assert!(stride > 0, "sample stride must be positive");
        Self {
            width,
            stride,
            row: rows.start,
            row_end: rows.end,
            col: 0,
        }
    }

    /// Sampled row indices of a `height`-tall lattice.
    pub fn sampled_rows(height: usize, stride: usize) -> impl Iterator<Item = usize> {
        (0..height).step_by(stride)
    }

    /// Number of sampled positions along an axis of `len` pixels.
    pub fn samples_along(len: usize, stride: usize) -> usize {
        len.div_ceil(stride)
    }
}

impl Iterator for SampleGrid {
    type Item = SamplePoint;

    fn next(&mut self) -> Option<SamplePoint> {
        if self.width == 0 || self.row >= self.row_end {
            return None;
        }

        let point = SamplePoint {
            row: self.row,
            col: self.col,
        };

        self.col = self.col.saturating_add(self.stride);
        if self.col >= self.width {
            self.col = 0;
            self.row = self.row.saturating_add(self.stride);
        }

        Some(point)
    }
}
