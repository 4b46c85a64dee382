//! Raster data types

use crate::color_pairs::common::error::{ColorPairsError, Result};

/// An immutable 8-bit raster with interleaved bands.
///
/// Pixel `(x, y)` band `b` lives at `(y * width + x) * bands + b`.
#[derive(Debug, Clone, PartialEq)]
pub struct Raster {
    width: usize,
    height: usize,
    bands: usize,
    data: Vec<u8>,
}

impl Raster {
    pub fn from_vec(width: usize, height: usize, bands: usize, data: Vec<u8>) -> Result<Self> {
        if bands == 0 {
            return Err(ColorPairsError::UnsupportedFormat(
                "raster must have at least one band".to_string(),
            ));
        }

        let expected = width
            .checked_mul(height)
            .and_then(|n| n.checked_mul(bands))
            .ok_or(ColorPairsError::InvalidDimensions(width, height))?;

        if data.len() != expected {
            return Err(ColorPairsError::DecodeError(format!(
                "buffer holds {} samples, {}x{}x{} needs {}",
                data.len(),
                width,
                height,
                bands,
                expected
            )));
        }

        Ok(Self {
            width,
            height,
            bands,
            data,
        })
    }

    pub fn new_fill(width: usize, height: usize, bands: usize, value: u8) -> Self {
        let len = width * height * bands;
        Self {
            width,
            height,
            bands,
            data: vec![value; len],
        }
    }

    /// Builds a raster by evaluating `f(x, y, band)` for every sample.
    pub fn from_fn(
        width: usize,
        height: usize,
        bands: usize,
        f: impl Fn(usize, usize, usize) -> u8,
    ) -> Self {
        let mut data = Vec::with_capacity(width * height * bands);
        for y in 0..height {
            for x in 0..width {
                for band in 0..bands {
                    data.push(f(x, y, band));
                }
            }
        }
        Self {
            width,
            height,
            bands,
            data,
        }
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn bands(&self) -> usize {
        self.bands
    }

    pub fn data(&self) -> &[u8] {
        &self.data
    }

    pub fn into_data(self) -> Vec<u8> {
        self.data
    }

    pub fn is_empty(&self) -> bool {
        self.width == 0 || self.height == 0
    }

    pub fn get(&self, x: usize, y: usize, band: usize) -> Option<u8> {
        if x >= self.width || y >= self.height || band >= self.bands {
            return None;
        }
        Some(self.data[(y * self.width + x) * self.bands + band])
    }

    /// All bands of pixel `(x, y)`.
    pub fn pixel(&self, x: usize, y: usize) -> Option<&[u8]> {
        if x >= self.width || y >= self.height {
            return None;
        }
        let start = (y * self.width + x) * self.bands;
        Some(&self.data[start..start + self.bands])
    }
}
