//! Band-count conversion applied after decoding.
//!
//! Reference images are read as colour and channel images as gray, whatever
//! their stored layout.

use crate::color_pairs::common::error::{ColorPairsError, Result};
use crate::color_pairs::raster::types::Raster;

const LUMA_R: f32 = 0.299;
const LUMA_G: f32 = 0.587;
const LUMA_B: f32 = 0.114;

pub fn luma(r: u8, g: u8, b: u8) -> u8 {
    (LUMA_R * r as f32 + LUMA_G * g as f32 + LUMA_B * b as f32)
        .round()
        .clamp(0.0, 255.0) as u8
}

/// Converts `raster` to `bands` bands.
///
/// Supported: identity, gray -> N (replicate), RGB/RGBA -> gray (luma),
/// RGBA -> RGB (drop alpha), gray+alpha -> gray.
pub fn convert_bands(raster: Raster, bands: usize) -> Result<Raster> {
    let from = raster.bands();
    if from == bands {
        return Ok(raster);
    }

    let (width, height) = (raster.width(), raster.height());
    let src = raster.data();

    let data: Vec<u8> = match (from, bands) {
        (1, n) => src.iter().flat_map(|&v| std::iter::repeat_n(v, n)).collect(),
        (2, 1) => src.chunks_exact(2).map(|px| px[0]).collect(),
        (3 | 4, 1) => src
            .chunks_exact(from)
            .map(|px| luma(px[0], px[1], px[2]))
            .collect(),
        (4, 3) => src
            .chunks_exact(4)
            .flat_map(|px| [px[0], px[1], px[2]])
            .collect(),
        _ => {
            return Err(ColorPairsError::UnsupportedFormat(format!(
                "cannot convert {from}-band image to {bands} bands"
            )));
        }
    };

    Raster::from_vec(width, height, bands, data)
}
