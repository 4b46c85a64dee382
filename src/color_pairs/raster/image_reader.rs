//! Raster reader for the common interchange formats (PNG, JPEG, BMP, ...)
//! using the image library.

use image::DynamicImage;
use tracing::debug;

use crate::color_pairs::common::error::{ColorPairsError, Result};
use crate::color_pairs::raster::convert::convert_bands;
use crate::color_pairs::raster::reader::RasterReader;
use crate::color_pairs::raster::types::Raster;

pub struct ImageRasterReader;

fn into_native_raster(img: DynamicImage) -> Result<Raster> {
    let (width, height) = (img.width() as usize, img.height() as usize);
    let color = img.color();

    // Anything wider than 8 bits is narrowed by the image library.
    let (bands, data) = match (color.has_color(), color.has_alpha()) {
        (false, false) => (1, img.to_luma8().into_raw()),
        (false, true) => (2, img.to_luma_alpha8().into_raw()),
        (true, false) => (3, img.to_rgb8().into_raw()),
        (true, true) => (4, img.to_rgba8().into_raw()),
    };

    Raster::from_vec(width, height, bands, data)
}

impl RasterReader for ImageRasterReader {
    fn read_raster(&self, data: &[u8], bands: usize) -> Result<Raster> {
        debug!("Decoding image, {} bytes", data.len());

        let img = image::load_from_memory(data)
            .map_err(|e| ColorPairsError::DecodeError(e.to_string()))?;

        debug!("Decoded image: {}x{} {:?}", img.width(), img.height(), img.color());

        convert_bands(into_native_raster(img)?, bands)
    }
}
