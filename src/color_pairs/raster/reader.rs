use crate::color_pairs::common::error::Result;
use crate::color_pairs::raster::types::Raster;

/// Decodes an encoded image into a raster with exactly `bands` bands.
pub trait RasterReader {
    fn read_raster(&self, data: &[u8], bands: usize) -> Result<Raster>;
}
