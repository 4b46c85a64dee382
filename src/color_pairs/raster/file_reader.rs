use crate::color_pairs::common::error::Result;
use crate::color_pairs::raster::image_reader::ImageRasterReader;
use crate::color_pairs::raster::reader::RasterReader;
use crate::color_pairs::raster::tiff_reader::TiffRasterReader;
use crate::color_pairs::raster::types::Raster;

const TIFF_LE_MAGIC: &[u8] = b"II*\0";
const TIFF_BE_MAGIC: &[u8] = b"MM\0*";

/// Default reader: TIFF data goes to [`TiffRasterReader`], everything else to
/// [`ImageRasterReader`].
pub struct FileRasterReader;

pub fn is_tiff(data: &[u8]) -> bool {
    data.starts_with(TIFF_LE_MAGIC) || data.starts_with(TIFF_BE_MAGIC)
}

impl RasterReader for FileRasterReader {
    fn read_raster(&self, data: &[u8], bands: usize) -> Result<Raster> {
        if is_tiff(data) {
            TiffRasterReader.read_raster(data, bands)
        } else {
            ImageRasterReader.read_raster(data, bands)
        }
    }
}
