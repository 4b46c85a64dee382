//! Raster reader for TIFF files using the tiff library.
//!
//! Handles 8-bit and 16-bit gray, gray+alpha, RGB and RGBA images. 16-bit
//! samples are reduced to 8 bits by dropping the low byte.

use std::io::Cursor;

use tiff::ColorType;
use tiff::decoder::{Decoder, DecodingResult};
use tracing::debug;

use crate::color_pairs::common::error::{ColorPairsError, Result};
use crate::color_pairs::raster::convert::convert_bands;
use crate::color_pairs::raster::reader::RasterReader;
use crate::color_pairs::raster::types::Raster;

pub struct TiffRasterReader;

fn native_bands(color_type: ColorType) -> Result<usize> {
    match color_type {
        ColorType::Gray(8 | 16) => Ok(1),
        ColorType::GrayA(8 | 16) => Ok(2),
        ColorType::RGB(8 | 16) => Ok(3),
        ColorType::RGBA(8 | 16) => Ok(4),
        other => Err(ColorPairsError::UnsupportedFormat(format!(
            "TIFF color type {other:?}"
        ))),
    }
}

impl RasterReader for TiffRasterReader {
    fn read_raster(&self, data: &[u8], bands: usize) -> Result<Raster> {
        debug!("Decoding TIFF image, {} bytes", data.len());

        let mut decoder = Decoder::new(Cursor::new(data))
            .map_err(|e| ColorPairsError::DecodeError(e.to_string()))?;

        let (width, height) = decoder
            .dimensions()
            .map_err(|e| ColorPairsError::DecodeError(e.to_string()))?;
        let color_type = decoder
            .colortype()
            .map_err(|e| ColorPairsError::DecodeError(e.to_string()))?;
        let stored_bands = native_bands(color_type)?;

        debug!("Decoded TIFF header: {}x{} {:?}", width, height, color_type);

        let samples: Vec<u8> = match decoder
            .read_image()
            .map_err(|e| ColorPairsError::DecodeError(e.to_string()))?
        {
            DecodingResult::U8(values) => values,
            DecodingResult::U16(values) => values.iter().map(|&v| (v >> 8) as u8).collect(),
            _ => {
                return Err(ColorPairsError::UnsupportedFormat(
                    "TIFF sample format is not 8 or 16 bit unsigned".to_string(),
                ));
            }
        };

        let raster = Raster::from_vec(width as usize, height as usize, stored_bands, samples)?;
        convert_bands(raster, bands)
    }
}

#[cfg(test)]
mod tests {
    use std::io::Cursor;

    use tiff::encoder::{TiffEncoder, colortype};

    use super::TiffRasterReader;
    use crate::color_pairs::common::error::ColorPairsError;
    use crate::color_pairs::raster::reader::RasterReader;

    fn encode_rgb8(width: u32, height: u32, data: &[u8]) -> Vec<u8> {
        let mut buffer = Vec::new();
        let mut encoder = TiffEncoder::new(Cursor::new(&mut buffer)).expect("encoder");
        encoder
            .write_image::<colortype::RGB8>(width, height, data)
            .expect("encode");
        buffer
    }

    fn encode_gray16(width: u32, height: u32, data: &[u16]) -> Vec<u8> {
        let mut buffer = Vec::new();
        let mut encoder = TiffEncoder::new(Cursor::new(&mut buffer)).expect("encoder");
        encoder
            .write_image::<colortype::Gray16>(width, height, data)
            .expect("encode");
        buffer
    }

    #[test]
    fn reads_rgb_tiff_as_three_bands() {
        let pixels: Vec<u8> = (0..2 * 2 * 3).map(|v| v as u8 * 10).collect();
        let bytes = encode_rgb8(2, 2, &pixels);

        let raster = TiffRasterReader.read_raster(&bytes, 3).expect("decode");
        assert_eq!((raster.width(), raster.height(), raster.bands()), (2, 2, 3));
        assert_eq!(raster.data(), pixels.as_slice());
    }

    #[test]
    fn reads_gray16_as_high_byte() {
        let bytes = encode_gray16(2, 1, &[0x1234, 0xff00]);
        let raster = TiffRasterReader.read_raster(&bytes, 1).expect("decode");
        assert_eq!(raster.data(), &[0x12, 0xff]);
    }

    #[test]
    fn garbage_is_a_decode_error() {
        let err = TiffRasterReader
            .read_raster(b"II*\0not really a tiff", 1)
            .unwrap_err();
        assert!(matches!(err, ColorPairsError::DecodeError(_)));
    }
}
