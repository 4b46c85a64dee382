//! Raster loading module
//!
//! This module provides the in-memory raster type and format-specific readers
//! that decode reference and channel images into it.

mod reader;
mod tiff_reader;
mod image_reader;
mod file_reader;
pub mod convert;
pub mod types;

pub use reader::RasterReader;
pub use tiff_reader::TiffRasterReader;
pub use image_reader::ImageRasterReader;
pub use file_reader::{FileRasterReader, is_tiff};
pub use types::Raster;
