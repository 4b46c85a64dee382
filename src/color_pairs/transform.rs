//! Spatial transform module
//!
//! The affine model that carries source-channel pixels into the reference
//! frame, and the parser for the on-disk transform files.

mod affine;
mod parser;

pub use affine::AffineTransform;
pub use parser::{parse_transform, read_transform_file};
