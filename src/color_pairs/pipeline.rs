//! Pipeline orchestration module
//!
//! Loads the reference image, the channel images and the transform, then
//! drives extraction and writes the pair records.

mod pair_pipeline;
pub mod types;


pub use pair_pipeline::ColorPairsPipeline;
pub use types::{ChannelRole, InputPaths, LoadedInputs};
