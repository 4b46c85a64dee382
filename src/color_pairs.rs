//! HRSC color pair extraction
//!
//! This module pairs the band values of a colour reference image (the basemap)
//! with the values of co-registered HRSC channel images, using an affine
//! transform from channel pixel coordinates to basemap pixel coordinates.
//! Separate modules handle raster loading, the transform model, subpixel
//! sampling, extraction, record output and orchestration.

pub mod common;
pub mod raster;
pub mod transform;
pub mod sampler;
pub mod extract;
pub mod output;
pub mod pipeline;

pub use common::{
    ColorPairsError,
    PipelineTimings,
    Result,
};

pub use raster::{
    FileRasterReader,
    ImageRasterReader,
    Raster,
    RasterReader,
    TiffRasterReader,
};

pub use transform::{
    AffineTransform,
    parse_transform,
    read_transform_file,
};

pub use sampler::{
    sample_bilinear,
    sample_bilinear_f64,
};

pub use extract::{
    ExtractionConfig,
    ExtractionConfigBuilder,
    ExtractionSummary,
    PairExtractor,
    PairRecord,
    SamplePoint,
    extract_pairs,
    extract_pairs_parallel,
};

pub use output::{
    DelimitedPairWriter,
    PairWriter,
};

pub use pipeline::{
    ChannelRole,
    ColorPairsPipeline,
    InputPaths,
};
