//! Pair extraction module
//!
//! Walks the strided source-channel lattice, maps each point into the
//! reference frame and pairs the interpolated reference values with the raw
//! channel values.

mod extractor;
mod grid;
mod parallel;
mod validate;
pub mod types;

pub use extractor::{PairExtractor, extract_pairs, pair_at};
pub use grid::SampleGrid;
pub use parallel::extract_pairs_parallel;
pub use validate::validate_inputs;
pub use types::{
    DEFAULT_CHANNEL_COUNT, DEFAULT_REFERENCE_BANDS, DEFAULT_ROWS_PER_CHUNK,
    DEFAULT_SAMPLE_STRIDE, ExtractionConfig, ExtractionConfigBuilder, ExtractionSummary,
    PairRecord, SamplePoint,
};
