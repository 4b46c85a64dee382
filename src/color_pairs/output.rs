//! Pair record output module
//!
//! This module serializes extracted pair records as delimited text.

mod writer;
mod delimited_writer;

pub use writer::PairWriter;
pub use delimited_writer::{DEFAULT_SEPARATOR, DelimitedPairWriter};
