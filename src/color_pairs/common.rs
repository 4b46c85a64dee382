//! Common utilities module
//!
//! This module contains shared utilities used across the color pair pipeline.

pub mod error;
pub mod timing;

pub use error::{ColorPairsError, Result};
pub use timing::{PipelineTimings, StepTiming, Timer};
