use tracing::debug;

use crate::color_pairs::common::error::Result;
use crate::color_pairs::extract::grid::SampleGrid;
use crate::color_pairs::extract::types::{
    ExtractionConfig, ExtractionSummary, PairRecord, SamplePoint,
};
use crate::color_pairs::extract::validate::validate_inputs;
use crate::color_pairs::raster::Raster;
use crate::color_pairs::sampler::sample_bilinear;
use crate::color_pairs::transform::AffineTransform;

/// Builds the record for one grid point, or `None` on a boundary miss.
///
/// The reference is sampled at the transformed location; channel values are
/// read directly at `(point.col, point.row)`.
pub fn pair_at(
    reference: &Raster,
    transform: &AffineTransform,
    channels: &[Raster],
    point: SamplePoint,
) -> Option<PairRecord> {
    let (x, y) = transform.apply(point.col as f64, point.row as f64);
    let reference_values = sample_bilinear(reference, x, y)?;
    let channel_values = channels
        .iter()
        .map(|channel| channel.get(point.col, point.row, 0))
        .collect::<Option<Vec<u8>>>()?;

    Some(PairRecord {
        point,
        reference: reference_values,
        channels: channel_values,
    })
}

/// Lazy, row-major sequence of pair records.
///
/// Points whose reference neighborhood is not fully inside the reference
/// raster are skipped silently and counted as boundary misses.
pub struct PairExtractor<'a> {
    reference: &'a Raster,
    transform: &'a AffineTransform,
    channels: &'a [Raster],
    grid: SampleGrid,
    summary: ExtractionSummary,
}

impl<'a> PairExtractor<'a> {
    /// Extractor over an already validated input set.
    pub(crate) fn over(
        reference: &'a Raster,
        transform: &'a AffineTransform,
        channels: &'a [Raster],
        grid: SampleGrid,
    ) -> Self {
        Self {
            reference,
            transform,
            channels,
            grid,
            summary: ExtractionSummary::default(),
        }
    }

    /// Counters for the points consumed so far.
    pub fn summary(&self) -> ExtractionSummary {
        self.summary
    }
}

impl Iterator for PairExtractor<'_> {
    type Item = PairRecord;

    fn next(&mut self) -> Option<PairRecord> {
        for point in self.grid.by_ref() {
            self.summary.points_visited += 1;
            match pair_at(self.reference, self.transform, self.channels, point) {
                Some(record) => {
                    self.summary.records_emitted += 1;
                    return Some(record);
                }
                None => self.summary.boundary_misses += 1,
            }
        }
        None
    }
}

/// Validates the inputs and returns the lazy record sequence over channel 0's
/// lattice.
pub fn extract_pairs<'a>(
    reference: &'a Raster,
    transform: &'a AffineTransform,
    channels: &'a [Raster],
    config: &ExtractionConfig,
) -> Result<PairExtractor<'a>> {
    validate_inputs(reference, channels, config)?;

    let (width, height) = (channels[0].width(), channels[0].height());
    debug!(
        "Sampling {}x{} channel lattice with stride {} ({} points)",
        width,
        height,
        config.sample_stride,
        SampleGrid::samples_along(width, config.sample_stride)
            * SampleGrid::samples_along(height, config.sample_stride)
    );

    Ok(PairExtractor::over(
        reference,
        transform,
        channels,
        SampleGrid::new(width, height, config.sample_stride),
    ))
}
