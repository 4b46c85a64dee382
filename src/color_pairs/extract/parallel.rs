use rayon::prelude::*;
use tracing::debug;

use crate::color_pairs::common::error::Result;
use crate::color_pairs::extract::extractor::PairExtractor;
use crate::color_pairs::extract::grid::SampleGrid;
use crate::color_pairs::extract::types::{ExtractionConfig, ExtractionSummary, PairRecord};
use crate::color_pairs::extract::validate::validate_inputs;
use crate::color_pairs::raster::Raster;
use crate::color_pairs::transform::AffineTransform;

/// Extracts all records using the rayon pool.
///
/// Sampled rows are split into chunks of `config.rows_per_chunk`; each chunk
/// is extracted independently and the results are concatenated in chunk
/// order, so the output is identical to the sequential extractor's.
pub fn extract_pairs_parallel(
    reference: &Raster,
    transform: &AffineTransform,
    channels: &[Raster],
    config: &ExtractionConfig,
) -> Result<(Vec<PairRecord>, ExtractionSummary)> {
    validate_inputs(reference, channels, config)?;

    let stride = config.sample_stride;
    let (width, height) = (channels[0].width(), channels[0].height());
    let rows: Vec<usize> = SampleGrid::sampled_rows(height, stride).collect();
    let rows_per_chunk = config.rows_per_chunk.max(1);

    debug!(
        "Extracting {} sampled rows in chunks of {} on {} threads",
        rows.len(),
        rows_per_chunk,
        rayon::current_num_threads()
    );

    let chunks: Vec<(Vec<PairRecord>, ExtractionSummary)> = rows
        .par_chunks(rows_per_chunk)
        .map(|chunk| {
            let first = chunk[0];
            let last = chunk[chunk.len() - 1];
            let grid = SampleGrid::with_rows(width, first..last + 1, stride);
            let mut extractor = PairExtractor::over(reference, transform, channels, grid);
            let records: Vec<PairRecord> = extractor.by_ref().collect();
            (records, extractor.summary())
        })
        .collect();

    let mut summary = ExtractionSummary::default();
    let mut records = Vec::with_capacity(chunks.iter().map(|(r, _)| r.len()).sum());
    for (chunk_records, chunk_summary) in chunks {
        summary.merge(&chunk_summary);
        records.extend(chunk_records);
    }

    Ok((records, summary))
}

#[cfg(test)]
mod tests {
    use super::extract_pairs_parallel;
    use crate::color_pairs::common::error::ColorPairsError;
    use crate::color_pairs::extract::extractor::extract_pairs;
    use crate::color_pairs::extract::types::ExtractionConfig;
    use crate::color_pairs::raster::Raster;
    use crate::color_pairs::transform::AffineTransform;

    #[test]
    fn matches_sequential_output_and_order() {
        let reference = Raster::from_fn(60, 50, 3, |x, y, b| ((x * 3 + y * 5 + b * 17) % 256) as u8);
        let channels = vec![
            Raster::from_fn(40, 45, 1, |x, y, _| (x + y) as u8),
            Raster::from_fn(40, 45, 1, |x, y, _| (x * y % 256) as u8),
        ];
        let transform =
            AffineTransform::new([1.1, 0.2, 1.5, -0.15, 0.95, 4.25]).expect("finite");

        for rows_per_chunk in [1, 2, 7, 100] {
            let config = ExtractionConfig::builder()
                .sample_stride(3)
                .channel_count(2)
                .rows_per_chunk(rows_per_chunk)
                .build();

            let mut sequential =
                extract_pairs(&reference, &transform, &channels, &config).expect("valid inputs");
            let expected: Vec<_> = sequential.by_ref().collect();

            let (records, summary) =
                extract_pairs_parallel(&reference, &transform, &channels, &config)
                    .expect("valid inputs");

            assert!(!expected.is_empty());
            assert_eq!(records, expected);
            assert_eq!(summary, sequential.summary());
        }
    }

    #[test]
    fn validates_before_spawning_work() {
        let reference = Raster::new_fill(4, 4, 3, 0);
        let channels = vec![Raster::new_fill(2, 2, 1, 0), Raster::new_fill(2, 3, 1, 0)];
        let config = ExtractionConfig::builder().channel_count(2).build();

        let err = extract_pairs_parallel(&reference, &AffineTransform::identity(), &channels, &config)
            .unwrap_err();
        assert!(matches!(err, ColorPairsError::GeometryMismatch { index: 1, .. }));
    }
}
