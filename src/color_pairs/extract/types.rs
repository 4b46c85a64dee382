//! Extraction configuration and record types

/// Pixel spacing between sampled grid points when none is configured.
pub const DEFAULT_SAMPLE_STRIDE: usize = 10;
/// Bands of the colour reference image.
pub const DEFAULT_REFERENCE_BANDS: usize = 3;
/// Red, green, blue, NIR and nadir.
pub const DEFAULT_CHANNEL_COUNT: usize = 5;
/// Sampled rows handed to each parallel worker.
pub const DEFAULT_ROWS_PER_CHUNK: usize = 64;

/// Configuration for pair extraction
#[derive(Debug, Clone, PartialEq)]
pub struct ExtractionConfig {
    /// Distance in pixels between sampled rows and between sampled columns
    pub sample_stride: usize,
    /// Number of bands the reference image must have
    pub reference_band_count: usize,
    /// Number of single-band source channels
    pub channel_count: usize,
    /// Whether to partition the grid rows over the rayon thread pool
    pub parallel: bool,
    /// Sampled rows per parallel work item
    pub rows_per_chunk: usize,
    /// Whether to reject zero-sized rasters before extraction
    pub validate_dimensions: bool,
}

impl Default for ExtractionConfig {
    fn default() -> Self {
        Self {
            sample_stride: DEFAULT_SAMPLE_STRIDE,
            reference_band_count: DEFAULT_REFERENCE_BANDS,
            channel_count: DEFAULT_CHANNEL_COUNT,
            parallel: false,
            rows_per_chunk: DEFAULT_ROWS_PER_CHUNK,
            validate_dimensions: true,
        }
    }
}

impl ExtractionConfig {
    pub fn builder() -> ExtractionConfigBuilder {
        ExtractionConfigBuilder::default()
    }

    /// Values per output line.
    pub fn field_count(&self) -> usize {
        self.reference_band_count + self.channel_count
    }
}

/// Builder for ExtractionConfig
#[derive(Default)]
pub struct ExtractionConfigBuilder {
    sample_stride: Option<usize>,
    reference_band_count: Option<usize>,
    channel_count: Option<usize>,
    parallel: Option<bool>,
    rows_per_chunk: Option<usize>,
    validate_dimensions: Option<bool>,
}

impl ExtractionConfigBuilder {
    pub fn sample_stride(mut self, stride: usize) -> Self {
        self.sample_stride = Some(stride);
        self
    }

    pub fn reference_band_count(mut self, bands: usize) -> Self {
        self.reference_band_count = Some(bands);
        self
    }

    pub fn channel_count(mut self, count: usize) -> Self {
        self.channel_count = Some(count);
        self
    }

    pub fn parallel(mut self, enable: bool) -> Self {
        self.parallel = Some(enable);
        self
    }

    pub fn rows_per_chunk(mut self, rows: usize) -> Self {
        self.rows_per_chunk = Some(rows);
        self
    }

    pub fn validate_dimensions(mut self, validate: bool) -> Self {
        self.validate_dimensions = Some(validate);
        self
    }

    pub fn build(self) -> ExtractionConfig {
        let default = ExtractionConfig::default();
        ExtractionConfig {
            sample_stride: self.sample_stride.unwrap_or(default.sample_stride),
            reference_band_count: self
                .reference_band_count
                .unwrap_or(default.reference_band_count),
            channel_count: self.channel_count.unwrap_or(default.channel_count),
            parallel: self.parallel.unwrap_or(default.parallel),
            rows_per_chunk: self.rows_per_chunk.unwrap_or(default.rows_per_chunk),
            validate_dimensions: self
                .validate_dimensions
                .unwrap_or(default.validate_dimensions),
        }
    }
}

/// Integer location in source-channel pixel space.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SamplePoint {
    pub row: usize,
    pub col: usize,
}

/// Reference-band values paired with the source-channel values at one grid point.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PairRecord {
    /// Grid point the record was taken at
    pub point: SamplePoint,
    /// Interpolated reference values, one per reference band
    pub reference: Vec<u8>,
    /// Raw channel values at `point`, in caller-supplied channel order
    pub channels: Vec<u8>,
}

impl PairRecord {
    pub fn field_count(&self) -> usize {
        self.reference.len() + self.channels.len()
    }

    /// Reference values followed by channel values.
    pub fn values(&self) -> impl Iterator<Item = u8> + '_ {
        self.reference.iter().chain(self.channels.iter()).copied()
    }
}

/// Counters for one extraction pass.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ExtractionSummary {
    pub points_visited: u64,
    pub records_emitted: u64,
    pub boundary_misses: u64,
}

impl ExtractionSummary {
    pub fn merge(&mut self, other: &ExtractionSummary) {
        self.points_visited += other.points_visited;
        self.records_emitted += other.records_emitted;
        self.boundary_misses += other.boundary_misses;
    }

    /// Percentage of visited points that produced a record.
    pub fn coverage(&self) -> f64 {
        if self.points_visited == 0 {
            0.0
        } else {
            self.records_emitted as f64 / self.points_visited as f64 * 100.0
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{ExtractionConfig, ExtractionSummary, PairRecord, SamplePoint};

    #[test]
    fn config_builder_overrides_defaults() {
        let config = ExtractionConfig::builder()
            .sample_stride(4)
            .channel_count(2)
            .parallel(true)
            .build();

        assert_eq!(config.sample_stride, 4);
        assert_eq!(config.reference_band_count, 3);
        assert_eq!(config.channel_count, 2);
        assert!(config.parallel);
        assert_eq!(config.rows_per_chunk, 64);
        assert!(config.validate_dimensions);
        assert_eq!(config.field_count(), 5);
    }

    #[test]
    fn default_config_matches_hrsc_layout() {
        let config = ExtractionConfig::default();
        assert_eq!(config.sample_stride, 10);
        assert_eq!(config.field_count(), 8);
    }

    #[test]
    fn record_values_keep_reference_first() {
        let record = PairRecord {
            point: SamplePoint { row: 0, col: 0 },
            reference: vec![1, 2, 3],
            channels: vec![9, 8],
        };
        assert_eq!(record.field_count(), 5);
        assert_eq!(record.values().collect::<Vec<_>>(), vec![1, 2, 3, 9, 8]);
    }

    #[test]
    fn summary_merge_and_coverage() {
        let mut total = ExtractionSummary::default();
        assert_eq!(total.coverage(), 0.0);

        total.merge(&ExtractionSummary {
            points_visited: 4,
            records_emitted: 1,
            boundary_misses: 3,
        });
        total.merge(&ExtractionSummary {
            points_visited: 4,
            records_emitted: 3,
            boundary_misses: 1,
        });

        assert_eq!(total.points_visited, 8);
        assert_eq!(total.boundary_misses, 4);
        assert!((total.coverage() - 50.0).abs() < 1e-12);
    }
}
