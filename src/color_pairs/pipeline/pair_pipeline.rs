use std::io::{BufWriter, Write};
use std::path::Path;

use tracing::{debug, info, instrument};

use crate::color_pairs::{
    common::{ColorPairsError, PipelineTimings, Result, Timer},
    extract::{
        ExtractionConfig, ExtractionSummary, PairRecord, extract_pairs, extract_pairs_parallel,
        validate_inputs,
    },
    output::{DelimitedPairWriter, PairWriter},
    pipeline::types::{ChannelRole, InputPaths, LoadedInputs},
    raster::{FileRasterReader, Raster, RasterReader},
    transform::{AffineTransform, read_transform_file},
};

pub struct ColorPairsPipeline<R: RasterReader, W: PairWriter> {
    reader: R,
    writer: W,
    config: ExtractionConfig,
}

impl ColorPairsPipeline<FileRasterReader, DelimitedPairWriter> {
    pub fn new(config: ExtractionConfig) -> Self {
        Self {
            reader: FileRasterReader,
            writer: DelimitedPairWriter::new(),
            config,
        }
    }
}

impl<R: RasterReader, W: PairWriter> ColorPairsPipeline<R, W> {
    pub fn with_custom(reader: R, writer: W, config: ExtractionConfig) -> Self {
        Self {
            reader,
            writer,
            config,
        }
    }

    fn load_reference(&self, path: &Path) -> Result<Raster> {
        let _span = tracing::info_span!("decode_reference").entered();
        let data = std::fs::read(path).map_err(|e| {
            ColorPairsError::ReferenceLoadError(format!("{}: {}", path.display(), e))
        })?;
        let raster = self
            .reader
            .read_raster(&data, self.config.reference_band_count)
            .map_err(|e| {
                ColorPairsError::ReferenceLoadError(format!("{}: {}", path.display(), e))
            })?;
        debug!(
            "Reference {}: {}x{} with {} bands",
            path.display(),
            raster.width(),
            raster.height(),
            raster.bands()
        );
        Ok(raster)
    }

    fn load_channel(&self, index: usize, path: &Path) -> Result<Raster> {
        let _span = tracing::info_span!("decode_channel", index).entered();
        let load_error = |reason: String| ColorPairsError::ChannelLoadError {
            index,
            path: path.display().to_string(),
            reason,
        };
        let data = std::fs::read(path).map_err(|e| load_error(e.to_string()))?;
        let raster = self
            .reader
            .read_raster(&data, 1)
            .map_err(|e| load_error(e.to_string()))?;
        match ChannelRole::from_index(index) {
            Some(role) => debug!(
                "Channel {} ({}): {}x{}",
                index,
                role,
                raster.width(),
                raster.height()
            ),
            None => debug!("Channel {}: {}x{}", index, raster.width(), raster.height()),
        }
        Ok(raster)
    }

    /// Reads and decodes every input, stopping at the first failure.
    #[instrument(skip(self, inputs, timings))]
    pub fn load_inputs(
        &self,
        inputs: &InputPaths,
        timings: &mut PipelineTimings,
    ) -> Result<LoadedInputs> {
        let timer = Timer::start("decode_reference");
        let reference = self.load_reference(&inputs.reference)?;
        timings.record(timer);

        let mut channels = Vec::with_capacity(inputs.channels.len());
        for (index, path) in inputs.channels.iter().enumerate() {
            let timer = Timer::start("decode_channel");
            channels.push(self.load_channel(index, path)?);
            timings.record(timer);
        }

        let timer = Timer::start("parse_transform");
        let transform = {
            let _span = tracing::info_span!("parse_transform").entered();
            read_transform_file(&inputs.transform)?
        };
        timings.record(timer);
        debug!("Transform coefficients: {:?}", transform.coefficients());

        Ok(LoadedInputs {
            reference,
            channels,
            transform,
        })
    }

    fn write_records(
        &self,
        records: impl Iterator<Item = PairRecord>,
        output: &mut dyn Write,
    ) -> Result<()> {
        for record in records {
            self.writer.write_record(&record, output)?;
        }
        Ok(())
    }

    /// Extracts all pairs from loaded rasters and writes them to `output`.
    #[instrument(skip_all)]
    pub fn write_pairs(
        &self,
        reference: &Raster,
        transform: &AffineTransform,
        channels: &[Raster],
        output: &mut dyn Write,
    ) -> Result<ExtractionSummary> {
        info!(
            stride = self.config.sample_stride,
            parallel = self.config.parallel,
            "Starting pair extraction"
        );

        let summary = if self.config.parallel {
            let (records, summary) = {
                let _span = tracing::info_span!("extract_pairs").entered();
                extract_pairs_parallel(reference, transform, channels, &self.config)?
            };
            let _span = tracing::info_span!("write_pairs").entered();
            self.write_records(records.into_iter(), output)?;
            summary
        } else {
            let _span = tracing::info_span!("extract_pairs").entered();
            let mut extractor = extract_pairs(reference, transform, channels, &self.config)?;
            self.write_records(extractor.by_ref(), output)?;
            extractor.summary()
        };

        output
            .flush()
            .map_err(|e| ColorPairsError::OutputWriteError(e.to_string()))?;

        info!(
            points = summary.points_visited,
            records = summary.records_emitted,
            boundary_misses = summary.boundary_misses,
            "Extraction complete ({:.1}% coverage)",
            summary.coverage()
        );
        Ok(summary)
    }

    pub fn run_files<P: AsRef<Path>>(
        &self,
        inputs: &InputPaths,
        output_path: P,
    ) -> Result<ExtractionSummary> {
        self.run_files_with_timings(inputs, output_path)
            .map(|(summary, _)| summary)
    }

    /// Loads all inputs, validates them, then creates `output_path` and writes
    /// the pairs. Nothing is created when loading or validation fails.
    #[instrument(skip(self, inputs, output_path))]
    pub fn run_files_with_timings<P: AsRef<Path>>(
        &self,
        inputs: &InputPaths,
        output_path: P,
    ) -> Result<(ExtractionSummary, PipelineTimings)> {
        let output_path = output_path.as_ref();
        let mut timings = PipelineTimings::new();

        info!(
            reference = %inputs.reference.display(),
            channels = inputs.channels.len(),
            transform = %inputs.transform.display(),
            output = %output_path.display(),
            "Extracting color pairs"
        );

        let loaded = self.load_inputs(inputs, &mut timings)?;

        let timer = Timer::start("validate_inputs");
        {
            let _span = tracing::info_span!("validate_inputs").entered();
            validate_inputs(&loaded.reference, &loaded.channels, &self.config)?;
        }
        timings.record(timer);

        let timer = Timer::start("create_output_file");
        let output_file = {
            let _span = tracing::info_span!("create_output_file").entered();
            std::fs::File::create(output_path).map_err(|e| {
                ColorPairsError::OutputWriteError(format!("{}: {}", output_path.display(), e))
            })?
        };
        timings.record(timer);

        let timer = Timer::start("extract_and_write");
        let mut output = BufWriter::new(output_file);
        let summary = self
            .write_pairs(
                &loaded.reference,
                &loaded.transform,
                &loaded.channels,
                &mut output,
            )
            .map_err(|e| match e {
                ColorPairsError::OutputWriteError(reason) => ColorPairsError::OutputWriteError(
                    format!("{}: {}", output_path.display(), reason),
                ),
                other => other,
            })?;
        timings.record(timer);

        Ok((summary, timings))
    }

    pub fn config(&self) -> &ExtractionConfig {
        &self.config
    }

    pub fn set_config(&mut self, config: ExtractionConfig) {
        self.config = config;
    }
}
