use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use hrsc_color_pairs::color_pairs::{
    ColorPairsError, ColorPairsPipeline, ExtractionConfig, InputPaths,
};
use hrsc_color_pairs::color_pairs::extract::{DEFAULT_ROWS_PER_CHUNK, DEFAULT_SAMPLE_STRIDE};
use hrsc_color_pairs::logger;

use tracing::{error, info};

/// Pair basemap colour values with HRSC channel values at matching locations.
#[derive(Parser, Debug)]
#[command(name = "write_hrsc_color_pairs")]
struct Cli {
    /// Colour basemap image
    reference: PathBuf,
    /// HRSC red channel
    red: PathBuf,
    /// HRSC green channel
    green: PathBuf,
    /// HRSC blue channel
    blue: PathBuf,
    /// HRSC near-infrared channel
    nir: PathBuf,
    /// HRSC nadir channel
    nadir: PathBuf,
    /// Affine transform from HRSC pixels to basemap pixels
    transform: PathBuf,
    /// Output text file, one pair per line
    output: PathBuf,
    /// Pixel spacing between sampled HRSC points
    #[arg(long, default_value_t = DEFAULT_SAMPLE_STRIDE)]
    stride: usize,
    /// Extract on all cores
    #[arg(long)]
    parallel: bool,
    /// Sampled rows per parallel work item
    #[arg(long, default_value_t = DEFAULT_ROWS_PER_CHUNK)]
    rows_per_chunk: usize,
    /// Log per-stage timings when done
    #[arg(long)]
    timings: bool,
    /// Debug logging
    #[arg(short, long)]
    verbose: bool,
}

fn run(cli: Cli) -> anyhow::Result<()> {
    let output = cli.output;
    let inputs = InputPaths {
        reference: cli.reference,
        channels: vec![cli.red, cli.green, cli.blue, cli.nir, cli.nadir],
        transform: cli.transform,
    };

    let config = ExtractionConfig::builder()
        .sample_stride(cli.stride)
        .channel_count(inputs.channels.len())
        .parallel(cli.parallel)
        .rows_per_chunk(cli.rows_per_chunk)
        .build();
    let pipeline = ColorPairsPipeline::new(config);

    let (summary, timings) = pipeline
        .run_files_with_timings(&inputs, &output)
        .with_context(|| format!("writing color pairs to {}", output.display()))?;

    info!(
        "Wrote {} pairs to {}",
        summary.records_emitted,
        output.display()
    );
    if cli.timings {
        timings.log_summary();
    }
    Ok(())
}

fn main() {
    let cli = Cli::parse();
    logger::init(cli.verbose);

    if let Err(e) = run(cli) {
        error!("{:#}", e);
        let code = e
            .downcast_ref::<ColorPairsError>()
            .map(ColorPairsError::exit_code)
            .unwrap_or(-1);
        std::process::exit(code);
    }
}
