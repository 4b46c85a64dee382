use crate::color_pairs::common::error::{ColorPairsError, Result};
use crate::color_pairs::extract::types::ExtractionConfig;
use crate::color_pairs::raster::Raster;

/// Checks the preconditions of an extraction pass.
///
/// All channels must be single-band and share channel 0's geometry, so that
/// every grid point indexes inside every channel.
pub fn validate_inputs(
    reference: &Raster,
    channels: &[Raster],
    config: &ExtractionConfig,
) -> Result<()> {
    if config.sample_stride == 0 {
        return Err(ColorPairsError::InvalidStride(config.sample_stride));
    }

    if reference.bands() != config.reference_band_count {
        return Err(ColorPairsError::BandCountMismatch {
            expected: config.reference_band_count,
            actual: reference.bands(),
        });
    }

    if channels.len() != config.channel_count || channels.is_empty() {
        return Err(ColorPairsError::ChannelCountMismatch {
            expected: config.channel_count,
            actual: channels.len(),
        });
    }

    if config.validate_dimensions {
        if reference.is_empty() {
            return Err(ColorPairsError::InvalidDimensions(
                reference.width(),
                reference.height(),
            ));
        }
        if channels[0].is_empty() {
            return Err(ColorPairsError::InvalidDimensions(
                channels[0].width(),
                channels[0].height(),
            ));
        }
    }

    let (expected_width, expected_height) = (channels[0].width(), channels[0].height());
    for (index, channel) in channels.iter().enumerate() {
        if channel.bands() != 1 {
            return Err(ColorPairsError::ChannelBandMismatch {
                index,
                bands: channel.bands(),
            });
        }
        if channel.width() != expected_width || channel.height() != expected_height {
            return Err(ColorPairsError::GeometryMismatch {
                index,
                expected_width,
                expected_height,
                width: channel.width(),
                height: channel.height(),
            });
        }
    }

    Ok(())
}
