use thiserror::Error;

#[derive(Error, Debug)]
pub enum ColorPairsError {
    #[error("Failed to load reference image: {0}")]
    ReferenceLoadError(String),

    #[error("Failed to load channel image #{index} ({path}): {reason}")]
    ChannelLoadError {
        index: usize,
        path: String,
        reason: String,
    },

    #[error("Failed to read transform file: {0}")]
    TransformLoadError(String),

    #[error("Failed to parse transform: {0}")]
    TransformParseError(String),

    #[error("Transform coefficient {index} is not finite")]
    NonFiniteCoefficient { index: usize },

    #[error("Failed to decode image: {0}")]
    DecodeError(String),

    #[error("Unsupported image format: {0}")]
    UnsupportedFormat(String),

    #[error("Invalid image dimensions: width={0}, height={1}")]
    InvalidDimensions(usize, usize),

    #[error("Reference image has {actual} bands, expected {expected}")]
    BandCountMismatch { expected: usize, actual: usize },

    #[error("Got {actual} channel images, expected {expected}")]
    ChannelCountMismatch { expected: usize, actual: usize },

    #[error("Channel image #{index} has {bands} bands, expected 1")]
    ChannelBandMismatch { index: usize, bands: usize },

    #[error(
        "Channel image #{index} is {width}x{height}, expected {expected_width}x{expected_height}"
    )]
    GeometryMismatch {
        index: usize,
        expected_width: usize,
        expected_height: usize,
        width: usize,
        height: usize,
    },

    #[error("Invalid sample stride: {0}")]
    InvalidStride(usize),

    #[error("Failed to write output file: {0}")]
    OutputWriteError(String),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
}

impl ColorPairsError {
    /// Process exit code reported by the command-line tool.
    ///
    /// Input load failures use -1, broken preconditions on loaded data use -2
    /// and output failures use -3.
    pub fn exit_code(&self) -> i32 {
        match self {
            Self::ReferenceLoadError(_)
            | Self::ChannelLoadError { .. }
            | Self::TransformLoadError(_)
            | Self::TransformParseError(_)
            | Self::NonFiniteCoefficient { .. }
            | Self::DecodeError(_)
            | Self::UnsupportedFormat(_) => -1,
            Self::InvalidDimensions(..)
            | Self::BandCountMismatch { .. }
            | Self::ChannelCountMismatch { .. }
            | Self::ChannelBandMismatch { .. }
            | Self::GeometryMismatch { .. }
            | Self::InvalidStride(_) => -2,
            Self::OutputWriteError(_) | Self::IoError(_) => -3,
        }
    }
}

pub type Result<T> = std::result::Result<T, ColorPairsError>;

#[cfg(test)]
mod tests {
    use super::ColorPairsError;

    #[test]
    fn exit_codes_group_by_failure_kind() {
        let load = ColorPairsError::ReferenceLoadError("base.tif: missing".to_string());
        let parse = ColorPairsError::TransformParseError("expected 6 values".to_string());
        let geometry = ColorPairsError::GeometryMismatch {
            index: 2,
            expected_width: 10,
            expected_height: 10,
            width: 9,
            height: 10,
        };
        let write = ColorPairsError::OutputWriteError("out.csv: denied".to_string());

        assert_eq!(load.exit_code(), -1);
        assert_eq!(parse.exit_code(), -1);
        assert_eq!(geometry.exit_code(), -2);
        assert_eq!(write.exit_code(), -3);
    }

    #[test]
    fn messages_name_the_failing_input() {
        let err = ColorPairsError::ChannelLoadError {
            index: 3,
            path: "h_nir.png".to_string(),
            reason: "no such file".to_string(),
        };
        let msg = err.to_string();
        assert!(msg.contains("#3"));
        assert!(msg.contains("h_nir.png"));
    }
}
