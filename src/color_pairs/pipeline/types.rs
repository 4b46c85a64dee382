//! Pipeline input types

use std::fmt;
use std::path::PathBuf;

use crate::color_pairs::raster::Raster;
use crate::color_pairs::transform::AffineTransform;

/// Semantic role of each HRSC channel, in command-line order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChannelRole {
    Red,
    Green,
    Blue,
    Nir,
    Nadir,
}

impl ChannelRole {
    pub const ALL: [ChannelRole; 5] = [
        ChannelRole::Red,
        ChannelRole::Green,
        ChannelRole::Blue,
        ChannelRole::Nir,
        ChannelRole::Nadir,
    ];

    /// Role of the channel at `index`, if the standard five-channel layout applies.
    pub fn from_index(index: usize) -> Option<Self> {
        Self::ALL.get(index).copied()
    }
}

impl fmt::Display for ChannelRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ChannelRole::Red => "red",
            ChannelRole::Green => "green",
            ChannelRole::Blue => "blue",
            ChannelRole::Nir => "nir",
            ChannelRole::Nadir => "nadir",
        };
        f.write_str(name)
    }
}

/// Files making up one extraction run.
#[derive(Debug, Clone)]
pub struct InputPaths {
    pub reference: PathBuf,
    pub channels: Vec<PathBuf>,
    pub transform: PathBuf,
}

/// Decoded inputs, read-only for the rest of the run.
#[derive(Debug, Clone)]
pub struct LoadedInputs {
    pub reference: Raster,
    pub channels: Vec<Raster>,
    pub transform: AffineTransform,
}
