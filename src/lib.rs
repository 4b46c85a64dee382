pub mod color_pairs;
pub mod logger;
