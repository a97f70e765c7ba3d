//! CLI command implementations.
//!
//! - `generate` - Generate a tiling from the library defaults
//! - `logo` - Generate the black-outlined white logo tiling
//! - `stats` - Print tile counts per generation as JSON

pub mod common;
pub mod generate;
pub mod raster;
pub mod stats;

pub use generate::{cmd_generate, cmd_logo};
pub use stats::cmd_stats;
