//! Schema module - Configuration and sequence generation for the visualizer.

mod config;
mod sequence;

pub use config::*;
pub use sequence::*;
