//! Input/output: command line, constants, errors and exports

/// Command-line arguments and batch runner
pub mod cli;
/// Constants for dimensions, rendering and output
pub mod configuration;
/// Error type shared across the crate
pub mod error;
/// PNG rendering and export
pub mod image;
/// Progress bars for batch generation
pub mod progress;
/// Construction capture and GIF export
pub mod visualization;
