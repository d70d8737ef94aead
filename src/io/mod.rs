//! Operator-facing input and output
//!
//! Everything that touches the console or the archive lives here; the tiling
//! core and workspace cleanup only see paths and the types defined below.

/// Zip archive staging into the workspace
pub mod archive;
/// Command-line parsing
pub mod cli;
/// Constants and runtime settings
pub mod configuration;
/// Error type shared by every stage
pub mod error;
/// Bitmap decoding and tile encoding
pub mod image;
/// Diagnostic logging setup
pub mod logging;
/// Tiling progress bar
pub mod progress;
/// Confirmation gates
pub mod prompt;
