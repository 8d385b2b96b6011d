//! Input/output: sources, output files, CLI, configuration and errors

/// Command-line interface
pub mod cli;
/// Layout constants and composer configuration
pub mod configuration;
/// Error taxonomy and result alias
pub mod error;
/// PNG encoding and atomic file output
pub mod output;
/// Terminal progress display
pub mod progress;
/// Image source references and acquisition
pub mod source;
