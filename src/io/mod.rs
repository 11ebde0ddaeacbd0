//! Input/output operations, configuration and error handling

/// Command-line parsing and file orchestration
pub mod cli;
/// Constants and defaults
pub mod configuration;
/// Error types
pub mod error;
/// Image decoding and encoding
pub mod image;
/// Terminal progress display
pub mod progress;
