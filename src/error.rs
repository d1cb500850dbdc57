//! Centralized error handling for heartfetch

use std::io;
use thiserror::Error;

/// Errors raised while probing the system or loading configuration.
///
/// These never reach the user: collectors turn them into fallback lines.
#[derive(Debug, Error)]
pub enum FetchError {
    /// I/O errors (file reading, command execution)
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
    /// Parsing errors (invalid data format)
    #[error("Parse error: {0}")]
    Parse(String),
    /// Configuration errors
    #[error("Config error: {0}")]
    Config(String),
    /// System detection errors
    #[error("Detection error: {0}")]
    Detection(String),
}

/// Type alias for Results in heartfetch
pub type Result<T> = std::result::Result<T, FetchError>;
