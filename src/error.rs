//! Error types for qrng-sim

use thiserror::Error;

/// Main error type for qrng-sim operations
#[derive(Error, Debug)]
pub enum Error {
    /// Rejected while constructing a generation or tester configuration
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    /// Problems with the on-disk config file
    #[error("Configuration error: {0}")]
    Config(String),

    /// Bit generation could not complete
    #[error("QRNG generation failed: {0}")]
    Generation(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result type alias for qrng-sim operations
pub type Result<T> = std::result::Result<T, Error>;
