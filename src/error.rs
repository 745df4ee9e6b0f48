//! Error types for presencemon.

use thiserror::Error;

/// Main error type for the presencemon library.
#[derive(Error, Debug)]
pub enum Error {
    /// IO error (unreadable presence source, bind failure).
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// CSV reader error while scanning the presence source.
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// Configuration error.
    #[error("configuration error: {0}")]
    Config(String),
}

/// Result type alias for presencemon.
pub type Result<T> = std::result::Result<T, Error>;
