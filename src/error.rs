//! Error types for tunebook
//!
//! One error enum for the whole crate, using thiserror for clear error
//! propagation. A resolver that returns one of these surfaces it to the
//! caller as a per-request failure; nothing here is process-fatal.

use thiserror::Error;

/// Main error type for tunebook
#[derive(Error, Debug)]
pub enum Error {
    /// Database connection or statement errors
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    /// File I/O errors (store file and its parent directory)
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Invalid request parameter
    #[error("Invalid input: {0}")]
    InvalidInput(String),
}

/// Convenience Result type using the tunebook Error
pub type Result<T> = std::result::Result<T, Error>;
