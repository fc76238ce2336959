//! Error types for notepad.

use thiserror::Error;

/// Result type alias using notepad's Error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Core error type for notepad operations.
///
/// A missing note is deliberately absent from this enum: the store reports
/// absence as `None` and the service layer decides what that means.
#[derive(Error, Debug)]
pub enum Error {
    /// Serialization/deserialization error
    #[error("Serialization error: {0}")]
    Serialization(String),

    /// Invalid input
    #[error("Invalid input: {0}")]
    InvalidInput(String),
}

impl From<serde_json::Error> for Error {
    fn from(e: serde_json::Error) -> Self {
        Error::Serialization(e.to_string())
    }
}
