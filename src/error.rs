//! Error types for the stay-dates library
//!
//! Label and price parsing never fail with an error; they degrade to `None`.
//! These variants cover the parts that can genuinely fail.

use thiserror::Error;

/// Result type alias using our Error type
pub type Result<T> = std::result::Result<T, Error>;

/// Main error type for the stay-dates library
#[derive(Error, Debug)]
pub enum Error {
    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Payload serialization error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// An explicitly supplied date that must be valid was not
    #[error("Invalid date: {0}")]
    InvalidDate(String),
}
