//! Greeting error types.

use thiserror::Error;

/// Errors that can occur while producing a greeting payload.
#[derive(Debug, Error)]
pub enum GreetingError {
    /// The payload could not be encoded as JSON.
    #[error("Encode error: {0}")]
    Encode(#[from] serde_json::Error),
}

/// Convenience type alias for greeting results.
pub type Result<T> = std::result::Result<T, GreetingError>;
