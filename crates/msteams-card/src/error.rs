//! Card error types.

use thiserror::Error;

/// Errors raised while encoding or decoding a MessageCard payload.
#[derive(Debug, Error)]
pub enum CardError {
    /// JSON serialization/deserialization error.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// YAML deserialization error.
    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),
}

/// Card Result type alias.
pub type CardResult<T> = Result<T, CardError>;
