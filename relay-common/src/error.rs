use thiserror::Error;

/// Common error type for relay components.
#[derive(Debug, Error)]
pub enum Error {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("JSON serialization error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result type alias using the relay's Error.
pub type Result<T> = std::result::Result<T, Error>;
