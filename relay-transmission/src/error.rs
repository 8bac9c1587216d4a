//! Error types for transmitters.

use thiserror::Error;

/// Result type alias using [`TransmitError`].
pub type Result<T> = std::result::Result<T, TransmitError>;

/// Errors a sink can report when delivery fails.
#[derive(Error, Debug)]
pub enum TransmitError {
    /// The sink has no live connection.
    #[error("Not connected to {sink}")]
    NotConnected { sink: String },

    /// The payload could not be encoded.
    #[error("Serialization error: {0}")]
    Serialization(String),

    /// The remote end refused the payload.
    #[error("{sink} rejected payload: {message}")]
    Rejected { sink: String, message: String },

    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Generic error with context.
    #[error("{context}: {source}")]
    WithContext {
        context: String,
        #[source]
        source: Box<dyn std::error::Error + Send + Sync>,
    },
}

impl TransmitError {
    /// Create a not-connected error.
    pub fn not_connected(sink: impl Into<String>) -> Self {
        Self::NotConnected { sink: sink.into() }
    }

    /// Create a rejection error.
    pub fn rejected(sink: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Rejected {
            sink: sink.into(),
            message: message.into(),
        }
    }

    /// Wrap an error with context.
    pub fn with_context<E>(context: impl Into<String>, source: E) -> Self
    where
        E: std::error::Error + Send + Sync + 'static,
    {
        Self::WithContext {
            context: context.into(),
            source: Box::new(source),
        }
    }
}

impl From<relay_common::Error> for TransmitError {
    fn from(err: relay_common::Error) -> Self {
        Self::Serialization(err.to_string())
    }
}
