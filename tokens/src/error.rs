//! Error types for token generation.

use thiserror::Error;

/// Errors that can occur while emitting generated source.
#[derive(Debug, Error)]
pub enum EmitError {
    /// The table could not be serialized.
    #[error("Failed to serialize {name}: {source}")]
    Serialize {
        name: String,
        #[source]
        source: serde_json::Error,
    },
}

/// Result type for emit operations.
pub type EmitResult<T> = Result<T, EmitError>;
