//! Error types for fixture loading.

use std::path::PathBuf;

use thiserror::Error;

/// Errors that can occur while loading fixtures.
#[derive(Debug, Error)]
pub enum FixtureError {
    #[error("Fixture not found: {0}")]
    NotFound(String),

    #[error("Failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Generation failed for fixture {name}: {source}")]
    Generate {
        name: String,
        #[source]
        source: dsfr_tokens::EmitError,
    },
}

impl FixtureError {
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }
}

/// Result type for fixture operations.
pub type FixtureResult<T> = Result<T, FixtureError>;
