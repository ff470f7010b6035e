//! Data loading error types.

use std::path::PathBuf;
use thiserror::Error;

/// Failures that abort the whole startup load. Individual malformed
/// question records are skipped instead and never surface here.
#[derive(Debug, Error)]
pub enum LoadError {
    /// A data file couldn't be read
    #[error("Failed to read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A data file isn't valid JSON
    #[error("Invalid JSON in {document} data: {source}")]
    Json {
        document: &'static str,
        #[source]
        source: serde_json::Error,
    },

    /// The questions document has no `questions` array
    #[error("Invalid questions format: expected a \"questions\" array")]
    InvalidQuestions,
}

/// Result type for data loading
pub type LoadResult<T> = Result<T, LoadError>;
