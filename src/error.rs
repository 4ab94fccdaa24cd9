use std::path::PathBuf;

use thiserror::Error;

/// Convenient alias for fallible results returned throughout the crate.
pub type Result<T> = std::result::Result<T, ConsolidateError>;

/// Error type covering the different failure cases that can occur while the
/// tool reads data workbooks, rebuilds the template, or emits the artifact.
#[derive(Debug, Error)]
pub enum ConsolidateError {
    /// Wrapper for IO failures such as reading or writing files.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Raised when JSON serialization of the consolidation report fails.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Raised when a data or template source cannot be parsed as a workbook.
    /// Fatal to the whole run; names the offending source.
    #[error("source '{name}' is not a valid workbook: {reason}")]
    SourceRead { name: String, reason: String },

    /// Raised when the finished output model cannot be serialized.
    #[error("failed to serialize output workbook: {0}")]
    ArtifactWrite(String),

    /// Raised when the template declares the same sheet name twice.
    #[error("duplicate sheet name '{0}' in template")]
    DuplicateSheet(String),

    /// Raised when the user provides a path that does not exist.
    #[error("input file not found: {0}")]
    MissingInput(PathBuf),

    /// Raised when the tracing subscriber fails to initialise.
    #[error("failed to initialise logging: {0}")]
    Logging(String),
}

impl ConsolidateError {
    /// Builds a [`ConsolidateError::SourceRead`] from a source name and any
    /// displayable parse error.
    pub fn source_read(name: impl Into<String>, reason: impl std::fmt::Display) -> Self {
        ConsolidateError::SourceRead {
            name: name.into(),
            reason: reason.to_string(),
        }
    }
}
