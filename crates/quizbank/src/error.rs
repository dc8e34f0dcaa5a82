//! Error types for the quizbank library.

use std::path::PathBuf;
use thiserror::Error;

/// Main error type for question bank operations.
#[derive(Debug, Error)]
pub enum QuizbankError {
    /// None of the filter sets was given.
    #[error(
        "At least one filter (--keep-categories/--drop-categories/--drop-id-prefixes) is required."
    )]
    NoFilter,

    /// The question bank file does not exist.
    #[error("Question file not found: {}", path.display())]
    NotFound { path: PathBuf },

    /// Error reading or writing the question bank.
    #[error("IO error for '{}': {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The file is not valid JSON.
    #[error("Invalid JSON in '{}': {source}", path.display())]
    Json {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    /// The top-level JSON value is not an array.
    #[error("Expected a JSON array of questions in '{}', found {found}", path.display())]
    NotAList { path: PathBuf, found: &'static str },

    /// An element of the question array is not an object.
    #[error("Question {index} in '{}' is not a JSON object (found {found})", path.display())]
    NotAnObject {
        path: PathBuf,
        index: usize,
        found: &'static str,
    },

    /// Creating or verifying the backup copy failed.
    #[error("Backup failed for '{}': {message}", path.display())]
    Backup { path: PathBuf, message: String },

    /// Serializing the filtered bank failed.
    #[error("JSON serialization error: {0}")]
    Serialize(#[from] serde_json::Error),
}

impl QuizbankError {
    /// Whether this error comes from how the tool was invoked rather than
    /// from the file it was pointed at.
    pub fn is_usage(&self) -> bool {
        matches!(self, QuizbankError::NoFilter)
    }
}

/// Result type alias for quizbank operations.
pub type Result<T> = std::result::Result<T, QuizbankError>;
