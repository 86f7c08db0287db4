//! Error types for the quizlay library.

use std::io;
use thiserror::Error;

/// Result type alias for quizlay operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Error types that can occur while laying out or exporting a document.
#[derive(Error, Debug)]
pub enum Error {
    /// I/O error when reading or writing files.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// JSON serialization or deserialization error.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Pagination produced no pages for a document known to contain questions.
    #[error("Layout error: {0}")]
    Layout(String),

    /// Error while rendering pages to an output format.
    #[error("Rendering error: {0}")]
    Render(String),

    /// A saved session snapshot could not be read or migrated.
    #[error("Snapshot error: {0}")]
    Snapshot(String),

    /// No built-in template matches the requested id.
    #[error("Unknown template: {0}")]
    UnknownTemplate(String),

    /// The export was cancelled between stages.
    #[error("Export cancelled")]
    Cancelled,

    /// Generic error with message.
    #[error("{0}")]
    Other(String),
}
