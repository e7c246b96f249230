//! Error types for the docmind-core library.

use thiserror::Error;

/// Main error type for the docmind library.
///
/// The extraction core itself is total: extractors return `None` or an
/// empty list when nothing matches and never fail. Errors exist only at
/// the boundaries (I/O, configuration, input that is not usable text).
#[derive(Error, Debug)]
pub enum DocmindError {
    /// Document extraction error.
    #[error("extraction error: {0}")]
    Extraction(#[from] ExtractionError),

    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Configuration error.
    #[error("configuration error: {0}")]
    Config(String),
}

/// Errors related to document field extraction.
#[derive(Error, Debug)]
pub enum ExtractionError {
    /// The input is not usable text (e.g. a transcript file that is not
    /// valid UTF-8). Malformed but valid text never produces this; it
    /// degrades to empty results instead.
    #[error("invalid input: {0}")]
    InvalidInput(String),
}

/// Result type for the docmind library.
pub type Result<T> = std::result::Result<T, DocmindError>;
