//! Error types for PDF object model operations.

use thiserror::Error;

/// Errors that can occur while querying, mutating or decoding PDF objects.
///
/// A missing key or a value of the wrong kind is never an error: typed
/// accessors report both as `None`.
#[derive(Error, Debug)]
pub enum PdfError {
    /// A dictionary entry the caller marked as required is absent or `null`.
    #[error("dict={dict} required entry={key} missing")]
    MissingRequiredEntry { dict: String, key: String },

    /// `increment`/`increment_by` target is absent or not an integer.
    #[error("IncrementBy: unknown key: {0}")]
    UnknownKey(String),

    /// `increment_by` would overflow the stored integer.
    #[error("IncrementBy: integer overflow for key: {0}")]
    IntegerOverflow(String),

    /// A string or hex literal could not be decoded to bytes.
    #[error("Encoding error: {0}")]
    Encoding(String),

    /// JSON interchange failure.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Convenience alias used throughout pdf-object.
pub type Result<T> = std::result::Result<T, PdfError>;
