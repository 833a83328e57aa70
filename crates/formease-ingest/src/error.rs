//! Error types for the Ingestor

use thiserror::Error;

/// Errors that can occur during document ingestion
#[derive(Error, Debug)]
pub enum IngestError {
    /// Declared media type is outside the allow-list
    #[error("Unsupported document type: {0} (expected application/pdf or text/plain)")]
    UnsupportedType(String),

    /// Document exceeds the size ceiling
    #[error("Document too large: {0} bytes (max: {1})")]
    TooLarge(u64, u64),

    /// File could not be read
    #[error("Failed to read document: {0}")]
    Io(#[from] std::io::Error),

    /// A payload string is not a well-formed data URI
    #[error("Malformed document payload: {0}")]
    MalformedPayload(String),
}
