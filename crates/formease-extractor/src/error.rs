//! Error types for the Extractor

use formease_ingest::IngestError;
use thiserror::Error;

/// Errors that can occur during extraction
#[derive(Error, Debug)]
pub enum ExtractorError {
    /// The backend could not be reached or refused the request
    #[error("Backend unavailable: {0}")]
    BackendUnavailable(String),

    /// The backend call exceeded the configured ceiling
    #[error("Extraction timeout")]
    Timeout,

    /// The backend responded but the output does not conform to the
    /// six-field contract
    #[error("Schema violation: {0}")]
    SchemaViolation(String),

    /// The supplied document payload was rejected before any backend call
    #[error("Invalid document payload: {0}")]
    Payload(String),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),
}

impl From<IngestError> for ExtractorError {
    fn from(e: IngestError) -> Self {
        ExtractorError::Payload(e.to_string())
    }
}
