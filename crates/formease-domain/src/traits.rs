//! Trait definitions for external interactions
//!
//! These traits define the boundaries between domain logic and infrastructure.
//! Infrastructure implementations live in other crates.

/// Trait for the text-understanding backend
///
/// The backend is an opaque, non-deterministic capability: submit an
/// instruction plus an encoded document, receive text that should conform to
/// the extraction contract. Validation of that text is not the backend's
/// job - the extractor owns the contract.
///
/// Implemented by the infrastructure layer (formease-llm).
pub trait ExtractionBackend {
    /// Error type for backend operations
    type Error;

    /// Submit an instruction and a base64-encoded document, receive the
    /// backend's raw textual response
    fn submit(
        &self,
        instruction: &str,
        media_type: &str,
        document_b64: &str,
    ) -> Result<String, Self::Error>;
}
