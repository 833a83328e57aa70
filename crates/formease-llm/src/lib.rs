//! FormEase Backend Provider Layer
//!
//! Pluggable text-understanding backend implementations.
//!
//! # Architecture
//!
//! This crate provides implementations of the `ExtractionBackend` trait from
//! `formease-domain`. It supports multiple backends with a common interface.
//!
//! # Providers
//!
//! - `MockProvider`: Deterministic mock for testing
//! - `GeminiProvider`: Google Generative Language API integration
//!
//! # Examples
//!
//! ```
//! use formease_llm::MockProvider;
//! use formease_domain::traits::ExtractionBackend;
//!
//! let provider = MockProvider::new("{}");
//! let result = provider.submit("instruction", "text/plain", "aGVsbG8=").unwrap();
//! assert_eq!(result, "{}");
//! ```

#![warn(missing_docs)]

pub mod gemini;

use formease_domain::traits::ExtractionBackend;
use std::collections::HashMap;
use std::sync::{Arc, Mutex};
use thiserror::Error;

pub use gemini::GeminiProvider;

/// Errors that can occur during backend operations
#[derive(Error, Debug)]
pub enum LlmError {
    /// Network or API communication error
    #[error("Communication error: {0}")]
    Communication(String),

    /// Invalid response from the backend
    #[error("Invalid response: {0}")]
    InvalidResponse(String),

    /// Rate limit exceeded
    #[error("Rate limit exceeded")]
    RateLimitExceeded,

    /// Model not available
    #[error("Model not available: {0}")]
    ModelNotAvailable(String),

    /// No API key in the environment
    #[error("Missing credentials: {0} is not set")]
    MissingCredentials(&'static str),

    /// Credentials were rejected by the service
    #[error("Credentials rejected: {0}")]
    Unauthorized(String),

    /// Generic error
    #[error("Backend error: {0}")]
    Other(String),
}

/// Mock backend for deterministic testing
///
/// Returns pre-configured responses without making any network calls, keyed
/// by the submitted document payload. Useful for testing the extractor and
/// the pipeline's never-call-the-backend properties (via `call_count`).
///
/// # Examples
///
/// ```
/// use formease_llm::MockProvider;
/// use formease_domain::traits::ExtractionBackend;
///
/// // Simple fixed response
/// let provider = MockProvider::new(r#"{"firstName": "John"}"#);
/// assert!(provider.submit("any instruction", "text/plain", "any document").is_ok());
///
/// // Per-document responses
/// let mut provider = MockProvider::default();
/// provider.add_response("doc1", r#"{"email": "a@x.com"}"#);
/// assert_eq!(
///     provider.submit("i", "text/plain", "doc1").unwrap(),
///     r#"{"email": "a@x.com"}"#
/// );
/// ```
#[derive(Debug, Clone)]
pub struct MockProvider {
    default_response: String,
    responses: Arc<Mutex<HashMap<String, String>>>,
    call_count: Arc<Mutex<usize>>,
}

impl MockProvider {
    /// Create a new MockProvider with a fixed response for all documents
    pub fn new(response: impl Into<String>) -> Self {
        Self {
            default_response: response.into(),
            responses: Arc::new(Mutex::new(HashMap::new())),
            call_count: Arc::new(Mutex::new(0)),
        }
    }

    /// Add a specific response for a given document payload
    pub fn add_response(&mut self, document: impl Into<String>, response: impl Into<String>) {
        self.responses
            .lock()
            .unwrap()
            .insert(document.into(), response.into());
    }

    /// Get the number of times submit was called
    pub fn call_count(&self) -> usize {
        *self.call_count.lock().unwrap()
    }

    /// Reset the call count
    pub fn reset_call_count(&self) {
        *self.call_count.lock().unwrap() = 0;
    }

    /// Configure to return an error for a specific document payload
    pub fn add_error(&mut self, document: impl Into<String>) {
        self.responses
            .lock()
            .unwrap()
            .insert(document.into(), "ERROR".to_string());
    }
}

impl Default for MockProvider {
    fn default() -> Self {
        Self::new("{}")
    }
}

impl ExtractionBackend for MockProvider {
    type Error = LlmError;

    fn submit(
        &self,
        _instruction: &str,
        _media_type: &str,
        document_b64: &str,
    ) -> Result<String, Self::Error> {
        // Increment call count
        *self.call_count.lock().unwrap() += 1;

        // Check if we have a specific response for this document
        let responses = self.responses.lock().unwrap();
        if let Some(response) = responses.get(document_b64) {
            if response == "ERROR" {
                return Err(LlmError::Communication("Mock error".to_string()));
            }
            return Ok(response.clone());
        }

        // Return default response
        Ok(self.default_response.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mock_provider_default_response() {
        let provider = MockProvider::new("Test response");
        let result = provider.submit("instruction", "text/plain", "doc");
        assert!(result.is_ok());
        assert_eq!(result.unwrap(), "Test response");
    }

    #[test]
    fn test_mock_provider_specific_responses() {
        let mut provider = MockProvider::default();
        provider.add_response("doc1", "response1");
        provider.add_response("doc2", "response2");

        assert_eq!(provider.submit("i", "text/plain", "doc1").unwrap(), "response1");
        assert_eq!(provider.submit("i", "text/plain", "doc2").unwrap(), "response2");
        assert_eq!(provider.submit("i", "text/plain", "unknown").unwrap(), "{}");
    }

    #[test]
    fn test_mock_provider_call_count() {
        let provider = MockProvider::new("test");

        assert_eq!(provider.call_count(), 0);

        provider.submit("i", "text/plain", "doc1").unwrap();
        assert_eq!(provider.call_count(), 1);

        provider.submit("i", "application/pdf", "doc2").unwrap();
        assert_eq!(provider.call_count(), 2);

        provider.reset_call_count();
        assert_eq!(provider.call_count(), 0);
    }

    #[test]
    fn test_mock_provider_error() {
        let mut provider = MockProvider::default();
        provider.add_error("bad document");

        let result = provider.submit("i", "text/plain", "bad document");
        assert!(result.is_err());
        assert!(matches!(result.unwrap_err(), LlmError::Communication(_)));
    }

    #[test]
    fn test_mock_provider_clone_shares_call_count() {
        let provider1 = MockProvider::new("test");
        let provider2 = provider1.clone();

        provider1.submit("i", "text/plain", "doc").unwrap();

        assert_eq!(provider1.call_count(), 1);
        assert_eq!(provider2.call_count(), 1);
    }
}
