//! Core Extractor implementation

use crate::config::ExtractorConfig;
use crate::error::ExtractorError;
use crate::parser::parse_backend_response;
use crate::prompt::build_instruction;
use crate::types::{ExtractDetailsInput, ExtractionOutcome};
use formease_domain::traits::ExtractionBackend;
use formease_domain::DetailRecord;
use formease_ingest::EncodedPayload;
use std::sync::Arc;
use tokio::time::timeout;
use tracing::{debug, info};

/// The Extractor converts an encoded document into a schema-conformant
/// partial record
pub struct Extractor<B>
where
    B: ExtractionBackend,
{
    backend: Arc<B>,
    config: ExtractorConfig,
}

impl<B> Extractor<B>
where
    B: ExtractionBackend + Send + Sync + 'static,
    B::Error: std::fmt::Display,
{
    /// Create a new Extractor
    pub fn new(backend: B, config: ExtractorConfig) -> Self {
        Self {
            backend: Arc::new(backend),
            config,
        }
    }

    /// The active configuration
    pub fn config(&self) -> &ExtractorConfig {
        &self.config
    }

    /// Extract personal details from an encoded document
    ///
    /// Submits the fixed extraction contract plus the document to the
    /// backend, with the configured ceiling on the round trip, and validates
    /// the response strictly. Succeeds with a possibly-sparse record or
    /// fails whole - a malformed response never yields partial data.
    pub async fn extract(&self, payload: &EncodedPayload) -> Result<DetailRecord, ExtractorError> {
        let instruction = build_instruction();

        info!(
            "Starting extraction for {} document, {} base64 chars, model '{}'",
            payload.media_type(),
            payload.data().len(),
            self.config.model
        );
        debug!("Instruction length: {} chars", instruction.len());

        let response = timeout(
            self.config.extraction_timeout(),
            self.call_backend(
                instruction,
                payload.media_type().as_mime().to_string(),
                payload.data().to_string(),
            ),
        )
        .await
        .map_err(|_| ExtractorError::Timeout)??;

        debug!("Backend response length: {} chars", response.len());

        let record = parse_backend_response(&response)?;

        match ExtractionOutcome::of(&record) {
            ExtractionOutcome::Found { fields } => {
                info!("Extraction complete: {} field(s) found", fields);
            }
            ExtractionOutcome::Empty => {
                info!("Extraction complete: no fields found");
            }
        }

        Ok(record)
    }

    /// The inbound operation: extract details from a raw data URI
    ///
    /// The payload is parsed and re-validated against the document
    /// allow-list first; a malformed or unsupported URI never reaches the
    /// backend.
    pub async fn extract_details(
        &self,
        input: ExtractDetailsInput,
    ) -> Result<DetailRecord, ExtractorError> {
        let payload = EncodedPayload::parse(&input.file_data_uri)?;
        self.extract(&payload).await
    }

    /// Call the backend
    async fn call_backend(
        &self,
        instruction: String,
        media_type: String,
        document: String,
    ) -> Result<String, ExtractorError> {
        let backend = Arc::clone(&self.backend);

        // Call in a blocking context since ExtractionBackend is not async
        tokio::task::spawn_blocking(move || {
            backend
                .submit(&instruction, &media_type, &document)
                .map_err(|e| ExtractorError::BackendUnavailable(e.to_string()))
        })
        .await
        .map_err(|e| ExtractorError::BackendUnavailable(format!("Task join error: {}", e)))?
    }
}
