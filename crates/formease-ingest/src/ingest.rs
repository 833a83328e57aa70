//! Document validation and encoding

use crate::error::IngestError;
use crate::payload::EncodedPayload;
use formease_domain::MediaType;
use std::path::Path;
use tracing::{debug, warn};

/// Maximum accepted document size: 5 MiB
pub const MAX_DOCUMENT_BYTES: u64 = 5 * 1024 * 1024;

/// An uploaded document awaiting ingestion
///
/// Created at selection time, consumed once by the Ingestor, discarded
/// after encoding.
#[derive(Debug, Clone)]
pub struct UploadedDocument {
    /// Raw document content
    pub bytes: Vec<u8>,

    /// Declared media type
    pub media_type: MediaType,
}

impl UploadedDocument {
    /// Create a document from raw bytes and a declared media type
    pub fn new(bytes: Vec<u8>, media_type: MediaType) -> Self {
        Self { bytes, media_type }
    }
}

/// Validate and encode an uploaded document
///
/// The media type is already on the allow-list by construction
/// (`MediaType` cannot hold anything else), so the only remaining check is
/// the size ceiling. On success the content is encoded once and the
/// document is consumed.
pub fn encode_document(document: UploadedDocument) -> Result<EncodedPayload, IngestError> {
    let len = document.bytes.len() as u64;
    if len > MAX_DOCUMENT_BYTES {
        warn!(
            "Rejecting document: {} bytes exceeds the {} byte ceiling",
            len, MAX_DOCUMENT_BYTES
        );
        return Err(IngestError::TooLarge(len, MAX_DOCUMENT_BYTES));
    }

    let payload = EncodedPayload::from_bytes(document.media_type, &document.bytes);
    debug!(
        "Encoded {} document: {} bytes -> {} base64 chars",
        document.media_type,
        len,
        payload.data().len()
    );
    Ok(payload)
}

/// Ingest a document from the filesystem
///
/// The media type is declared by file extension, matching the document
/// picker's accepted extensions (`.pdf`, `.txt`). Validation order: media
/// type first, then size, then the read.
pub fn ingest_file(path: impl AsRef<Path>) -> Result<EncodedPayload, IngestError> {
    let path = path.as_ref();

    let media_type = path
        .extension()
        .and_then(|ext| ext.to_str())
        .and_then(MediaType::from_extension)
        .ok_or_else(|| {
            let declared = path
                .extension()
                .and_then(|ext| ext.to_str())
                .unwrap_or("(none)")
                .to_string();
            warn!("Rejecting document '{}': unsupported extension", path.display());
            IngestError::UnsupportedType(declared)
        })?;

    let len = std::fs::metadata(path)?.len();
    if len > MAX_DOCUMENT_BYTES {
        warn!(
            "Rejecting document '{}': {} bytes exceeds the {} byte ceiling",
            path.display(),
            len,
            MAX_DOCUMENT_BYTES
        );
        return Err(IngestError::TooLarge(len, MAX_DOCUMENT_BYTES));
    }

    let bytes = std::fs::read(path)?;
    encode_document(UploadedDocument::new(bytes, media_type))
}
