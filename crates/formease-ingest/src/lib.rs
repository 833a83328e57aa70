//! FormEase Document Ingestor
//!
//! Validates an uploaded document and converts it into a self-describing
//! encoded payload for the extractor.
//!
//! # Overview
//!
//! The Ingestor is the entry gate of the extraction pipeline. It accepts a
//! file (or in-memory bytes with a declared media type), enforces the
//! document allow-list (PDF, plain text) and the 5 MiB size ceiling, and
//! produces a `data:<mediaType>;base64,<data>` payload. A rejected document
//! never reaches the extractor.
//!
//! # Architecture
//!
//! ```text
//! File → Ingestor → EncodedPayload → Extractor
//! ```
//!
//! Encoding as a single self-describing string lets the backend treat
//! documents uniformly regardless of original transport, and keeps the
//! extraction contract to a single scalar value.

#![warn(missing_docs)]

mod error;
mod ingest;
mod payload;

pub use error::IngestError;
pub use ingest::{encode_document, ingest_file, UploadedDocument, MAX_DOCUMENT_BYTES};
pub use payload::EncodedPayload;
