//! FormEase Extractor
//!
//! Converts an uploaded document into a schema-conformant partial record of
//! personal details using a text-understanding backend.
//!
//! # Overview
//!
//! The Extractor is the only component of the pipeline with real algorithmic
//! content. It submits a fixed extraction contract plus the encoded document
//! to the backend, validates the response strictly against the six-field
//! schema, and returns a partial record. Extraction either fully succeeds
//! (possibly with many fields empty) or fully fails - no partial data ever
//! escapes a failed or malformed response.
//!
//! # Architecture
//!
//! ```text
//! EncodedPayload → Extractor → Backend → DetailRecord → merge → FormState
//! ```
//!
//! # Key Features
//!
//! - **Fixed Contract**: One instruction enumerating precisely what each of
//!   the six fields means, including the postcode-exclusion and
//!   time-of-day-inference rules
//! - **Strict Validation**: A response missing the contract's shape is a
//!   schema violation, not partial data
//! - **Narrow Backend Seam**: The backend is an opaque capability behind a
//!   single trait, so the contract, validation, and merge logic are fully
//!   unit-testable with a substitutable fake
//! - **No Internal Retries**: Retry policy belongs to the caller
//!
//! # Example Usage
//!
//! ```no_run
//! use formease_extractor::{Extractor, ExtractorConfig};
//! use formease_ingest::ingest_file;
//! use formease_llm::MockProvider;
//! use formease_domain::{merge, FormState};
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! // Setup
//! let backend = MockProvider::new("{}");
//! let extractor = Extractor::new(backend, ExtractorConfig::default());
//!
//! // Ingest and extract
//! let payload = ingest_file("details.txt")?;
//! let record = extractor.extract(&payload).await?;
//!
//! // Merge into a caller-owned form
//! let mut form = FormState::default();
//! let fields_filled = merge(&record, &mut form);
//!
//! println!("{} field(s) pre-filled", fields_filled);
//! # Ok(())
//! # }
//! ```

#![warn(missing_docs)]

mod config;
mod error;
mod extractor;
mod parser;
mod prompt;
mod types;


pub use config::ExtractorConfig;
pub use error::ExtractorError;
pub use extractor::Extractor;
pub use prompt::build_instruction;
pub use types::{ExtractDetailsInput, ExtractionOutcome};
