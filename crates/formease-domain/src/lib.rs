//! FormEase Domain Layer
//!
//! This crate contains the core business logic and domain model for the
//! FormEase extraction pipeline. It has ZERO external dependencies and
//! defines the fundamental concepts, value objects, and trait interfaces
//! that all other layers depend upon.
//!
//! ## Key Concepts
//!
//! - **DetailRecord**: The six-field extraction contract - a partial record
//!   of personal details where the empty string means "not found"
//! - **TimeOfDay**: The four-value enumeration backing the one inferential
//!   field (a qualitative preference derived from free-text context)
//! - **MediaType**: The document allow-list (PDF and plain text)
//! - **FormState**: The caller-owned form the Reconciler merges into
//! - **Reconciler**: Selective merge of extracted values - non-empty values
//!   overwrite, empty values never do
//!
//! ## Architecture
//!
//! This crate follows Clean Architecture:
//! - No external crate dependencies
//! - Pure business logic only
//! - Infrastructure implementations live in other crates
//! - Trait definitions for all external interactions

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod form;
pub mod media;
pub mod merge;
pub mod record;
pub mod timeofday;
pub mod traits;

// Re-exports for convenience
pub use form::FormState;
pub use media::MediaType;
pub use merge::merge;
pub use record::DetailRecord;
pub use timeofday::TimeOfDay;
