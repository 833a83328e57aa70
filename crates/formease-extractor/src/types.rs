//! Request and outcome types for extraction

use formease_domain::DetailRecord;

/// Input to the `extract_details` operation
///
/// The document arrives pre-encoded in the exact form
/// `data:<mediaType>;base64,<base64Data>`.
#[derive(Debug, Clone)]
pub struct ExtractDetailsInput {
    /// The encoded document
    pub file_data_uri: String,
}

/// Classification of a successful extraction
///
/// An extraction that conforms to the schema but finds nothing is a soft
/// outcome, not a failure: the caller should present a "nothing found"
/// message and leave the form entirely untouched.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExtractionOutcome {
    /// At least one field carries a value
    Found {
        /// Number of non-empty fields in the record (1 to 6)
        fields: usize,
    },

    /// Every field came back empty
    Empty,
}

impl ExtractionOutcome {
    /// Classify a validated record
    pub fn of(record: &DetailRecord) -> Self {
        match record.filled_fields() {
            0 => ExtractionOutcome::Empty,
            fields => ExtractionOutcome::Found { fields },
        }
    }
}
