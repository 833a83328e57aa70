//! Parse and validate backend output against the extraction contract

use crate::error::ExtractorError;
use formease_domain::DetailRecord;
use serde_json::{Map, Value};
use tracing::warn;

/// Parse a backend response into a validated record
///
/// The response must be a single JSON object. Each contract key is read as
/// string-or-absent: an absent key becomes the empty string (the contract
/// treats "absent" and "empty" as the same outcome), while a key bound to a
/// non-string value is a schema violation. A non-empty qualitative field
/// outside the four enumerated literals is a schema violation. Unknown
/// extra keys are ignored.
pub fn parse_backend_response(response: &str) -> Result<DetailRecord, ExtractorError> {
    // Backends sometimes wrap JSON in markdown code blocks
    let json_str = extract_json(response)?;

    let json: Value = serde_json::from_str(&json_str)
        .map_err(|e| ExtractorError::SchemaViolation(format!("JSON parse error: {}", e)))?;

    let obj = json
        .as_object()
        .ok_or_else(|| ExtractorError::SchemaViolation("Expected a JSON object".to_string()))?;

    let record = DetailRecord {
        first_name: string_field(obj, "firstName")?,
        surname: string_field(obj, "surname")?,
        address: string_field(obj, "address")?,
        postcode: string_field(obj, "postcode")?,
        email: string_field(obj, "email")?,
        favorite_time_of_day: string_field(obj, "favoriteTimeOfDay")?,
    };

    if let Err(e) = record.validate() {
        warn!("Backend response failed validation: {}", e);
        return Err(ExtractorError::SchemaViolation(e));
    }

    Ok(record)
}

/// Extract JSON from a response, handling markdown code blocks
fn extract_json(response: &str) -> Result<String, ExtractorError> {
    let trimmed = response.trim();

    if trimmed.starts_with("```json") || trimmed.starts_with("```") {
        let lines: Vec<&str> = trimmed.lines().collect();
        if lines.len() < 2 {
            return Err(ExtractorError::SchemaViolation(
                "Empty code block".to_string(),
            ));
        }

        // Skip first line (```json or ```) and last line (```)
        let json_lines = &lines[1..lines.len().saturating_sub(1)];
        Ok(json_lines.join("\n"))
    } else {
        Ok(trimmed.to_string())
    }
}

/// Read a contract key as string-or-absent
fn string_field(obj: &Map<String, Value>, key: &str) -> Result<String, ExtractorError> {
    match obj.get(key) {
        None => Ok(String::new()),
        Some(Value::String(s)) => Ok(s.clone()),
        Some(other) => Err(ExtractorError::SchemaViolation(format!(
            "'{}' must be a string, got {}",
            key, other
        ))),
    }
}
