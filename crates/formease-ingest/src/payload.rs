//! Self-describing encoded document payload

use crate::error::IngestError;
use base64::{engine::general_purpose::STANDARD as BASE64, Engine as _};
use formease_domain::MediaType;

/// A document encoded as a `data:<mediaType>;base64,<data>` payload
///
/// Combines the media type and a reversible byte-to-text encoding of the
/// document content in a single string. Decoding reproduces the original
/// bytes exactly. The payload is owned solely by the extraction call and is
/// never persisted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EncodedPayload {
    media_type: MediaType,
    data: String,
}

impl EncodedPayload {
    /// Encode raw document bytes under the given media type
    pub fn from_bytes(media_type: MediaType, bytes: &[u8]) -> Self {
        Self {
            media_type,
            data: BASE64.encode(bytes),
        }
    }

    /// Parse a data URI of the exact form `data:<mediaType>;base64,<data>`
    ///
    /// The media type must be on the document allow-list and the body must
    /// be valid standard base64. Anything else is rejected here, before any
    /// backend call.
    pub fn parse(uri: &str) -> Result<Self, IngestError> {
        let rest = uri
            .strip_prefix("data:")
            .ok_or_else(|| IngestError::MalformedPayload("missing 'data:' prefix".to_string()))?;

        let (tag, data) = rest.split_once(',').ok_or_else(|| {
            IngestError::MalformedPayload("missing ',' separator".to_string())
        })?;

        let mime = tag.strip_suffix(";base64").ok_or_else(|| {
            IngestError::MalformedPayload(format!("tag '{}' is not base64-encoded", tag))
        })?;

        let media_type = MediaType::from_mime(mime)
            .ok_or_else(|| IngestError::UnsupportedType(mime.to_string()))?;

        // Reject bodies that could not have come from the encoder
        BASE64
            .decode(data)
            .map_err(|e| IngestError::MalformedPayload(format!("invalid base64 body: {}", e)))?;

        Ok(Self {
            media_type,
            data: data.to_string(),
        })
    }

    /// The document's media type
    pub fn media_type(&self) -> MediaType {
        self.media_type
    }

    /// The base64 body, without the data-URI tag
    pub fn data(&self) -> &str {
        &self.data
    }

    /// Render the full data URI
    pub fn as_uri(&self) -> String {
        format!("data:{};base64,{}", self.media_type.as_mime(), self.data)
    }

    /// Decode back to the original document bytes
    pub fn decode(&self) -> Result<Vec<u8>, IngestError> {
        BASE64
            .decode(&self.data)
            .map_err(|e| IngestError::MalformedPayload(format!("invalid base64 body: {}", e)))
    }
}

impl std::fmt::Display for EncodedPayload {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.as_uri())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_uri_shape() {
        let payload = EncodedPayload::from_bytes(MediaType::PlainText, b"hello");
        assert_eq!(payload.as_uri(), "data:text/plain;base64,aGVsbG8=");
    }

    #[test]
    fn test_round_trip_bytes() {
        let bytes = b"%PDF-1.4 fake pdf content \x00\x01\x02";
        let payload = EncodedPayload::from_bytes(MediaType::Pdf, bytes);
        assert_eq!(payload.decode().unwrap(), bytes);
    }

    #[test]
    fn test_parse_round_trip() {
        let payload = EncodedPayload::from_bytes(MediaType::PlainText, b"some document text");
        let parsed = EncodedPayload::parse(&payload.as_uri()).unwrap();
        assert_eq!(parsed, payload);
        assert_eq!(parsed.media_type(), MediaType::PlainText);
    }

    #[test]
    fn test_parse_rejects_missing_prefix() {
        let result = EncodedPayload::parse("text/plain;base64,aGVsbG8=");
        assert!(matches!(result, Err(IngestError::MalformedPayload(_))));
    }

    #[test]
    fn test_parse_rejects_non_base64_tag() {
        let result = EncodedPayload::parse("data:text/plain,hello");
        assert!(matches!(result, Err(IngestError::MalformedPayload(_))));
    }

    #[test]
    fn test_parse_rejects_off_list_media_type() {
        let result = EncodedPayload::parse("data:image/png;base64,aGVsbG8=");
        assert!(matches!(result, Err(IngestError::UnsupportedType(t)) if t == "image/png"));
    }

    #[test]
    fn test_parse_rejects_invalid_base64_body() {
        let result = EncodedPayload::parse("data:text/plain;base64,not base64!!");
        assert!(matches!(result, Err(IngestError::MalformedPayload(_))));
    }
}

#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        /// Property: decoding the payload produced for bytes B yields exactly B
        #[test]
        fn test_encode_decode_round_trip(bytes in proptest::collection::vec(any::<u8>(), 0..2048)) {
            let payload = EncodedPayload::from_bytes(MediaType::Pdf, &bytes);
            prop_assert_eq!(payload.decode().unwrap(), bytes);
        }

        /// Property: rendering then parsing reproduces the payload
        #[test]
        fn test_uri_round_trip(bytes in proptest::collection::vec(any::<u8>(), 0..2048)) {
            let payload = EncodedPayload::from_bytes(MediaType::PlainText, &bytes);
            let parsed = EncodedPayload::parse(&payload.as_uri()).unwrap();
            prop_assert_eq!(parsed, payload);
        }
    }
}
