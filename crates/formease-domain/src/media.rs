//! MediaType module - the document allow-list

/// Media type of an uploaded document
///
/// Only PDF and plain text are accepted. Anything else is rejected by the
/// Ingestor before any backend call is made.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MediaType {
    /// A PDF document ("application/pdf")
    Pdf,

    /// A plain-text document ("text/plain")
    PlainText,
}

impl MediaType {
    /// Get the MIME type string for this media type
    pub fn as_mime(&self) -> &'static str {
        match self {
            MediaType::Pdf => "application/pdf",
            MediaType::PlainText => "text/plain",
        }
    }

    /// Parse a MIME type string
    pub fn from_mime(mime: &str) -> Option<Self> {
        match mime {
            "application/pdf" => Some(MediaType::Pdf),
            "text/plain" => Some(MediaType::PlainText),
            _ => None,
        }
    }

    /// Infer the media type from a file extension
    ///
    /// Mirrors the document picker's accepted extensions: `.pdf` and `.txt`.
    /// The comparison is case-insensitive ("PDF" and "pdf" both match).
    pub fn from_extension(ext: &str) -> Option<Self> {
        match ext.to_ascii_lowercase().as_str() {
            "pdf" => Some(MediaType::Pdf),
            "txt" => Some(MediaType::PlainText),
            _ => None,
        }
    }
}

impl std::fmt::Display for MediaType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_mime())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mime_round_trip() {
        assert_eq!(MediaType::from_mime("application/pdf"), Some(MediaType::Pdf));
        assert_eq!(MediaType::from_mime("text/plain"), Some(MediaType::PlainText));
        assert_eq!(MediaType::Pdf.as_mime(), "application/pdf");
        assert_eq!(MediaType::PlainText.as_mime(), "text/plain");
    }

    #[test]
    fn test_from_mime_rejects_off_list_types() {
        assert_eq!(MediaType::from_mime("image/png"), None);
        assert_eq!(MediaType::from_mime("application/msword"), None);
        assert_eq!(MediaType::from_mime("text/html"), None);
        assert_eq!(MediaType::from_mime(""), None);
    }

    #[test]
    fn test_from_extension() {
        assert_eq!(MediaType::from_extension("pdf"), Some(MediaType::Pdf));
        assert_eq!(MediaType::from_extension("PDF"), Some(MediaType::Pdf));
        assert_eq!(MediaType::from_extension("txt"), Some(MediaType::PlainText));
        assert_eq!(MediaType::from_extension("docx"), None);
        assert_eq!(MediaType::from_extension(""), None);
    }
}
