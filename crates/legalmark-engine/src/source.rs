//! Document source boundary.
//!
//! The parser itself does no I/O; pages obtain document text here. A remote
//! content store is asked for the latest active version of a document in a
//! locale, and when it has nothing (or fails) an embedded per-locale
//! fallback string is used instead, so a legal page always renders something
//! rather than failing outright. The parser is indifferent to which source
//! produced the text.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum SourceError {
    #[error("content store unavailable: {0}")]
    Unavailable(String),
    #[error("malformed stored document: {0}")]
    Malformed(String),
}

/// A store of versioned legal documents, keyed by document type and locale.
pub trait DocumentSource {
    /// The latest active document of `document_type` for `locale`, or `None`
    /// when the store holds no active version.
    fn fetch_latest_active(
        &self,
        document_type: &str,
        locale: &str,
    ) -> Result<Option<String>, SourceError>;
}

/// Fetches a document, falling back to embedded text when the store has no
/// active version or errors. The fallback path is the normal path for new
/// locales, not an exceptional one.
pub fn load_with_fallback(
    source: &dyn DocumentSource,
    document_type: &str,
    locale: &str,
    fallback: &str,
) -> String {
    match source.fetch_latest_active(document_type, locale) {
        Ok(Some(content)) => content,
        Ok(None) | Err(_) => fallback.to_string(),
    }
}

/// Best-effort decode of stored document bytes.
///
/// Undecodable sequences become replacement characters so the document still
/// renders, degraded, instead of the page failing.
pub fn document_from_bytes(bytes: &[u8]) -> String {
    String::from_utf8_lossy(bytes).into_owned()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    struct MapSource {
        documents: HashMap<(String, String), String>,
        fail: bool,
    }

    impl MapSource {
        fn with(document_type: &str, locale: &str, content: &str) -> Self {
            let mut documents = HashMap::new();
            documents.insert(
                (document_type.to_string(), locale.to_string()),
                content.to_string(),
            );
            Self {
                documents,
                fail: false,
            }
        }

        fn failing() -> Self {
            Self {
                documents: HashMap::new(),
                fail: true,
            }
        }
    }

    impl DocumentSource for MapSource {
        fn fetch_latest_active(
            &self,
            document_type: &str,
            locale: &str,
        ) -> Result<Option<String>, SourceError> {
            if self.fail {
                return Err(SourceError::Unavailable("store offline".into()));
            }
            Ok(self
                .documents
                .get(&(document_type.to_string(), locale.to_string()))
                .cloned())
        }
    }

    #[test]
    fn store_content_wins_over_fallback() {
        let source = MapSource::with("privacy_policy", "fr", "# Politique");
        let text = load_with_fallback(&source, "privacy_policy", "fr", "# Fallback");
        assert_eq!(text, "# Politique");
    }

    #[test]
    fn missing_locale_uses_fallback() {
        let source = MapSource::with("privacy_policy", "fr", "# Politique");
        let text = load_with_fallback(&source, "privacy_policy", "de", "# Datenschutz");
        assert_eq!(text, "# Datenschutz");
    }

    #[test]
    fn store_failure_uses_fallback() {
        let source = MapSource::failing();
        let text = load_with_fallback(&source, "privacy_policy", "en", "# Privacy");
        assert_eq!(text, "# Privacy");
    }

    #[test]
    fn undecodable_bytes_become_replacement_characters() {
        let text = document_from_bytes(b"ok \xff\xfe then");
        assert_eq!(text, "ok \u{FFFD}\u{FFFD} then");
    }
}
