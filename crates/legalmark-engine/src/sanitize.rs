//! Sanitization seam for inline span payloads.
//!
//! Document text may come from an external content store that is not fully
//! trusted, so every payload is neutralized before a renderer sees it. The
//! sanitizer is injected through [`crate::ParseOptions`] rather than imported
//! ambiently, which keeps the parser testable with a pass-through stub.
//!
//! Emphasis never survives as markup inside a payload: the formatter lifts
//! `**`/`*` runs into typed spans first, so anything markup-shaped left in a
//! payload is suspect and gets escaped wholesale. A sanitizer must never
//! fail; worst case it returns escaped text, so a malformed fragment cannot
//! blank out a whole legal document.

/// A pure, reentrant payload transformer. Safe to share across concurrent
/// parse calls.
pub type Sanitizer = Box<dyn Fn(&str) -> String + Send + Sync>;

/// The default sanitizer: HTML-escapes `&`, `<` and `>` so any embedded
/// markup renders as inert text.
pub fn escape_sanitizer() -> Sanitizer {
    Box::new(|payload| html_escape::encode_text(payload).into_owned())
}
