pub mod parsing;
pub mod sanitize;
pub mod source;
pub mod templates;

// Re-export key types for easier usage
pub use parsing::{Block, InlineSpan, ParseOptions, parse_document};
pub use sanitize::{Sanitizer, escape_sanitizer};
pub use source::{DocumentSource, SourceError, document_from_bytes, load_with_fallback};
pub use templates::ContactTemplate;
