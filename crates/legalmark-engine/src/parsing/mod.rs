//! # Legal Document Parsing
//!
//! Line-oriented parsing of the restricted Markdown dialect used by the
//! legal documents (privacy policy, provider terms).
//!
//! ## Parsing Phases
//!
//! 1. **Line Classification** (`classify`): each non-blank line is classified
//!    independently into a `LineClass` using first-match-wins precedence
//! 2. **Block Construction** (`blocks`): each classified line becomes exactly
//!    one typed `Block`, extracting anchor ids and clause numbers
//! 3. **Inline Formatting** (`inline`): paragraph-like payloads are split into
//!    `InlineSpan`s (plain/bold/italic), sanitized before leaving the parser
//!
//! ## Modules
//!
//! - **`classify`**: `classify_line` produces a `LineClass` for each line
//! - **`blocks`**: `Block` enum and `build_block` construction
//! - **`inline`**: `InlineSpan` enum and `format_inline` emphasis scanner
//! - **`contact`**: `is_contact_line` marker detection
//!
//! ## Key Invariants
//!
//! - Blank lines never produce a block
//! - Exactly one block per non-blank source line; no block spans lines
//! - Classification is total: there is no rejected or unparseable state
//! - Contact detection wins over every other classification

pub mod blocks;
pub mod classify;
pub mod contact;
pub mod inline;

pub use blocks::{Block, build_block};
pub use classify::{LineClass, classify_line};
pub use contact::is_contact_line;
pub use inline::{InlineSpan, format_inline};

use crate::sanitize::{Sanitizer, escape_sanitizer};

/// Caller-supplied parameters for a parse run.
///
/// The contact markers come from the localization provider (curated per
/// locale, never guessed here), and the sanitizer is an injected capability
/// so the parser has no ambient dependencies.
pub struct ParseOptions {
    /// Substrings whose presence turns a line into [`Block::Contact`].
    /// Matched case-insensitively. Empty markers are ignored.
    pub contact_markers: Vec<String>,
    /// Applied to every span payload before it leaves the parser.
    pub sanitizer: Sanitizer,
}

impl ParseOptions {
    /// Options with the given contact markers and the default escaping
    /// sanitizer.
    pub fn new(contact_markers: Vec<String>) -> Self {
        Self {
            contact_markers,
            sanitizer: escape_sanitizer(),
        }
    }

    pub fn with_sanitizer(mut self, sanitizer: Sanitizer) -> Self {
        self.sanitizer = sanitizer;
        self
    }
}

impl Default for ParseOptions {
    fn default() -> Self {
        Self::new(vec![])
    }
}

/// Parses a legal document into an ordered sequence of [`Block`]s.
///
/// One block per non-blank line. Never fails: a line that matches no
/// structural rule becomes a `Paragraph`, which is always displayable.
pub fn parse_document(source: &str, options: &ParseOptions) -> Vec<Block> {
    source
        .lines()
        .filter(|line| !line.trim().is_empty())
        .map(|line| build_block(classify_line(line, &options.contact_markers), options))
        .collect()
}
