use std::sync::OnceLock;

use regex::Regex;
use serde::{Deserialize, Serialize};

use super::{
    ParseOptions,
    classify::LineClass,
    inline::{InlineSpan, format_inline},
};

/// One typed unit of document content, renderer-agnostic.
///
/// Produced in source order, one per non-blank line. `Contact` carries no
/// text from the document: its visual content comes entirely from a
/// localized [`crate::templates::ContactTemplate`] supplied by the caller.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Block {
    Heading1 {
        text: String,
    },
    Heading2 {
        /// `section-<n>` when the heading starts with an integer and a dot,
        /// e.g. `## 2. Rights` gets `section-2`. Used for in-page anchors.
        anchor_id: Option<String>,
        text: String,
    },
    Heading3 {
        text: String,
    },
    Divider,
    NumberedClause {
        /// The literal captured prefix, e.g. `2.1.` or `2.1`.
        number: String,
        text: String,
    },
    Contact,
    /// A whole-line bold run, rendered as a highlighted card rather than a
    /// paragraph with one bold span.
    BoldCallout {
        spans: Vec<InlineSpan>,
    },
    Paragraph {
        spans: Vec<InlineSpan>,
    },
}

/// Leading section number in a level-2 heading, e.g. `2. Rights`.
fn anchor_regex() -> &'static Regex {
    static ANCHOR_REGEX: OnceLock<Regex> = OnceLock::new();
    ANCHOR_REGEX.get_or_init(|| Regex::new(r"^(\d+)\.\s*(.*)$").expect("Invalid anchor regex"))
}

/// Builds the concrete [`Block`] for one classified line.
///
/// Paragraph and bold-callout payloads go through the inline formatter; a
/// callout's inner text may itself carry further emphasis. Heading text has
/// stray `**` markers stripped rather than formatted.
pub fn build_block(class: LineClass<'_>, options: &ParseOptions) -> Block {
    match class {
        LineClass::Divider => Block::Divider,
        LineClass::Heading1 { payload } => Block::Heading1 {
            text: strip_bold_markers(payload),
        },
        LineClass::Heading2 { payload } => build_heading2(payload),
        LineClass::Heading3 { payload } => Block::Heading3 {
            text: strip_bold_markers(payload),
        },
        LineClass::Clause { number, text } => Block::NumberedClause {
            number: number.to_string(),
            text: text.to_string(),
        },
        LineClass::Contact => Block::Contact,
        LineClass::BoldCallout { inner } => Block::BoldCallout {
            spans: format_inline(inner, &options.sanitizer),
        },
        LineClass::Paragraph { text } => Block::Paragraph {
            spans: format_inline(text, &options.sanitizer),
        },
    }
}

fn build_heading2(payload: &str) -> Block {
    match anchor_regex().captures(payload) {
        Some(caps) => {
            let number = caps.get(1).expect("section number group").as_str();
            let title = caps.get(2).expect("section title group").as_str();
            Block::Heading2 {
                anchor_id: Some(format!("section-{number}")),
                text: strip_bold_markers(title),
            }
        }
        None => Block::Heading2 {
            anchor_id: None,
            text: strip_bold_markers(payload),
        },
    }
}

/// Headings display their text verbatim, so leftover `**` markers are
/// removed instead of being turned into spans.
fn strip_bold_markers(text: &str) -> String {
    text.replace("**", "")
}
