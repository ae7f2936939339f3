use std::sync::OnceLock;

use regex::Regex;

use super::contact::is_contact_line;

/// Classification of a single non-blank line.
///
/// This is phase 1 of parsing: each line is classified independently, with no
/// reference to surrounding lines. Payloads borrow from the source line; the
/// block builder owns the copies it keeps.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LineClass<'a> {
    /// The trimmed line is exactly `---`.
    Divider,
    /// Line starts with `# `. Payload is the remainder of the line.
    Heading1 { payload: &'a str },
    /// Line starts with `## `. Payload is the remainder, trimmed.
    Heading2 { payload: &'a str },
    /// Line starts with `### `. Payload is the remainder of the line.
    Heading3 { payload: &'a str },
    /// Line matches the clause pattern, e.g. `2.1. Right to access`.
    Clause { number: &'a str, text: &'a str },
    /// Line contains a contact marker. The line's own text is discarded.
    Contact,
    /// The whole line is one bold run. Payload has the `**` markers stripped.
    BoldCallout { inner: &'a str },
    /// Fallback: anything else, to be split into inline spans.
    Paragraph { text: &'a str },
}

/// Numbered clause prefix, e.g. `2.1.` or `3.2` followed by whitespace.
fn clause_regex() -> &'static Regex {
    static CLAUSE_REGEX: OnceLock<Regex> = OnceLock::new();
    CLAUSE_REGEX
        .get_or_init(|| Regex::new(r"^(\d+\.\d+\.?)\s+(.*)$").expect("Invalid clause regex"))
}

/// Classifies one non-blank line, first match wins.
///
/// The contact check runs before everything else: contact instructions are
/// never rendered from document text, so a marker inside a line that would
/// otherwise be a heading, clause, or bold callout still yields
/// [`LineClass::Contact`]. The remaining rules follow the order divider,
/// headings by depth, clause, bold callout, paragraph.
pub fn classify_line<'a>(line: &'a str, contact_markers: &[String]) -> LineClass<'a> {
    if is_contact_line(line, contact_markers) {
        return LineClass::Contact;
    }

    if line.trim() == "---" {
        return LineClass::Divider;
    }

    if let Some(rest) = line.strip_prefix("# ") {
        return LineClass::Heading1 { payload: rest };
    }

    if let Some(rest) = line.strip_prefix("## ") {
        return LineClass::Heading2 {
            payload: rest.trim(),
        };
    }

    if let Some(rest) = line.strip_prefix("### ") {
        return LineClass::Heading3 { payload: rest };
    }

    if let Some(caps) = clause_regex().captures(line) {
        return LineClass::Clause {
            number: caps.get(1).expect("clause number group").as_str(),
            text: caps.get(2).expect("clause text group").as_str(),
        };
    }

    if line.len() >= 4 && line.starts_with("**") && line.ends_with("**") {
        return LineClass::BoldCallout {
            inner: &line[2..line.len() - 2],
        };
    }

    LineClass::Paragraph { text: line }
}
