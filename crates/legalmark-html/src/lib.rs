//! HTML rendering for parsed legal documents.
//!
//! Maps each [`Block`] variant to one HTML element; the match is exhaustive
//! so a new block variant fails compilation here instead of silently not
//! rendering. Inline span payloads are already sanitized by the engine and
//! are emitted as-is; everything else (heading text, clause text, template
//! strings) is escaped at this boundary because it bypasses the inline
//! formatter.

use legalmark_engine::{Block, ContactTemplate, InlineSpan};
use std::fmt::Write;

/// Renders a block sequence to an HTML fragment, one element per block.
///
/// `template` supplies the entire content of contact cards; a
/// [`Block::Contact`] renders no text from the document.
pub fn render_document(blocks: &[Block], template: &ContactTemplate) -> String {
    let mut html = String::new();
    for block in blocks {
        render_block(&mut html, block, template);
        html.push('\n');
    }
    html
}

fn render_block(html: &mut String, block: &Block, template: &ContactTemplate) {
    match block {
        Block::Heading1 { text } => {
            let _ = write!(html, "<h1>{}</h1>", escape(text));
        }
        Block::Heading2 { anchor_id, text } => match anchor_id {
            Some(id) => {
                let _ = write!(
                    html,
                    "<h2 id=\"{}\">{}</h2>",
                    escape_attribute(id),
                    escape(text)
                );
            }
            None => {
                let _ = write!(html, "<h2>{}</h2>", escape(text));
            }
        },
        Block::Heading3 { text } => {
            let _ = write!(html, "<h3>{}</h3>", escape(text));
        }
        Block::Divider => html.push_str("<hr>"),
        Block::NumberedClause { number, text } => {
            let _ = write!(
                html,
                "<p class=\"clause\"><span class=\"clause-number\">{}</span> {}</p>",
                escape(number),
                escape(text)
            );
        }
        Block::Contact => {
            let _ = write!(
                html,
                "<div class=\"contact-card\"><h3>{}</h3><p>{}</p><a href=\"{}\">{}</a></div>",
                escape(&template.title),
                escape(&template.body),
                escape_attribute(&template.url),
                escape(&template.cta_label)
            );
        }
        Block::BoldCallout { spans } => {
            let _ = write!(
                html,
                "<div class=\"callout\"><strong>{}</strong></div>",
                render_spans(spans)
            );
        }
        Block::Paragraph { spans } => {
            let _ = write!(html, "<p>{}</p>", render_spans(spans));
        }
    }
}

/// Span payloads are pre-sanitized by the engine and emitted directly.
fn render_spans(spans: &[InlineSpan]) -> String {
    let mut out = String::new();
    for span in spans {
        match span {
            InlineSpan::Plain(text) => out.push_str(text),
            InlineSpan::Bold(text) => {
                let _ = write!(out, "<strong>{text}</strong>");
            }
            InlineSpan::Italic(text) => {
                let _ = write!(out, "<em>{text}</em>");
            }
        }
    }
    out
}

fn escape(text: &str) -> String {
    html_escape::encode_text(text).into_owned()
}

fn escape_attribute(text: &str) -> String {
    html_escape::encode_double_quoted_attribute(text).into_owned()
}
