use std::sync::OnceLock;

use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::sanitize::Sanitizer;

/// A run of inline text with an emphasis state.
///
/// Spans are ordered; concatenated, they reproduce the source line with the
/// emphasis markers removed. Every payload has already passed through the
/// injected sanitizer, so a renderer may display it directly.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum InlineSpan {
    Plain(String),
    Bold(String),
    Italic(String),
}

impl InlineSpan {
    /// The visible text of this span, without emphasis markers.
    pub fn text(&self) -> &str {
        match self {
            InlineSpan::Plain(text) | InlineSpan::Bold(text) | InlineSpan::Italic(text) => text,
        }
    }
}

/// Bold run: `**...**`, minimal match.
fn bold_regex() -> &'static Regex {
    static BOLD_REGEX: OnceLock<Regex> = OnceLock::new();
    BOLD_REGEX.get_or_init(|| Regex::new(r"\*\*(.*?)\*\*").expect("Invalid bold regex"))
}

/// Italic run: `*...*` with no `*` inside, so it never eats into a `**` pair.
fn italic_regex() -> &'static Regex {
    static ITALIC_REGEX: OnceLock<Regex> = OnceLock::new();
    ITALIC_REGEX.get_or_init(|| Regex::new(r"\*([^*]+)\*").expect("Invalid italic regex"))
}

/// Splits one line into emphasis spans.
///
/// Two passes: bold first, then italic over the text between bold matches,
/// so the italic pass only ever sees leftover single asterisks. An unmatched
/// delimiter (a dangling `**` or `*`) is kept as literal text; nothing is
/// dropped and nothing fails.
pub fn format_inline(text: &str, sanitizer: &Sanitizer) -> Vec<InlineSpan> {
    let mut spans = Vec::new();
    let mut rest_start = 0;

    for caps in bold_regex().captures_iter(text) {
        let matched = caps.get(0).expect("bold match");
        push_italic_spans(&text[rest_start..matched.start()], sanitizer, &mut spans);
        let inner = caps.get(1).expect("bold payload").as_str();
        spans.push(InlineSpan::Bold(sanitizer(inner)));
        rest_start = matched.end();
    }
    push_italic_spans(&text[rest_start..], sanitizer, &mut spans);

    spans
}

/// Italic pass over a segment that contains no `**` pairs.
fn push_italic_spans(segment: &str, sanitizer: &Sanitizer, spans: &mut Vec<InlineSpan>) {
    let mut rest_start = 0;

    for caps in italic_regex().captures_iter(segment) {
        let matched = caps.get(0).expect("italic match");
        push_plain(&segment[rest_start..matched.start()], sanitizer, spans);
        let inner = caps.get(1).expect("italic payload").as_str();
        spans.push(InlineSpan::Italic(sanitizer(inner)));
        rest_start = matched.end();
    }
    push_plain(&segment[rest_start..], sanitizer, spans);
}

fn push_plain(segment: &str, sanitizer: &Sanitizer, spans: &mut Vec<InlineSpan>) {
    if !segment.is_empty() {
        spans.push(InlineSpan::Plain(sanitizer(segment)));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sanitize::escape_sanitizer;
    use pretty_assertions::assert_eq;

    fn spans(text: &str) -> Vec<InlineSpan> {
        format_inline(text, &escape_sanitizer())
    }

    fn concatenated(spans: &[InlineSpan]) -> String {
        spans.iter().map(InlineSpan::text).collect()
    }

    #[test]
    fn mixed_emphasis_round_trip() {
        let result = spans("**bold** and *italic* text");
        assert_eq!(
            result,
            vec![
                InlineSpan::Bold("bold".into()),
                InlineSpan::Plain(" and ".into()),
                InlineSpan::Italic("italic".into()),
                InlineSpan::Plain(" text".into()),
            ]
        );
        // Concatenation rule: the source line with marker characters removed.
        assert_eq!(concatenated(&result), "bold and italic text");
    }

    #[test]
    fn plain_text_is_one_span() {
        assert_eq!(
            spans("no emphasis here"),
            vec![InlineSpan::Plain("no emphasis here".into())]
        );
    }

    #[test]
    fn bold_pass_runs_before_italic() {
        // `**strong**` must not be read as italic-star, star, italic-star.
        assert_eq!(
            spans("**strong**"),
            vec![InlineSpan::Bold("strong".into())]
        );
    }

    #[test]
    fn dangling_bold_marker_stays_literal() {
        assert_eq!(
            spans("**unterminated bold"),
            vec![InlineSpan::Plain("**unterminated bold".into())]
        );
    }

    #[test]
    fn dangling_italic_marker_stays_literal() {
        assert_eq!(
            spans("a lone * survives"),
            vec![InlineSpan::Plain("a lone * survives".into())]
        );
    }

    #[test]
    fn odd_number_of_bold_delimiters_keeps_all_text() {
        // Three `**` markers: the first pair matches, the third is literal.
        let result = spans("**one** and **two");
        assert_eq!(
            result,
            vec![
                InlineSpan::Bold("one".into()),
                InlineSpan::Plain(" and **two".into()),
            ]
        );
        assert_eq!(concatenated(&result), "one and **two");
    }

    #[test]
    fn adjacent_bold_runs_stay_separate() {
        assert_eq!(
            spans("**a****b**"),
            vec![
                InlineSpan::Bold("a".into()),
                InlineSpan::Bold("b".into()),
            ]
        );
    }

    #[test]
    fn spacing_around_markers_is_preserved() {
        let result = spans("x **b** y");
        assert_eq!(
            result,
            vec![
                InlineSpan::Plain("x ".into()),
                InlineSpan::Bold("b".into()),
                InlineSpan::Plain(" y".into()),
            ]
        );
        assert_eq!(concatenated(&result), "x b y");
    }

    #[test]
    fn script_tags_are_escaped_before_leaving_the_formatter() {
        let result = spans("**<script>alert(1)</script>**");
        assert_eq!(
            result,
            vec![InlineSpan::Bold(
                "&lt;script&gt;alert(1)&lt;/script&gt;".into()
            )]
        );
    }

    #[test]
    fn plain_payloads_are_sanitized_too() {
        assert_eq!(
            spans("a <b onclick=\"x()\">tag</b>"),
            vec![InlineSpan::Plain(
                "a &lt;b onclick=\"x()\"&gt;tag&lt;/b&gt;".into()
            )]
        );
    }
}
