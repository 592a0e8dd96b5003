/// Inline span handling, scoped to a single line
use crate::ast::Node;
use regex::Regex;
use std::ops::Range;
use std::sync::LazyLock;

static DIGEST_SPAN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\[\[(.+?)\]\]").expect("digest span pattern is valid"));
static STRIP_SPAN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\(\((.+?)\)\)").expect("strip span pattern is valid"));
static STRONG_SPAN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\*\*(.+?)\*\*").expect("strong span pattern is valid"));
static EMPHASIS_SPAN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"__(.+?)__").expect("emphasis span pattern is valid"));

/// Parse the content of one line into inline nodes.
///
/// Custom transforms run first on the raw text, then bold and emphasis
/// spans are turned into nodes. Unmatched delimiters stay as literal text.
pub fn parse_line(content: &str) -> Vec<Node> {
    parse_inline(&apply_custom_transforms(content))
}

/// Replace `[[text]]` with the MD5 hex digest of `text` and `((text))` with
/// `text` minus every `c`/`C`, always taking the leftmost span, until none
/// remain.
pub fn apply_custom_transforms(line: &str) -> String {
    let mut text = line.to_string();
    // Each pass removes four bracket or paren characters and never adds one
    while let Some((range, replacement)) = next_custom_span(&text) {
        text.replace_range(range, &replacement);
    }
    text
}

fn next_custom_span(text: &str) -> Option<(Range<usize>, String)> {
    let digest = DIGEST_SPAN.captures(text);
    let strip = STRIP_SPAN.captures(text);

    let (caps, is_digest) = match (digest, strip) {
        (Some(d), Some(s)) => {
            if d.get(0)?.start() <= s.get(0)?.start() {
                (d, true)
            } else {
                (s, false)
            }
        }
        (Some(d), None) => (d, true),
        (None, Some(s)) => (s, false),
        (None, None) => return None,
    };

    let range = caps.get(0)?.range();
    let inner = caps.get(1)?.as_str();
    let replacement = if is_digest {
        md5_hex(inner)
    } else {
        strip_c(inner)
    };
    Some((range, replacement))
}

fn md5_hex(text: &str) -> String {
    format!("{:x}", md5::compute(text.as_bytes()))
}

fn strip_c(text: &str) -> String {
    text.chars().filter(|&ch| ch != 'c' && ch != 'C').collect()
}

/// Parse bold (`**`) and emphasis (`__`) spans, recursing into their content
pub fn parse_inline(text: &str) -> Vec<Node> {
    let mut nodes = Vec::new();
    let mut rest = text;

    while let Some((range, inner, strong)) = next_styled_span(rest) {
        if range.start > 0 {
            nodes.push(Node::Text(rest[..range.start].to_string()));
        }
        let children = parse_inline(inner);
        nodes.push(if strong {
            Node::Strong(children)
        } else {
            Node::Emphasis(children)
        });
        rest = &rest[range.end..];
    }

    if !rest.is_empty() {
        nodes.push(Node::Text(rest.to_string()));
    }
    nodes
}

fn next_styled_span(text: &str) -> Option<(Range<usize>, &str, bool)> {
    let strong = STRONG_SPAN.captures(text);
    let emphasis = EMPHASIS_SPAN.captures(text);

    let (caps, is_strong) = match (strong, emphasis) {
        (Some(b), Some(e)) => {
            if b.get(0)?.start() <= e.get(0)?.start() {
                (b, true)
            } else {
                (e, false)
            }
        }
        (Some(b), None) => (b, true),
        (None, Some(e)) => (e, false),
        (None, None) => return None,
    };

    Some((caps.get(0)?.range(), caps.get(1)?.as_str(), is_strong))
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    fn text(s: &str) -> Node {
        Node::Text(s.to_string())
    }

    #[rstest]
    #[case("[[Hello]]", "8b1a9953c4611296a827abf8c47804d7")]
    #[case("((Hello Chicago))", "Hello hiago")]
    #[case("((Cocoa))", "ooa")]
    #[case(
        "say [[Holberton]] and ((cool))",
        "say f3b21c0205fba4fc7e6cb96ae6edc950 and ool"
    )]
    #[case("[[]] and (())", "[[]] and (())")]
    #[case("[[open only", "[[open only")]
    #[case("((open only", "((open only")]
    #[case("plain text", "plain text")]
    #[case("((((c))))", "(())")]
    #[case("[[a]] [[b]] [[c]]", "0cc175b9c0f1b6a831c399e269772661 92eb5ffee6ae2fec3ad71c777531578f 4a8a08f09d37b73795649038408b5f33")]
    fn test_custom_transforms(#[case] input: &str, #[case] expected: &str) {
        assert_eq!(apply_custom_transforms(input), expected);
    }

    #[test]
    fn test_strip_span_nested_in_digest_uses_raw_text() {
        // The digest span starts first, so its content is hashed verbatim
        assert_eq!(
            apply_custom_transforms("[[((Hello))]]"),
            md5_hex("((Hello))")
        );
    }

    #[test]
    fn test_strip_span_can_expose_bold() {
        assert_eq!(
            parse_line("((**cat**))"),
            vec![Node::Strong(vec![text("at")])]
        );
    }

    #[test]
    fn test_bold() {
        assert_eq!(
            parse_inline("a **b** c"),
            vec![text("a "), Node::Strong(vec![text("b")]), text(" c")]
        );
    }

    #[test]
    fn test_emphasis() {
        assert_eq!(
            parse_inline("__x__"),
            vec![Node::Emphasis(vec![text("x")])]
        );
    }

    #[test]
    fn test_nested_spans() {
        assert_eq!(
            parse_inline("**a __b__**"),
            vec![Node::Strong(vec![
                text("a "),
                Node::Emphasis(vec![text("b")])
            ])]
        );
    }

    #[test]
    fn test_emphasis_before_bold() {
        assert_eq!(
            parse_inline("__e__ **b**"),
            vec![
                Node::Emphasis(vec![text("e")]),
                text(" "),
                Node::Strong(vec![text("b")])
            ]
        );
    }

    #[rstest]
    #[case("**unterminated")]
    #[case("__unterminated")]
    #[case("****")]
    #[case("a ** b")]
    fn test_unmatched_markers_stay_literal(#[case] input: &str) {
        assert_eq!(parse_inline(input), vec![text(input)]);
    }

    #[test]
    fn test_empty_line() {
        assert!(parse_line("").is_empty());
    }
}
