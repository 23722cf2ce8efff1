//! Markup helpers for rich-text post content
//!
//! Post content may embed markup. Nothing here renders it: the front-end
//! only ever displays the plain text these helpers produce.

use std::sync::LazyLock;

use regex::Regex;

/// Any `<...>` span, including the degenerate `<>`
static TAG_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"<[^>]*>").expect("tag pattern is valid"));

/// Tags that end a paragraph when flattening to plain text
static BLOCK_BREAK_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)<br\s*/?>|</\s*(p|div|h[1-6]|li|blockquote|pre)\s*>")
        .expect("block break pattern is valid")
});

/// Suffix appended to every excerpt
pub const EXCERPT_SUFFIX: &str = "...";

/// Remove every markup tag from `input`.
///
/// Unbalanced angle brackets left behind after tag removal are dropped as
/// well, so the result never contains `<` or `>`.
pub fn strip_tags(input: &str) -> String {
    TAG_REGEX
        .replace_all(input, "")
        .chars()
        .filter(|c| *c != '<' && *c != '>')
        .collect()
}

/// Plain-text preview: the first `limit` characters of the stripped content
/// followed by [`EXCERPT_SUFFIX`].
///
/// The suffix is appended unconditionally, even when nothing was cut.
pub fn excerpt(content: &str, limit: usize) -> String {
    let mut preview: String = strip_tags(content).chars().take(limit).collect();
    preview.push_str(EXCERPT_SUFFIX);
    preview
}

/// Flatten rich-text content into display paragraphs.
///
/// Block-level closing tags and `<br>` end a paragraph, every other tag is
/// dropped and the common character entities are decoded. Blank paragraphs
/// are skipped.
pub fn to_plain_text(content: &str) -> Vec<String> {
    let with_breaks = BLOCK_BREAK_REGEX.replace_all(content, "\n");
    let stripped = strip_tags(&with_breaks);

    stripped
        .split('\n')
        .map(|line| decode_entities(line.trim()))
        .filter(|line| !line.trim().is_empty())
        .collect()
}

/// Decode the handful of entities that show up in hand-written post bodies
fn decode_entities(text: &str) -> String {
    // &amp; last so "&amp;lt;" decodes to "&lt;" rather than "<"
    text.replace("&lt;", "<")
        .replace("&gt;", ">")
        .replace("&quot;", "\"")
        .replace("&#39;", "'")
        .replace("&nbsp;", " ")
        .replace("&amp;", "&")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_strip_tags_removes_markup() {
        assert_eq!(strip_tags("<p>Hello <b>world</b></p>"), "Hello world");
    }

    #[test]
    fn test_strip_tags_with_attributes() {
        assert_eq!(
            strip_tags(r#"<a href="https://example.com">link</a>"#),
            "link"
        );
    }

    #[test]
    fn test_strip_tags_drops_stray_brackets() {
        assert_eq!(strip_tags("1 < 2"), "1  2");
        assert_eq!(strip_tags("2 > 1"), "2  1");
        assert_eq!(strip_tags("<p>unterminated <b"), "unterminated b");
    }

    #[test]
    fn test_excerpt_short_content() {
        assert_eq!(excerpt("<p>Short</p>", 100), "Short...");
    }

    #[test]
    fn test_excerpt_truncates_to_limit() {
        let content = format!("<p>{}</p>", "a".repeat(250));
        let preview = excerpt(&content, 100);

        assert_eq!(preview.chars().count(), 103);
        assert!(preview.ends_with("..."));
    }

    #[test]
    fn test_excerpt_counts_characters_not_bytes() {
        let content = "é".repeat(150);
        let preview = excerpt(&content, 100);

        assert_eq!(preview.chars().count(), 103);
    }

    #[test]
    fn test_excerpt_empty_content() {
        assert_eq!(excerpt("", 100), "...");
    }

    #[test]
    fn test_to_plain_text_paragraphs() {
        let paragraphs = to_plain_text("<h2>Intro</h2><p>First line</p><p>Second<br/>line</p>");
        assert_eq!(paragraphs, vec!["Intro", "First line", "Second", "line"]);
    }

    #[test]
    fn test_to_plain_text_decodes_entities() {
        let paragraphs = to_plain_text("<p>Fish &amp; chips &lt;3</p>");
        assert_eq!(paragraphs, vec!["Fish & chips <3"]);
    }

    #[test]
    fn test_to_plain_text_neutralises_scripts() {
        let paragraphs = to_plain_text("<script>alert('x')</script><p>Body</p>");
        assert!(paragraphs.iter().all(|p| !p.contains("<script")));
    }
}
