//! Plain-text rendition of markup slide content.

use std::sync::LazyLock;

use regex::Regex;

static COMMENT: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"(?s)<!--.*?-->").unwrap());

static BLOCK_TAG: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)</?(?:div|p|h[1-6]|br|li|ul|ol|section|article|header|footer|blockquote|tr)\b[^>]*>")
        .unwrap()
});

static ANY_TAG: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"<[^>]*>").unwrap());

static SPACES: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"[ \t]+").unwrap());

/// How markup slides are shown in the terminal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MarkupMode {
    /// Tags stripped, block elements become line breaks.
    #[default]
    Text,
    /// The content string as delivered.
    Verbatim,
}

/// Converts markup content into display lines according to `mode`.
pub fn render_lines(content: &str, mode: MarkupMode) -> Vec<String> {
    match mode {
        MarkupMode::Text => to_plain_lines(content),
        MarkupMode::Verbatim => content.lines().map(str::to_string).collect(),
    }
}

/// Strips tags and comments, decodes the common entities and drops blank
/// lines.
pub fn to_plain_lines(content: &str) -> Vec<String> {
    let without_comments = COMMENT.replace_all(content, "");
    let with_breaks = BLOCK_TAG.replace_all(&without_comments, "\n");
    let text = ANY_TAG.replace_all(&with_breaks, "");

    text.lines()
        .map(|line| SPACES.replace_all(&decode_entities(line), " ").trim().to_string())
        .filter(|line| !line.is_empty())
        .collect()
}

fn decode_entities(line: &str) -> String {
    // &amp; last so "&amp;lt;" stays "&lt;"
    line.replace("&nbsp;", " ")
        .replace("&lt;", "<")
        .replace("&gt;", ">")
        .replace("&quot;", "\"")
        .replace("&#39;", "'")
        .replace("&apos;", "'")
        .replace("&amp;", "&")
}
