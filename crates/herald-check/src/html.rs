//! Regex helpers over raw HTML strings.
//!
//! These extract just enough structure for the rule checks: titles, visible
//! text, image tags, link and button counts. Malformed or nested markup is
//! handled however the patterns happen to handle it.

use std::sync::LazyLock;

use regex::Regex;

fn compile(pattern: &str) -> Regex {
    Regex::new(pattern).expect("static pattern should compile")
}

static TITLE: LazyLock<Regex> = LazyLock::new(|| compile(r"(?is)<title[^>]*>(.*?)</title>"));
static STYLE_BLOCK: LazyLock<Regex> =
    LazyLock::new(|| compile(r"(?is)<style[^>]*>.*?</style>"));
static SCRIPT_BLOCK: LazyLock<Regex> =
    LazyLock::new(|| compile(r"(?is)<script[^>]*>.*?</script>"));
static COMMENT: LazyLock<Regex> = LazyLock::new(|| compile(r"(?s)<!--.*?-->"));
static TAG: LazyLock<Regex> = LazyLock::new(|| compile(r"<[^>]+>"));
static WHITESPACE: LazyLock<Regex> = LazyLock::new(|| compile(r"\s+"));
static IMG_TAG: LazyLock<Regex> = LazyLock::new(|| compile(r"(?i)<img\b[^>]*>"));
static SRC_ATTR: LazyLock<Regex> =
    LazyLock::new(|| compile(r#"(?i)\bsrc\s*=\s*(?:"([^"]*)"|'([^']*)')"#));
static ALT_ATTR: LazyLock<Regex> = LazyLock::new(|| compile(r"(?i)\balt\s*="));
static LINK: LazyLock<Regex> = LazyLock::new(|| compile(r"(?i)<a\b[^>]*\bhref\s*="));
static CTA: LazyLock<Regex> = LazyLock::new(|| {
    compile(
        r#"(?i)<(?:a|button)\b[^>]*\b(?:class|style)\s*=\s*["'][^"']*(?:button|btn|cta)[^"']*["'][^>]*>"#,
    )
});
static HEAD: LazyLock<Regex> = LazyLock::new(|| compile(r"(?is)<head(?:\s[^>]*)?>(.*?)</head>"));
static STYLE_ATTR: LazyLock<Regex> =
    LazyLock::new(|| compile(r#"(?i)\bstyle\s*=\s*(?:"[^"]*"|'[^']*')"#));
static WIDTH: LazyLock<Regex> =
    LazyLock::new(|| compile(r#"(?i)\bwidth\s*[:=]\s*["']?\s*(\d+)"#));
static H1: LazyLock<Regex> = LazyLock::new(|| compile(r"(?i)<h1[\s>]"));
static MEDIA_QUERY: LazyLock<Regex> = LazyLock::new(|| compile(r"(?i)@media\b"));

/// The six tags an intact document must contain.
pub const STRUCTURE_TAGS: [&str; 6] = ["<html>", "</html>", "<head>", "</head>", "<body>", "</body>"];

/// The four tags whose loss means the document was cut off.
pub const DOCUMENT_TAGS: [&str; 4] = ["<html>", "</html>", "<body>", "</body>"];

/// Inner text of the first `<title>`, trimmed. `None` when absent or empty.
#[must_use]
pub fn extract_title(html: &str) -> Option<String> {
    TITLE
        .captures(html)
        .and_then(|c| c.get(1))
        .map(|m| m.as_str().trim().to_string())
        .filter(|t| !t.is_empty())
}

/// Visible text: style/script blocks and comments removed, tags replaced by
/// spaces, whitespace collapsed.
#[must_use]
pub fn strip_tags(html: &str) -> String {
    let text = STYLE_BLOCK.replace_all(html, " ");
    let text = SCRIPT_BLOCK.replace_all(&text, " ");
    let text = COMMENT.replace_all(&text, " ");
    let text = TAG.replace_all(&text, " ");
    let text = text.replace("&nbsp;", " ");
    WHITESPACE.replace_all(&text, " ").trim().to_string()
}

/// Visible text of the `<body>` only (falls back to the whole document).
#[must_use]
pub fn body_text(html: &str) -> String {
    let lower = html.to_ascii_lowercase();
    let start = lower
        .find("<body")
        .and_then(|i| lower[i..].find('>').map(|j| i + j + 1));
    let end = lower.rfind("</body>");
    match (start, end) {
        (Some(s), Some(e)) if s <= e => strip_tags(&html[s..e]),
        (Some(s), None) => strip_tags(&html[s..]),
        _ => strip_tags(html),
    }
}

/// Every `<img ...>` tag, verbatim.
#[must_use]
pub fn img_tags(html: &str) -> Vec<&str> {
    IMG_TAG.find_iter(html).map(|m| m.as_str()).collect()
}

/// The `src` value of every `<img>` that has one.
#[must_use]
pub fn img_sources(html: &str) -> Vec<&str> {
    IMG_TAG
        .find_iter(html)
        .filter_map(|m| tag_src(m.as_str()))
        .collect()
}

/// The `src` attribute of a single tag.
#[must_use]
pub fn tag_src(tag: &str) -> Option<&str> {
    SRC_ATTR
        .captures(tag)
        .and_then(|c| c.get(1).or_else(|| c.get(2)))
        .map(|m| m.as_str())
}

#[must_use]
pub fn tag_has_alt(tag: &str) -> bool {
    ALT_ATTR.is_match(tag)
}

#[must_use]
pub fn count_images(html: &str) -> usize {
    IMG_TAG.find_iter(html).count()
}

#[must_use]
pub fn count_links(html: &str) -> usize {
    LINK.find_iter(html).count()
}

/// `<a>`/`<button>` tags styled as buttons (class or style mentions
/// `button`, `btn`, or `cta`).
#[must_use]
pub fn count_cta_buttons(html: &str) -> usize {
    CTA.find_iter(html).count()
}

/// Inner content of `<head>`, if any.
#[must_use]
pub fn head_content(html: &str) -> Option<&str> {
    HEAD.captures(html).and_then(|c| c.get(1)).map(|m| m.as_str())
}

#[must_use]
pub fn count_style_attributes(html: &str) -> usize {
    STYLE_ATTR.find_iter(html).count()
}

/// Every numeric `width` token (`width="600"`, `width: 640px`, `max-width:700px`).
#[must_use]
pub fn width_values(html: &str) -> Vec<u32> {
    WIDTH
        .captures_iter(html)
        .filter_map(|c| c.get(1))
        .filter_map(|m| m.as_str().parse().ok())
        .collect()
}

#[must_use]
pub fn has_h1(html: &str) -> bool {
    H1.is_match(html)
}

#[must_use]
pub fn has_media_query(html: &str) -> bool {
    MEDIA_QUERY.is_match(html)
}

/// Whether `tag` (written as `<name>` or `</name>`) is present.
///
/// Closing tags match literally. Opening tags match `<name` followed by `>`
/// or whitespace, so attributes (`<html lang="ru">`) are allowed.
#[must_use]
pub fn has_tag(html: &str, tag: &str) -> bool {
    if tag.starts_with("</") {
        return html.contains(tag);
    }
    let opener = tag.trim_end_matches('>');
    html.match_indices(opener).any(|(i, _)| {
        html[i + opener.len()..]
            .chars()
            .next()
            .is_some_and(|c| c == '>' || c.is_whitespace())
    })
}

/// The subset of `tags` not present in `html`, in order.
#[must_use]
pub fn missing_tags<'a>(html: &str, tags: &[&'a str]) -> Vec<&'a str> {
    tags.iter().copied().filter(|t| !has_tag(html, t)).collect()
}

/// Remote or inline sources that never need a manifest entry.
#[must_use]
pub fn is_external_src(src: &str) -> bool {
    let lower = src.trim().to_ascii_lowercase();
    ["http://", "https://", "//", "data:", "cid:"]
        .iter()
        .any(|prefix| lower.starts_with(prefix))
}

/// Absolute local paths are accepted by convention without verification.
#[must_use]
pub fn is_local_absolute_path(src: &str) -> bool {
    src.starts_with("/Users/") || src.starts_with("/home/") || src.starts_with("C:\\")
}
