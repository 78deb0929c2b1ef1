//! Shared HTML/text scanners.
//!
//! Post content is scanned with permissive regexes rather than parsed into a
//! tree. The counting semantics (e.g. an `<img>` "has alt" iff it carries a
//! non-empty quoted alt attribute) are load-bearing for score comparability,
//! so keep them stable even where a stricter parser would disagree.

use crate::types::{HeadingCounts, ImageAudit};
use once_cell::sync::Lazy;
use regex::Regex;

static SCRIPT_STYLE_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?is)<(?:script|style)[^>]*?>.*?</(?:script|style)>").unwrap()
});
static TAG_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?s)<[^>]*>").unwrap());
static WS_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"\s+").unwrap());

static H1_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?i)<h1[^>]*>").unwrap());
static H2_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?i)<h2[^>]*>").unwrap());
static H3_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?i)<h3[^>]*>").unwrap());
static H4_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?i)<h4[^>]*>").unwrap());

static IMG_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?is)<img[^>]*>").unwrap());
static ALT_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r#"(?i)alt=["'][^"']+["']"#).unwrap());

static ANCHOR_HREF_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r#"(?is)<a[^>]*?href=["']([^"']*)["'][^>]*>"#).unwrap());

/// Strip HTML down to plain text: script/style bodies removed entirely, then
/// all remaining tags, then whitespace collapsed.
pub fn strip_html(html: &str) -> String {
    let without_blocks = SCRIPT_STYLE_RE.replace_all(html, " ");
    let without_tags = TAG_RE.replace_all(&without_blocks, " ");
    WS_RE.replace_all(&without_tags, " ").trim().to_string()
}

pub fn count_words(text: &str) -> usize {
    text.split_whitespace().count()
}

/// Word count of the plain-text rendering of an HTML fragment.
pub fn html_word_count(html: &str) -> usize {
    count_words(&strip_html(html))
}

/// Count opening `<h1>`..`<h4>` tags, case-insensitive.
pub fn count_headings(html: &str) -> HeadingCounts {
    let h1 = H1_RE.find_iter(html).count();
    let h2 = H2_RE.find_iter(html).count();
    let h3 = H3_RE.find_iter(html).count();
    let h4 = H4_RE.find_iter(html).count();
    HeadingCounts { h1, h2, h3, h4, total: h1 + h2 + h3 + h4 }
}

/// Count `<img>` tags and split them by alt-text presence.
pub fn audit_images(html: &str) -> ImageAudit {
    let mut audit = ImageAudit::default();
    for tag in IMG_RE.find_iter(html) {
        audit.total += 1;
        if ALT_RE.is_match(tag.as_str()) {
            audit.with_alt += 1;
        } else {
            audit.missing_alt += 1;
        }
    }
    audit
}

/// Every href found in an `<a>` opening tag, in document order.
pub fn extract_hrefs(html: &str) -> Vec<String> {
    ANCHOR_HREF_RE
        .captures_iter(html)
        .filter_map(|c| c.get(1).map(|m| m.as_str().to_string()))
        .collect()
}
