// ---------------------------------------------------------------------------
// Runtime configuration — env-var with built-in defaults
// ---------------------------------------------------------------------------

/// Hard ceiling of one injected link per this many words of content.
pub const WORDS_PER_INJECTED_LINK: usize = 200;

/// Keyword density above this percentage is flagged as overused.
pub const KEYWORD_OVERUSE_PCT: f64 = 2.0;

/// Average keyword density below this percentage triggers an advisory.
pub const KEYWORD_UNDERUSE_AVG_PCT: f64 = 0.5;

/// The site's own domain; hrefs containing it count as internal links.
/// `SITE_DOMAIN` env var → default.
pub fn site_domain() -> String {
    std::env::var("SITE_DOMAIN")
        .ok()
        .filter(|v| !v.trim().is_empty())
        .unwrap_or_else(|| "spicedkitchen.com".to_string())
}

/// Base path injected hrefs are built under (`{base}/{slug}`).
/// `BLOG_BASE_PATH` env var → default `/blog`.
pub fn blog_base_path() -> String {
    std::env::var("BLOG_BASE_PATH")
        .ok()
        .filter(|v| !v.trim().is_empty())
        .map(|v| v.trim_end_matches('/').to_string())
        .unwrap_or_else(|| "/blog".to_string())
}
