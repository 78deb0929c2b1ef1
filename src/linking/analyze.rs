//! Anchor-tag scanning and internal/external link classification.

use crate::core::config;
use crate::text;
use crate::types::LinkAnalysis;

/// Classify every link in `content` against the configured site domain.
pub fn analyze_internal_links(content: &str) -> LinkAnalysis {
    analyze_links_for_domain(content, &config::site_domain())
}

/// A link is internal when its href is a relative path or points at the
/// site's own domain. Fragment-only hrefs (`#...`) are not links to a page
/// and are excluded from both counts.
pub fn analyze_links_for_domain(content: &str, site_domain: &str) -> LinkAnalysis {
    let mut internal_links = 0usize;
    let mut external_links = 0usize;

    for href in text::extract_hrefs(content) {
        if href.starts_with('#') {
            continue;
        }
        if href.starts_with('/') || href.contains(site_domain) {
            internal_links += 1;
        } else {
            external_links += 1;
        }
    }

    let word_count = text::html_word_count(content);
    let density = if word_count > 0 {
        internal_links as f64 / word_count as f64 * 100.0
    } else {
        0.0
    };

    let recommendation = if internal_links < 3 {
        "Add more internal links to related articles (aim for at least 3).".to_string()
    } else if density > 2.0 {
        "Too many internal links for the content length. Reduce to keep density under 2%."
            .to_string()
    } else {
        "Good internal linking.".to_string()
    };

    LinkAnalysis {
        total_links: internal_links + external_links,
        internal_links,
        external_links,
        density,
        recommendation,
    }
}
