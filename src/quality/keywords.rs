//! SEO keyword density over stripped post text.

use crate::core::config;
use crate::types::{KeywordDensityReport, KeywordStat};

/// Density of each keyword in `text` as a percentage of total words.
/// A keyword is overused when its density exceeds 2%.
pub fn analyze_keyword_density(text: &str, keywords: &[String]) -> KeywordDensityReport {
    let tokens: Vec<String> = text
        .to_lowercase()
        .split_whitespace()
        .map(|w| w.trim_matches(|c: char| !c.is_alphanumeric()).to_string())
        .filter(|w| !w.is_empty())
        .collect();
    let total_words = tokens.len();

    let mut stats = Vec::with_capacity(keywords.len());
    let mut density_sum = 0.0;

    for keyword in keywords {
        let needle = keyword.trim().to_lowercase();
        if needle.is_empty() {
            continue;
        }
        let count = tokens.iter().filter(|t| **t == needle).count();
        let density = if total_words > 0 {
            count as f64 / total_words as f64 * 100.0
        } else {
            0.0
        };
        density_sum += density;
        stats.push(KeywordStat {
            keyword: keyword.clone(),
            count,
            density,
            overused: density > config::KEYWORD_OVERUSE_PCT,
        });
    }

    let average_density = if stats.is_empty() {
        0.0
    } else {
        density_sum / stats.len() as f64
    };

    KeywordDensityReport { keywords: stats, average_density }
}
