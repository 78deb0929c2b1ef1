//! Keyword and linkable-phrase extraction.

use std::collections::HashSet;

use crate::types::RelatedPost;

/// Closed list of English function words dropped during keyword extraction.
/// An approximation by design; extending it changes ranking outputs.
const STOP_WORDS: &[&str] = &[
    "a", "about", "above", "after", "again", "all", "also", "an", "and", "any", "are",
    "because", "been", "before", "being", "below", "between", "both", "but", "by", "can",
    "could", "did", "does", "doing", "down", "during", "each", "few", "for", "from",
    "further", "had", "has", "have", "having", "here", "how", "into", "its", "just",
    "more", "most", "not", "now", "off", "once", "only", "other", "our", "out", "over",
    "own", "same", "should", "some", "such", "than", "that", "the", "their", "them",
    "then", "there", "these", "they", "this", "those", "through", "under", "until",
    "very", "was", "were", "what", "when", "where", "which", "while", "who", "why",
    "will", "with", "would", "you", "your",
];

fn is_stop_word(word: &str) -> bool {
    STOP_WORDS.contains(&word)
}

/// Extract up to `max` content keywords from free text: lowercase, punctuation
/// stripped, stop-worded, tokens of three characters or fewer dropped,
/// first-seen order preserved.
pub fn extract_keywords(text: &str, max: usize) -> Vec<String> {
    let cleaned: String = text
        .to_lowercase()
        .chars()
        .map(|c| if c.is_alphanumeric() || c.is_whitespace() { c } else { ' ' })
        .collect();

    let mut seen = HashSet::new();
    let mut keywords = Vec::new();
    for token in cleaned.split_whitespace() {
        if token.len() <= 3 || is_stop_word(token) {
            continue;
        }
        if seen.insert(token.to_string()) {
            keywords.push(token.to_string());
            if keywords.len() == max {
                break;
            }
        }
    }
    keywords
}

/// Phrases worth turning into an anchor for a related post: the full title,
/// every contiguous 3-word window of the title, the category name, and tags
/// longer than 3 characters. Deduplicated, longest first (more specific
/// phrases win), capped at 5.
pub fn linkable_phrases(post: &RelatedPost) -> Vec<String> {
    let mut phrases: Vec<String> = Vec::new();
    let mut seen: HashSet<String> = HashSet::new();
    let mut push = |phrase: &str| {
        let trimmed = phrase.trim();
        if !trimmed.is_empty() && seen.insert(trimmed.to_lowercase()) {
            phrases.push(trimmed.to_string());
        }
    };

    push(&post.title);

    let title_words: Vec<&str> = post.title.split_whitespace().collect();
    if title_words.len() >= 3 {
        for window in title_words.windows(3) {
            push(&window.join(" "));
        }
    }

    if let Some(category) = &post.category {
        push(&category.name);
    }

    for tag in &post.tags {
        if tag.len() > 3 {
            push(tag);
        }
    }

    phrases.sort_by(|a, b| b.len().cmp(&a.len()));
    phrases.truncate(5);
    phrases
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{Category, MatchType};

    fn related(title: &str, tags: &[&str], category: Option<&str>) -> RelatedPost {
        RelatedPost {
            id: "r1".to_string(),
            title: title.to_string(),
            slug: "r1".to_string(),
            tags: tags.iter().map(|t| t.to_string()).collect(),
            category: category.map(|name| Category {
                id: "c1".to_string(),
                name: name.to_string(),
                slug: name.to_lowercase(),
            }),
            excerpt: String::new(),
            reading_time: None,
            published_at: None,
            relevance_score: 10,
            match_type: MatchType::Tags,
        }
    }

    #[test]
    fn keywords_drop_stop_words_and_short_tokens() {
        let kws = extract_keywords("The best way to make a creamy paneer curry at home", 10);
        assert!(kws.contains(&"creamy".to_string()));
        assert!(kws.contains(&"paneer".to_string()));
        assert!(kws.contains(&"curry".to_string()));
        assert!(!kws.contains(&"the".to_string()));
        assert!(!kws.contains(&"way".to_string())); // len <= 3
    }

    #[test]
    fn keywords_are_capped_and_deduped() {
        let text = "paneer paneer butter butter masala masala gravy gravy spice spice \
                    onion tomato ginger garlic cream kasuri methi garam";
        let kws = extract_keywords(text, 10);
        assert_eq!(kws.len(), 10);
        assert_eq!(kws.iter().filter(|k| *k == "paneer").count(), 1);
    }

    #[test]
    fn phrases_prefer_longer_and_cap_at_five() {
        let post = related(
            "Slow Cooked Lamb Curry Secrets",
            &["lamb", "curry", "slow cooking"],
            Some("Main Course"),
        );
        let phrases = linkable_phrases(&post);
        assert_eq!(phrases.len(), 5);
        assert_eq!(phrases[0], "Slow Cooked Lamb Curry Secrets");
        for pair in phrases.windows(2) {
            assert!(pair[0].len() >= pair[1].len());
        }
    }

    #[test]
    fn short_tags_are_skipped() {
        let post = related("Dal", &["dal", "veg"], None);
        let phrases = linkable_phrases(&post);
        assert_eq!(phrases, vec!["Dal".to_string()]);
    }

    #[test]
    fn three_word_windows_cover_the_title() {
        let post = related("Quick Masala Oats Bowl", &[], None);
        let phrases = linkable_phrases(&post);
        assert!(phrases.contains(&"Quick Masala Oats".to_string()));
        assert!(phrases.contains(&"Masala Oats Bowl".to_string()));
    }
}
