//! Flesch Reading Ease on plain text.
//!
//! The syllable counter is a vowel-group heuristic, not a dictionary lookup.
//! Its known inaccuracies are part of the scoring model: changing it would
//! silently shift historical scores, so treat any "fix" here as a versioned
//! scoring-model change.

use once_cell::sync::Lazy;
use regex::Regex;

static SENTENCE_SPLIT_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"[.!?]+").unwrap());

/// Flesch Reading Ease, clamped to [0, 100]. Empty text scores 0.
pub fn flesch_reading_ease(text: &str) -> f64 {
    let sentences = SENTENCE_SPLIT_RE
        .split(text)
        .filter(|s| !s.trim().is_empty())
        .count();
    let words: Vec<&str> = text.split_whitespace().collect();

    if sentences == 0 || words.is_empty() {
        return 0.0;
    }

    let syllables: usize = words.iter().map(|w| count_syllables(w)).sum();

    let words_per_sentence = words.len() as f64 / sentences as f64;
    let syllables_per_word = syllables as f64 / words.len() as f64;

    let score = 206.835 - 1.015 * words_per_sentence - 84.6 * syllables_per_word;
    score.clamp(0.0, 100.0)
}

/// Approximate syllable count: transitions into a vowel group (aeiouy), minus
/// one for a trailing silent e, floored at 1. Words of three letters or fewer
/// count as one syllable.
pub fn count_syllables(word: &str) -> usize {
    let letters: String = word
        .chars()
        .filter(|c| c.is_ascii_alphabetic())
        .collect::<String>()
        .to_lowercase();

    if letters.len() <= 3 {
        return 1;
    }

    let mut count = 0usize;
    let mut prev_was_vowel = false;
    for c in letters.chars() {
        let is_vowel = matches!(c, 'a' | 'e' | 'i' | 'o' | 'u' | 'y');
        if is_vowel && !prev_was_vowel {
            count += 1;
        }
        prev_was_vowel = is_vowel;
    }

    if letters.ends_with('e') {
        count = count.saturating_sub(1);
    }

    count.max(1)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn short_words_are_one_syllable() {
        assert_eq!(count_syllables("a"), 1);
        assert_eq!(count_syllables("the"), 1);
        assert_eq!(count_syllables("fry"), 1);
    }

    #[test]
    fn silent_e_is_dropped() {
        assert_eq!(count_syllables("rice"), 1);
        assert_eq!(count_syllables("recipe"), 2);
        assert_eq!(count_syllables("simmering"), 3);
    }

    #[test]
    fn punctuation_does_not_change_syllables() {
        assert_eq!(count_syllables("rice."), count_syllables("rice"));
    }

    #[test]
    fn simple_prose_scores_high() {
        let text = "We cook rice. We add salt. We eat well.";
        let score = flesch_reading_ease(text);
        assert!(score >= 90.0, "got {}", score);
    }

    #[test]
    fn dense_prose_scores_lower_than_simple_prose() {
        let simple = "We cook rice. We add salt.";
        let dense = "Notwithstanding considerable organoleptic heterogeneity, \
                     traditional fermentation methodologies demonstrate remarkable \
                     microbiological sophistication throughout preparation.";
        assert!(flesch_reading_ease(dense) < flesch_reading_ease(simple));
    }

    #[test]
    fn empty_text_is_zero() {
        assert_eq!(flesch_reading_ease(""), 0.0);
        assert_eq!(flesch_reading_ease("   "), 0.0);
    }

    #[test]
    fn score_is_clamped() {
        let score = flesch_reading_ease("Go. Do. Be.");
        assert!((0.0..=100.0).contains(&score));
    }
}
