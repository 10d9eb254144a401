//! Keyword extraction — ranks salient terms in a single document.
//!
//! The weighting is deliberately raw term frequency: each call scores against
//! a corpus of exactly one document, so an inverse-document-frequency term
//! would be constant anyway. Callers must not expect corpus-relative
//! statistics across calls.

use crate::analysis::normalize::normalize_text;
use crate::analysis::stopwords::is_stop_word;
use std::collections::HashMap;

/// Default cap on the number of ranked keywords returned.
pub const DEFAULT_MAX_KEYWORDS: usize = 20;

/// Extracts up to `max_keywords` content-bearing terms, highest frequency
/// first. Ties break by first occurrence in the text, which makes the output
/// fully deterministic: identical input always yields the identical ordered
/// sequence.
///
/// A term qualifies when it is longer than 2 characters and not a stop word.
pub fn extract_keywords(text: &str, max_keywords: usize) -> Vec<String> {
    let normalized = normalize_text(text);

    // (first occurrence index, frequency) per distinct token.
    let mut counts: HashMap<&str, (usize, u32)> = HashMap::new();
    for (position, token) in normalized.split_whitespace().enumerate() {
        counts
            .entry(token)
            .and_modify(|(_, freq)| *freq += 1)
            .or_insert((position, 1));
    }

    let mut ranked: Vec<(&str, usize, u32)> = counts
        .into_iter()
        .filter(|(token, _)| token.chars().count() > 2 && !is_stop_word(token))
        .map(|(token, (first, freq))| (token, first, freq))
        .collect();

    // Descending frequency, then ascending first-occurrence for stable ties.
    ranked.sort_by(|a, b| b.2.cmp(&a.2).then(a.1.cmp(&b.1)));
    ranked.truncate(max_keywords);

    ranked.into_iter().map(|(token, _, _)| token.to_string()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_frequency_ranks_first() {
        let text = "rust rust rust kubernetes kubernetes docker";
        let keywords = extract_keywords(text, DEFAULT_MAX_KEYWORDS);
        assert_eq!(keywords, vec!["rust", "kubernetes", "docker"]);
    }

    #[test]
    fn test_ties_break_by_first_occurrence() {
        let text = "alpha beta gamma beta gamma alpha";
        let keywords = extract_keywords(text, DEFAULT_MAX_KEYWORDS);
        // All frequency 2 — original text order wins.
        assert_eq!(keywords, vec!["alpha", "beta", "gamma"]);
    }

    #[test]
    fn test_stop_words_and_short_tokens_excluded() {
        let text = "the engineer and the team built an api in go";
        let keywords = extract_keywords(text, DEFAULT_MAX_KEYWORDS);
        assert!(keywords.contains(&"engineer".to_string()));
        assert!(keywords.contains(&"team".to_string()));
        assert!(!keywords.contains(&"the".to_string()));
        assert!(!keywords.contains(&"and".to_string()));
        // "api" and "go" fail the > 2 chars filter ("api" is exactly 3, passes).
        assert!(keywords.contains(&"api".to_string()));
        assert!(!keywords.contains(&"go".to_string()));
    }

    #[test]
    fn test_truncates_to_max_keywords() {
        let text = "one1 two2 three3 four4 five5 six6";
        let keywords = extract_keywords(text, 3);
        assert_eq!(keywords.len(), 3);
    }

    #[test]
    fn test_deterministic_across_calls() {
        let text = "Built distributed systems in Rust. Deployed Rust services \
                    on Kubernetes. Mentored engineers on distributed design.";
        let first = extract_keywords(text, DEFAULT_MAX_KEYWORDS);
        for _ in 0..10 {
            assert_eq!(extract_keywords(text, DEFAULT_MAX_KEYWORDS), first);
        }
    }

    #[test]
    fn test_empty_text_yields_empty_list() {
        assert!(extract_keywords("", DEFAULT_MAX_KEYWORDS).is_empty());
        assert!(extract_keywords("a an to", DEFAULT_MAX_KEYWORDS).is_empty());
    }

    #[test]
    fn test_case_folds_before_counting() {
        let keywords = extract_keywords("Rust RUST rust python", DEFAULT_MAX_KEYWORDS);
        assert_eq!(keywords[0], "rust");
        assert_eq!(keywords[1], "python");
    }
}
