//! Static stop-word table excluded from keyword ranking.

use once_cell::sync::Lazy;
use std::collections::HashSet;

/// Common function words that carry no signal for resume/JD matching.
/// Initialized once at first use, never mutated (initialize-once, read-many).
static STOP_WORDS: Lazy<HashSet<&'static str>> = Lazy::new(|| {
    [
        "the", "a", "an", "and", "or", "but", "in", "on", "at", "to", "for",
        "of", "with", "by", "as", "is", "was", "are", "were", "be", "been",
        "have", "has", "had", "do", "does", "did", "will", "would", "could",
        "should", "may", "might", "must", "can", "its", "their", "what",
    ]
    .into_iter()
    .collect()
});

/// True when `word` is a stop word. Expects already-lowercased input.
pub fn is_stop_word(word: &str) -> bool {
    STOP_WORDS.contains(word)
}
