//! Per-document fingerprint built once per analysis call.

use crate::analysis::experience::extract_experience;
use crate::analysis::keywords::{extract_keywords, DEFAULT_MAX_KEYWORDS};
use crate::analysis::normalize::normalize_text;
use crate::analysis::skills::extract_skills;

/// The comparable fingerprint of one text document: ranked keywords, detected
/// skills, and the experience-years signal. Transient — one per analysis
/// call, never shared or mutated after construction.
#[derive(Debug, Clone)]
pub struct DocumentProfile {
    pub raw_text: String,
    /// Canonical form the keyword stage ran over. Not consulted again after
    /// construction.
    #[allow(dead_code)]
    pub normalized_text: String,
    /// Highest-weight first, deduplicated, capped at 20.
    pub keywords: Vec<String>,
    /// Vocabulary entries found, in vocabulary order.
    pub skills: Vec<String>,
    /// Maximum years figure found, 0 if none.
    pub experience_years: u32,
}

impl DocumentProfile {
    /// Runs every extraction stage over `text`. Pure: identical input always
    /// yields an identical profile.
    pub fn build(text: &str) -> Self {
        let normalized_text = normalize_text(text);
        // Normalization is idempotent, so extracting from the normalized
        // form is equivalent to extracting from the raw text.
        let keywords = extract_keywords(&normalized_text, DEFAULT_MAX_KEYWORDS);
        let skills = extract_skills(text);
        let experience_years = extract_experience(text);

        DocumentProfile {
            raw_text: text.to_string(),
            normalized_text,
            keywords,
            skills,
            experience_years,
        }
    }
}
