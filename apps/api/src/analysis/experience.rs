//! Experience-years extraction via a declarative pattern table.
//!
//! Reports the strongest experience claim in the text, not an aggregate:
//! the maximum years figure across every match of every pattern. A resume
//! typically states its most senior qualification once, so max is the
//! faithful read.

use once_cell::sync::Lazy;
use regex::Regex;

/// Patterns evaluated uniformly over the raw text; each captures the years
/// figure in group 1. Order is irrelevant because the result is a maximum.
static EXPERIENCE_PATTERNS: Lazy<Vec<Regex>> = Lazy::new(|| {
    [
        r"(?i)(\d+)\s*\+\s*years?",       // "5+ years"
        r"(?i)(\d+)\s*-\s*(\d+)\s*years?", // "3-5 years" (lower bound counts)
        r"(?i)(\d+)\s*years?",             // "4 years"
    ]
    .iter()
    .map(|p| Regex::new(p).expect("experience pattern must compile"))
    .collect()
});

/// Extracts the maximum years-of-experience figure found anywhere in `text`,
/// or 0 when no pattern matches. Total over arbitrary input.
pub fn extract_experience(text: &str) -> u32 {
    let mut max_years = 0;
    for pattern in EXPERIENCE_PATTERNS.iter() {
        for caps in pattern.captures_iter(text) {
            if let Some(years) = caps.get(1).and_then(|m| m.as_str().parse::<u32>().ok()) {
                max_years = max_years.max(years);
            }
        }
    }
    max_years
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plus_years_pattern() {
        assert_eq!(extract_experience("5+ years of backend work"), 5);
    }

    #[test]
    fn test_range_pattern_upper_bound_wins_via_max() {
        // The range pattern captures 3; the plain pattern also matches the
        // "5 years" suffix, so the overall maximum is 5.
        assert_eq!(extract_experience("3-5 years required"), 5);
    }

    #[test]
    fn test_plain_years_pattern() {
        assert_eq!(extract_experience("4 years in fintech"), 4);
    }

    #[test]
    fn test_max_across_multiple_claims() {
        let text = "5+ years of experience, previously 3 years";
        assert_eq!(extract_experience(text), 5);
    }

    #[test]
    fn test_case_insensitive_and_singular() {
        assert_eq!(extract_experience("1 Year as team lead"), 1);
        assert_eq!(extract_experience("7 YEARS shipping"), 7);
    }

    #[test]
    fn test_no_match_yields_zero() {
        assert_eq!(extract_experience("seasoned engineer, no numbers here"), 0);
        assert_eq!(extract_experience(""), 0);
    }

    #[test]
    fn test_years_without_figure_is_ignored() {
        assert_eq!(extract_experience("many years of experience"), 0);
    }
}
