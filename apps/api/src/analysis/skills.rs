//! Skill detection against a fixed, curated vocabulary.
//!
//! Matching is exact (no fuzzy or partial matches) and word-boundary aware,
//! so "go" never fires inside "google" and multi-word skills like
//! "ruby on rails" only match as a phrase. A term absent from the vocabulary
//! is never reported, which bounds precision but rules out spurious
//! substring hits.

/// Canonical skill vocabulary, in presentation order. Process-wide and
/// immutable; matching is case-insensitive against the raw (un-normalized)
/// text so punctuated names like "node.js" and "c++" stay matchable.
pub static SKILL_VOCABULARY: &[&str] = &[
    // Programming languages
    "javascript", "typescript", "python", "java", "c++", "c#", "php", "ruby",
    "swift", "kotlin", "go", "rust", "scala", "r", "matlab",
    // Frontend
    "react", "angular", "vue", "svelte", "next.js", "nuxt.js", "html", "css",
    "sass", "less", "bootstrap", "tailwind", "webpack", "vite",
    // Backend
    "node.js", "express", "nestjs", "django", "flask", "spring", "laravel",
    "ruby on rails", "asp.net", "fastapi",
    // Databases
    "mysql", "postgresql", "mongodb", "redis", "sqlite", "oracle", "sql server",
    "cassandra", "dynamodb", "firebase",
    // Cloud & DevOps
    "aws", "azure", "google cloud", "docker", "kubernetes", "jenkins", "git",
    "terraform", "ansible", "linux", "nginx", "apache",
    // Mobile
    "react native", "flutter", "android", "ios", "xcode",
    // AI / ML
    "tensorflow", "pytorch", "keras", "scikit-learn", "pandas", "numpy",
    "opencv", "nlp", "computer vision",
    // Soft skills
    "leadership", "communication", "teamwork", "problem solving", "creativity",
    "adaptability", "time management", "critical thinking", "collaboration",
];

/// Returns the vocabulary entries present in `text`, preserving vocabulary
/// order (not text order). Deduplicated by construction: each entry is
/// reported at most once.
pub fn extract_skills(text: &str) -> Vec<String> {
    let haystack = text.to_lowercase();
    SKILL_VOCABULARY
        .iter()
        .filter(|skill| contains_whole_word(&haystack, skill))
        .map(|skill| skill.to_string())
        .collect()
}

/// Case-folded whole-word search: an occurrence counts only when the
/// characters adjacent to the matched span are absent or non-alphanumeric.
/// `needle` is drawn from the ASCII vocabulary, so byte offsets returned by
/// `find` always sit on char boundaries.
fn contains_whole_word(haystack: &str, needle: &str) -> bool {
    let mut from = 0;
    while let Some(offset) = haystack[from..].find(needle) {
        let begin = from + offset;
        let end = begin + needle.len();

        let clear_before = haystack[..begin]
            .chars()
            .next_back()
            .map_or(true, |c| !c.is_alphanumeric());
        let clear_after = haystack[end..]
            .chars()
            .next()
            .map_or(true, |c| !c.is_alphanumeric());

        if clear_before && clear_after {
            return true;
        }
        from = begin + 1;
    }
    false
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_detects_skills_case_insensitively() {
        let skills = extract_skills("Expert in React, NODE.JS and PostgreSQL.");
        assert_eq!(skills, vec!["react", "node.js", "postgresql"]);
    }

    #[test]
    fn test_word_boundary_blocks_substring_hits() {
        // "go" must not match inside "google" or "golang-specific".
        let skills = extract_skills("Worked at Google on golang-specific tooling");
        assert!(!skills.contains(&"go".to_string()));
    }

    #[test]
    fn test_go_matches_as_standalone_word() {
        let skills = extract_skills("Shipped services written in Go.");
        assert!(skills.contains(&"go".to_string()));
    }

    #[test]
    fn test_java_does_not_match_inside_javascript() {
        let skills = extract_skills("10 years of JavaScript");
        assert!(skills.contains(&"javascript".to_string()));
        assert!(!skills.contains(&"java".to_string()));
    }

    #[test]
    fn test_multi_word_skill_matches_only_as_phrase() {
        assert!(extract_skills("built apps with Ruby on Rails")
            .contains(&"ruby on rails".to_string()));
        // "machine" and "learning" split across clauses — no phrase skill here,
        // but "ruby" alone still matches as its own vocabulary entry.
        let split = extract_skills("ruby projects and rails migrations");
        assert!(split.contains(&"ruby".to_string()));
        assert!(!split.contains(&"ruby on rails".to_string()));
    }

    #[test]
    fn test_punctuated_skill_names_match() {
        let skills = extract_skills("C++ and C# experience; some Node.js too.");
        assert!(skills.contains(&"c++".to_string()));
        assert!(skills.contains(&"c#".to_string()));
        assert!(skills.contains(&"node.js".to_string()));
    }

    #[test]
    fn test_result_preserves_vocabulary_order() {
        let skills = extract_skills("docker before python, kubernetes before javascript");
        // Vocabulary order: javascript < python < docker < kubernetes.
        assert_eq!(skills, vec!["javascript", "python", "docker", "kubernetes"]);
    }

    #[test]
    fn test_never_reports_terms_outside_vocabulary() {
        let skills = extract_skills("elixir erlang haskell zig");
        assert!(skills.is_empty());
    }

    #[test]
    fn test_empty_text_yields_no_skills() {
        assert!(extract_skills("").is_empty());
    }
}
