//! Feedback synthesis — suggestions, strengths, and improvements derived
//! from the computed match sets. Pure functions, fixed output order, no
//! randomness.

use once_cell::sync::Lazy;
use regex::Regex;

use crate::analysis::document::DocumentProfile;

/// Quantified-achievement cues: a percentage or a currency amount anywhere
/// in the resume. Evaluated uniformly like the experience table.
static ACHIEVEMENT_PATTERNS: Lazy<Vec<Regex>> = Lazy::new(|| {
    [r"\d+%", r"\$\d+"]
        .iter()
        .map(|p| Regex::new(p).expect("achievement pattern must compile"))
        .collect()
});

const SKILL_BREADTH_THRESHOLD: usize = 8;
const EXPERIENCE_STRENGTH_YEARS: u32 = 3;

/// Actionable suggestions ordered from most specific (named keywords/skills)
/// to generic best-practice tips, which always close the list.
pub fn generate_suggestions(
    missing_keywords: &[String],
    missing_skills: &[String],
    score: f64,
) -> Vec<String> {
    let mut suggestions = Vec::new();

    if !missing_keywords.is_empty() {
        let named: Vec<&str> = missing_keywords.iter().take(5).map(String::as_str).collect();
        suggestions.push(format!("Add these important keywords: {}", named.join(", ")));
    }

    if !missing_skills.is_empty() {
        let named: Vec<&str> = missing_skills.iter().take(3).map(String::as_str).collect();
        suggestions.push(format!(
            "Consider highlighting these skills: {}",
            named.join(", ")
        ));
    }

    if score < 70.0 {
        suggestions.push(
            "Focus on aligning your experience more closely with the job requirements".to_string(),
        );
    }

    if score > 80.0 {
        suggestions.push(
            "Great match! Consider adding quantifiable achievements to stand out".to_string(),
        );
    }

    suggestions.push("Use action verbs and specific metrics to demonstrate impact".to_string());
    suggestions
        .push("Ensure your resume is ATS-friendly with clear section headings".to_string());

    suggestions
}

/// Strengths are judged on the resume alone: skill breadth, experience
/// threshold, leadership lexical cues, and quantified-achievement cues.
/// When none hold, a single fallback entry is emitted.
pub fn identify_strengths(resume: &DocumentProfile) -> Vec<String> {
    let mut strengths = Vec::new();

    if resume.skills.len() > SKILL_BREADTH_THRESHOLD {
        strengths.push("Diverse and comprehensive skill set".to_string());
    }

    if resume.experience_years >= EXPERIENCE_STRENGTH_YEARS {
        strengths.push(format!(
            "Substantial professional experience ({}+ years)",
            resume.experience_years
        ));
    }

    let lower = resume.raw_text.to_lowercase();
    if lower.contains("lead") || lower.contains("manage") {
        strengths.push("Demonstrated leadership capabilities".to_string());
    }

    if ACHIEVEMENT_PATTERNS
        .iter()
        .any(|p| p.is_match(&resume.raw_text))
    {
        strengths.push("Quantifiable achievements highlighted".to_string());
    }

    if strengths.is_empty() {
        strengths.push("Strong foundational qualifications for this role".to_string());
    }
    strengths
}

/// Improvement recommendations, closing with two generic tips.
pub fn identify_improvements(
    missing_keywords: &[String],
    missing_skills: &[String],
) -> Vec<String> {
    let mut improvements = Vec::new();

    if missing_keywords.len() > 5 {
        improvements
            .push("Increase keyword density for better ATS compatibility".to_string());
    }

    if !missing_skills.is_empty() {
        let named: Vec<&str> = missing_skills.iter().take(3).map(String::as_str).collect();
        improvements.push(format!("Develop experience with: {}", named.join(", ")));
    }

    improvements
        .push("Add more specific metrics and results to quantify achievements".to_string());
    improvements.push("Use industry-standard terminology and keywords".to_string());

    improvements
}

#[cfg(test)]
mod tests {
    use super::*;

    fn strings(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_suggestions_name_missing_keywords_and_skills() {
        let keywords = strings(&["grpc", "terraform", "observability"]);
        let skills = strings(&["kubernetes", "aws"]);
        let suggestions = generate_suggestions(&keywords, &skills, 50.0);

        assert!(suggestions[0].contains("grpc"));
        assert!(suggestions[0].contains("observability"));
        assert!(suggestions[1].contains("kubernetes"));
        assert!(suggestions[1].contains("aws"));
    }

    #[test]
    fn test_suggestions_cap_named_items() {
        let keywords = strings(&["k1", "k2", "k3", "k4", "k5", "k6", "k7"]);
        let suggestions = generate_suggestions(&keywords, &[], 75.0);
        assert!(suggestions[0].contains("k5"));
        assert!(!suggestions[0].contains("k6"));
    }

    #[test]
    fn test_low_score_adds_alignment_tip() {
        let suggestions = generate_suggestions(&[], &[], 40.0);
        assert!(suggestions
            .iter()
            .any(|s| s.contains("aligning your experience")));
    }

    #[test]
    fn test_high_score_adds_differentiation_tip() {
        let suggestions = generate_suggestions(&[], &[], 90.0);
        assert!(suggestions.iter().any(|s| s.contains("Great match")));
    }

    #[test]
    fn test_generic_tips_always_close_the_list() {
        let suggestions = generate_suggestions(&[], &[], 75.0);
        let n = suggestions.len();
        assert!(suggestions[n - 2].contains("action verbs"));
        assert!(suggestions[n - 1].contains("ATS-friendly"));
    }

    #[test]
    fn test_strengths_all_conditions() {
        let resume = DocumentProfile::build(
            "Lead engineer, 6+ years. Cut costs by 30% ($2M saved). Skills: \
             rust, python, go, docker, kubernetes, aws, terraform, linux, \
             react, postgresql.",
        );
        let strengths = identify_strengths(&resume);
        assert_eq!(strengths.len(), 4);
        assert!(strengths[0].contains("skill set"));
        assert!(strengths[1].contains("6+ years"));
        assert!(strengths[2].contains("leadership"));
        assert!(strengths[3].contains("Quantifiable"));
    }

    #[test]
    fn test_strengths_fallback_when_nothing_holds() {
        let resume = DocumentProfile::build("entry level applicant");
        let strengths = identify_strengths(&resume);
        assert_eq!(
            strengths,
            vec!["Strong foundational qualifications for this role".to_string()]
        );
    }

    #[test]
    fn test_improvements_density_tip_only_past_five_missing() {
        let five = strings(&["a1", "a2", "a3", "a4", "a5"]);
        let six = strings(&["a1", "a2", "a3", "a4", "a5", "a6"]);
        assert!(!identify_improvements(&five, &[])
            .iter()
            .any(|s| s.contains("keyword density")));
        assert!(identify_improvements(&six, &[])
            .iter()
            .any(|s| s.contains("keyword density")));
    }

    #[test]
    fn test_improvements_name_missing_skills() {
        let improvements = identify_improvements(&[], &strings(&["terraform"]));
        assert!(improvements[0].contains("terraform"));
        assert_eq!(improvements.len(), 3); // named + two generic tips
    }
}
