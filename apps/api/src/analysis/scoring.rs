//! Composite fit score: keyword overlap, skill overlap, and experience
//! alignment combined into one 0–100 number.

use crate::analysis::document::DocumentProfile;

/// Weight of the keyword-overlap component.
pub const KEYWORD_WEIGHT: f64 = 40.0;
/// Weight of the skill-overlap component.
pub const SKILL_WEIGHT: f64 = 40.0;
/// Weight of the experience-alignment component.
pub const EXPERIENCE_WEIGHT: f64 = 20.0;
/// Neutral experience score when the job posting states no requirement.
pub const NEUTRAL_EXPERIENCE_SCORE: f64 = 10.0;

/// The three score components before summation. Kept separate so callers can
/// explain the total.
#[derive(Debug, Clone, Copy)]
pub struct ScoreBreakdown {
    pub keyword_score: f64,
    pub skill_score: f64,
    pub experience_score: f64,
}

impl ScoreBreakdown {
    /// Total fit score, clamped to 100. Rounding to an integer happens only
    /// at the presentation edge.
    pub fn total(&self) -> f64 {
        (self.keyword_score + self.skill_score + self.experience_score).min(100.0)
    }
}

/// Computes the three components from two already-built profiles.
///
/// The `max(…, 1)` divisor guards against an empty job-side set; the
/// numerator is 0 in that case too, so the component is 0, not inflated.
pub fn score_components(resume: &DocumentProfile, job: &DocumentProfile) -> ScoreBreakdown {
    let matched_keywords = job
        .keywords
        .iter()
        .filter(|k| resume.keywords.contains(*k))
        .count();
    let keyword_score =
        matched_keywords as f64 / job.keywords.len().max(1) as f64 * KEYWORD_WEIGHT;

    let matched_skills = job
        .skills
        .iter()
        .filter(|s| resume.skills.contains(*s))
        .count();
    let skill_score = matched_skills as f64 / job.skills.len().max(1) as f64 * SKILL_WEIGHT;

    // Exceeding the stated requirement contributes no extra points; a job
    // with no stated requirement scores the neutral default.
    let experience_score = if job.experience_years > 0 {
        f64::from(resume.experience_years.min(job.experience_years))
            / f64::from(job.experience_years)
            * EXPERIENCE_WEIGHT
    } else {
        NEUTRAL_EXPERIENCE_SCORE
    };

    ScoreBreakdown {
        keyword_score,
        skill_score,
        experience_score,
    }
}

/// Convenience entry point: builds both profiles and returns the total score
/// in [0, 100]. The orchestrator goes through `score_components` directly to
/// reuse its profiles.
#[allow(dead_code)]
pub fn calculate_match_score(resume_text: &str, job_text: &str) -> f64 {
    let resume = DocumentProfile::build(resume_text);
    let job = DocumentProfile::build(job_text);
    score_components(&resume, &job).total()
}
