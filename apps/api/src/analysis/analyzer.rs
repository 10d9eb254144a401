//! Analysis orchestration — the public entry point of the engine.
//!
//! Sequences keyword, skill, and experience extraction over a
//! (resume, job description) pair, compares the two fingerprints, and
//! assembles the immutable `AnalysisResult`. Pure with respect to its
//! inputs; performs no I/O.

use serde::{Deserialize, Serialize};

use crate::analysis::document::DocumentProfile;
use crate::analysis::feedback::{
    generate_suggestions, identify_improvements, identify_strengths,
};
use crate::analysis::scoring::score_components;

/// Display caps on the keyword lists; the full counts are always reported
/// alongside.
const MATCHED_KEYWORD_DISPLAY_CAP: usize = 15;
const MISSING_KEYWORD_DISPLAY_CAP: usize = 10;
const SKILL_LIST_DISPLAY_CAP: usize = 15;

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct KeywordAnalysis {
    pub matched: Vec<String>,
    pub missing: Vec<String>,
    pub total_matches: usize,
    pub total_required: usize,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SkillsAnalysis {
    pub matched: Vec<String>,
    pub missing: Vec<String>,
    pub resume_skills: Vec<String>,
    pub job_skills: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExperienceAnalysis {
    pub resume_experience: u32,
    pub job_required_experience: u32,
}

/// Full structured output of one analysis call. Immutable once built.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalysisResult {
    pub fit_score: u32,
    pub keyword_analysis: KeywordAnalysis,
    pub skills_analysis: SkillsAnalysis,
    pub experience_analysis: ExperienceAnalysis,
    pub suggestions: Vec<String>,
    pub strengths: Vec<String>,
    pub improvements: Vec<String>,
}

/// Analyzes a resume against a job description and returns the full report.
///
/// Matched/missing sets are computed on the job side: a job keyword or skill
/// is matched when the resume also carries it, missing otherwise. Short or
/// empty input is not rejected here — it simply yields minimal scores and
/// empty lists; hard validation belongs to the calling layer.
pub fn generate_analysis(resume_text: &str, job_text: &str) -> AnalysisResult {
    let resume = DocumentProfile::build(resume_text);
    let job = DocumentProfile::build(job_text);

    let (matched_keywords, missing_keywords): (Vec<String>, Vec<String>) = job
        .keywords
        .iter()
        .cloned()
        .partition(|k| resume.keywords.contains(k));

    let (matched_skills, missing_skills): (Vec<String>, Vec<String>) = job
        .skills
        .iter()
        .cloned()
        .partition(|s| resume.skills.contains(s));

    let fit = score_components(&resume, &job).total();

    let suggestions = generate_suggestions(&missing_keywords, &missing_skills, fit);
    let strengths = identify_strengths(&resume);
    let improvements = identify_improvements(&missing_keywords, &missing_skills);

    AnalysisResult {
        fit_score: fit.round() as u32,
        keyword_analysis: KeywordAnalysis {
            total_matches: matched_keywords.len(),
            total_required: job.keywords.len(),
            matched: capped(matched_keywords, MATCHED_KEYWORD_DISPLAY_CAP),
            missing: capped(missing_keywords, MISSING_KEYWORD_DISPLAY_CAP),
        },
        skills_analysis: SkillsAnalysis {
            matched: matched_skills,
            missing: missing_skills,
            resume_skills: capped(resume.skills.clone(), SKILL_LIST_DISPLAY_CAP),
            job_skills: capped(job.skills.clone(), SKILL_LIST_DISPLAY_CAP),
        },
        experience_analysis: ExperienceAnalysis {
            resume_experience: resume.experience_years,
            job_required_experience: job.experience_years,
        },
        suggestions,
        strengths,
        improvements,
    }
}

fn capped(mut items: Vec<String>, cap: usize) -> Vec<String> {
    items.truncate(cap);
    items
}
