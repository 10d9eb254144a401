//! Axum route handlers for the Analysis API. All validation and transport
//! concerns live here; the engine itself never rejects input.

use axum::extract::{Multipart, State};
use axum::Json;
use bytes::Bytes;
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::analysis::analyzer::{generate_analysis, AnalysisResult};
use crate::errors::AppError;
use crate::extract::{extractor_for, FileKind};
use crate::state::AppState;

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalyzeTextRequest {
    #[serde(default)]
    pub resume_text: String,
    #[serde(default)]
    pub job_description: String,
}

#[derive(Debug, Serialize)]
pub struct AnalyzeResponse {
    pub success: bool,
    pub analysis: AnalysisResult,
}

/// POST /api/analyze/text
pub async fn handle_analyze_text(
    State(state): State<AppState>,
    Json(req): Json<AnalyzeTextRequest>,
) -> Result<Json<AnalyzeResponse>, AppError> {
    if req.resume_text.trim().is_empty() || req.job_description.trim().is_empty() {
        return Err(AppError::Validation(
            "Resume text and job description are required".to_string(),
        ));
    }

    let min = state.config.min_text_len;
    if req.resume_text.chars().count() < min || req.job_description.chars().count() < min {
        return Err(AppError::Validation(
            "Both resume and job description should have meaningful content".to_string(),
        ));
    }

    let analysis = generate_analysis(&req.resume_text, &req.job_description);
    info!(fit_score = analysis.fit_score, "text analysis complete");

    Ok(Json(AnalyzeResponse {
        success: true,
        analysis,
    }))
}

/// POST /api/analyze/file
///
/// Multipart request with a `resume` file part (pdf/doc/docx/txt) and a
/// `jobDescription` text part. The upload stays in memory; nothing is
/// written to disk.
pub async fn handle_analyze_file(
    State(state): State<AppState>,
    mut multipart: Multipart,
) -> Result<Json<AnalyzeResponse>, AppError> {
    let mut resume_file: Option<(FileKind, String, Bytes)> = None;
    let mut job_description: Option<String> = None;

    while let Some(field) = multipart.next_field().await? {
        let name = field.name().map(str::to_string);
        match name.as_deref() {
            Some("resume") => {
                let file_name = field.file_name().unwrap_or_default().to_string();
                let kind = FileKind::from_file_name(&file_name).ok_or_else(|| {
                    AppError::UnsupportedFileType(format!(
                        "Invalid file type '{file_name}'. Only PDF, DOC, DOCX, and TXT files are allowed."
                    ))
                })?;
                resume_file = Some((kind, file_name, field.bytes().await?));
            }
            Some("jobDescription") => job_description = Some(field.text().await?),
            _ => {}
        }
    }

    let (kind, file_name, data) = resume_file.ok_or_else(|| {
        AppError::Validation("Resume file and job description are required".to_string())
    })?;
    let job_description = job_description.ok_or_else(|| {
        AppError::Validation("Resume file and job description are required".to_string())
    })?;

    let min = state.config.min_text_len;
    if job_description.chars().count() < min {
        return Err(AppError::Validation(
            "Job description should have meaningful content".to_string(),
        ));
    }

    let resume_text = extractor_for(kind).extract(&data)?;
    if resume_text.trim().chars().count() < min {
        return Err(AppError::UnprocessableEntity(
            "Could not extract sufficient text from the resume file".to_string(),
        ));
    }

    let analysis = generate_analysis(&resume_text, &job_description);
    info!(
        fit_score = analysis.fit_score,
        file = %file_name,
        "file analysis complete"
    );

    Ok(Json(AnalyzeResponse {
        success: true,
        analysis,
    }))
}
