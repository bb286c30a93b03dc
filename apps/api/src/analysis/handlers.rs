//! Axum route handlers for the Analysis API.

use axum::{
    extract::{rejection::JsonRejection, Multipart, State},
    Json,
};
use serde::Serialize;

use crate::analysis::aggregate::MatchRating;
use crate::errors::AppError;
use crate::models::report::{AnalysisInput, AnalysisReport};
use crate::state::AppState;

/// Extensions of document formats whose text extraction is not handled here.
const BINARY_DOCUMENT_EXTENSIONS: &[&str] = &[".pdf", ".doc", ".docx"];
const BINARY_DOCUMENT_TYPES: &[&str] = &[
    "application/pdf",
    "application/msword",
    "application/vnd.openxmlformats-officedocument.wordprocessingml.document",
];

// ────────────────────────────────────────────────────────────────────────────
// Response types
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Serialize)]
pub struct AnalyzeResponse {
    #[serde(flatten)]
    pub report: AnalysisReport,
    pub rating: MatchRating,
}

impl From<AnalysisReport> for AnalyzeResponse {
    fn from(report: AnalysisReport) -> Self {
        let rating = MatchRating::from_score(report.overall_score);
        Self { report, rating }
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Handlers
// ────────────────────────────────────────────────────────────────────────────

/// POST /api/v1/analyze
///
/// Scores plain resume text against a job description.
pub async fn handle_analyze(
    State(state): State<AppState>,
    request: Result<Json<AnalysisInput>, JsonRejection>,
) -> Result<Json<AnalyzeResponse>, AppError> {
    let Json(request) = request.map_err(|e| AppError::Validation(e.body_text()))?;
    let report = state.analyzer.analyze(request).await?;
    Ok(Json(report.into()))
}

/// POST /api/v1/analyze/upload
///
/// Multipart form with a `resume` file and a `jobDescription` text field.
/// The file must already be plain UTF-8 text.
pub async fn handle_analyze_upload(
    State(state): State<AppState>,
    mut multipart: Multipart,
) -> Result<Json<AnalyzeResponse>, AppError> {
    let mut resume_text: Option<String> = None;
    let mut job_description: Option<String> = None;

    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| AppError::Validation(format!("Malformed multipart body: {e}")))?
    {
        let name = field.name().map(str::to_string);
        match name.as_deref() {
            Some("resume") => {
                let file_name = field.file_name().map(str::to_string);
                let content_type = field.content_type().map(str::to_string);
                ensure_plain_text(file_name.as_deref(), content_type.as_deref())?;

                let bytes = field
                    .bytes()
                    .await
                    .map_err(|e| AppError::Validation(format!("Failed to read resume: {e}")))?;
                let text = String::from_utf8(bytes.to_vec()).map_err(|_| {
                    AppError::UnsupportedMedia("Resume file must be UTF-8 plain text".to_string())
                })?;
                resume_text = Some(text);
            }
            Some("jobDescription") => {
                let text = field.text().await.map_err(|e| {
                    AppError::Validation(format!("Failed to read jobDescription: {e}"))
                })?;
                job_description = Some(text);
            }
            _ => {}
        }
    }

    let (Some(resume_text), Some(job_description)) = (resume_text, job_description) else {
        return Err(AppError::Validation(
            "Resume file and job description are required".to_string(),
        ));
    };

    let report = state
        .analyzer
        .analyze(AnalysisInput {
            resume_text,
            job_description,
        })
        .await?;
    Ok(Json(report.into()))
}

/// Rejects uploads that declare a binary document format.
fn ensure_plain_text(file_name: Option<&str>, content_type: Option<&str>) -> Result<(), AppError> {
    let by_extension = file_name
        .map(|name| name.to_ascii_lowercase())
        .is_some_and(|name| BINARY_DOCUMENT_EXTENSIONS.iter().any(|ext| name.ends_with(ext)));
    let by_type = content_type.is_some_and(|ct| BINARY_DOCUMENT_TYPES.contains(&ct));

    if by_extension || by_type {
        return Err(AppError::UnsupportedMedia(
            "Document text extraction is not supported; upload a plain-text resume".to_string(),
        ));
    }
    Ok(())
}
