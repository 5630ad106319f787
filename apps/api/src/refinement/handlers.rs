//! Axum route handlers for the Refinement API.

use axum::{extract::State, Json};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::errors::AppError;
use crate::models::resume::ResumeRecord;
use crate::state::AppState;

// ────────────────────────────────────────────────────────────────────────────
// Request / Response types
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Deserialize)]
pub struct OptimizeRequest {
    /// When present, the refined record is saved as a generated resume for this user.
    /// A failed save is logged and the response simply carries no `resume_id`.
    #[serde(default)]
    pub user_id: Option<Uuid>,
    pub record: ResumeRecord,
}

#[derive(Debug, Serialize)]
pub struct OptimizeResponse {
    pub record: ResumeRecord,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub resume_id: Option<Uuid>,
}

#[derive(Debug, Deserialize)]
pub struct CoverLetterRequest {
    pub record: ResumeRecord,
}

#[derive(Debug, Serialize)]
pub struct CoverLetterResponse {
    pub cover_letter: String,
}

// ────────────────────────────────────────────────────────────────────────────
// Handlers
// ────────────────────────────────────────────────────────────────────────────

/// POST /api/v1/resumes/optimize
///
/// Tailors the record to its target job. Cover letter generation is best effort:
/// the response carries `record.cover_letter` only if it succeeded.
pub async fn handle_optimize(
    State(state): State<AppState>,
    Json(request): Json<OptimizeRequest>,
) -> Result<Json<OptimizeResponse>, AppError> {
    let response = match request.user_id {
        Some(user_id) => {
            let saved = state
                .resumes
                .optimize_and_save(user_id, &request.record)
                .await?;
            OptimizeResponse {
                record: saved.record,
                resume_id: saved.resume_id,
            }
        }
        None => OptimizeResponse {
            record: state.resumes.optimize(&request.record).await?,
            resume_id: None,
        },
    };

    Ok(Json(response))
}

/// POST /api/v1/resumes/cover-letter
///
/// Generates a cover letter on its own. Unlike `optimize`, failures are returned.
pub async fn handle_cover_letter(
    State(state): State<AppState>,
    Json(request): Json<CoverLetterRequest>,
) -> Result<Json<CoverLetterResponse>, AppError> {
    let cover_letter = state.resumes.cover_letter(&request.record).await?;
    Ok(Json(CoverLetterResponse { cover_letter }))
}
