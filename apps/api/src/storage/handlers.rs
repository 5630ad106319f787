//! Axum route handlers for drafts and generated resumes.

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use serde::Deserialize;
use uuid::Uuid;

use crate::errors::AppError;
use crate::models::generated::GeneratedResumeSummary;
use crate::models::resume::ResumeRecord;
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct UpdateResumeRequest {
    /// Defaults to the record's own snapshot title.
    #[serde(default)]
    pub title: Option<String>,
    pub record: ResumeRecord,
}

/// GET /api/v1/drafts/:user_id
pub async fn handle_get_draft(
    State(state): State<AppState>,
    Path(user_id): Path<Uuid>,
) -> Result<Json<ResumeRecord>, AppError> {
    state
        .drafts
        .load_draft(user_id)
        .await?
        .map(Json)
        .ok_or_else(|| AppError::NotFound(format!("No draft for user {user_id}")))
}

/// PUT /api/v1/drafts/:user_id
pub async fn handle_save_draft(
    State(state): State<AppState>,
    Path(user_id): Path<Uuid>,
    Json(record): Json<ResumeRecord>,
) -> Result<StatusCode, AppError> {
    state.drafts.save_draft(user_id, &record).await?;
    Ok(StatusCode::NO_CONTENT)
}

/// DELETE /api/v1/drafts/:user_id
pub async fn handle_clear_draft(
    State(state): State<AppState>,
    Path(user_id): Path<Uuid>,
) -> Result<StatusCode, AppError> {
    state.drafts.clear_draft(user_id).await?;
    Ok(StatusCode::NO_CONTENT)
}

/// GET /api/v1/users/:user_id/resumes
pub async fn handle_list_resumes(
    State(state): State<AppState>,
    Path(user_id): Path<Uuid>,
) -> Result<Json<Vec<GeneratedResumeSummary>>, AppError> {
    Ok(Json(state.repository.list_generated(user_id).await?))
}

/// GET /api/v1/resumes/:id
pub async fn handle_get_resume(
    State(state): State<AppState>,
    Path(resume_id): Path<Uuid>,
) -> Result<Json<ResumeRecord>, AppError> {
    state
        .repository
        .get_generated(resume_id)
        .await?
        .map(Json)
        .ok_or_else(|| AppError::NotFound(format!("Resume {resume_id} not found")))
}

/// PUT /api/v1/resumes/:id
pub async fn handle_update_resume(
    State(state): State<AppState>,
    Path(resume_id): Path<Uuid>,
    Json(request): Json<UpdateResumeRequest>,
) -> Result<StatusCode, AppError> {
    let title = request
        .title
        .filter(|t| !t.trim().is_empty())
        .unwrap_or_else(|| request.record.snapshot_title());

    if state
        .repository
        .update_generated(resume_id, &title, &request.record)
        .await?
    {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(AppError::NotFound(format!("Resume {resume_id} not found")))
    }
}

/// DELETE /api/v1/resumes/:id
pub async fn handle_delete_resume(
    State(state): State<AppState>,
    Path(resume_id): Path<Uuid>,
) -> Result<StatusCode, AppError> {
    if state.repository.delete_generated(resume_id).await? {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(AppError::NotFound(format!("Resume {resume_id} not found")))
    }
}
