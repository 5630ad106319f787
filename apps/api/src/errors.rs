use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

use crate::refinement::{CoverLetterError, FailureKind, RefineError};
use crate::storage::StorageError;

/// Application-level error type.
/// Implements `IntoResponse` so Axum handlers can return `Result<T, AppError>`.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("AI service overloaded: {0}")]
    Overloaded(String),

    #[error("LLM error: {0}")]
    Llm(String),

    #[error("Storage error: {0}")]
    Storage(#[from] StorageError),

    #[error("Internal server error: {0}")]
    Internal(#[from] anyhow::Error),
}

impl From<RefineError> for AppError {
    fn from(err: RefineError) -> Self {
        match err {
            RefineError::Validation(e) => AppError::Validation(e.reason),
            RefineError::Failed {
                kind: FailureKind::Overloaded,
                ..
            } => AppError::Overloaded(err.to_string()),
            RefineError::Failed { .. } => AppError::Llm(err.to_string()),
        }
    }
}

impl From<CoverLetterError> for AppError {
    fn from(err: CoverLetterError) -> Self {
        match err {
            CoverLetterError::Validation(e) => AppError::Validation(e.reason),
            CoverLetterError::Generation(msg) => AppError::Llm(msg),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, code, message) = match &self {
            AppError::NotFound(msg) => (StatusCode::NOT_FOUND, "NOT_FOUND", msg.clone()),
            AppError::Validation(msg) => (StatusCode::BAD_REQUEST, "VALIDATION_ERROR", msg.clone()),
            AppError::Overloaded(msg) => {
                tracing::warn!("AI service overloaded: {msg}");
                (
                    StatusCode::SERVICE_UNAVAILABLE,
                    "AI_OVERLOADED",
                    "The AI service is busy right now. Please try again in a minute.".to_string(),
                )
            }
            AppError::Llm(msg) => {
                tracing::error!("LLM error: {msg}");
                (
                    StatusCode::BAD_GATEWAY,
                    "LLM_ERROR",
                    "An AI processing error occurred".to_string(),
                )
            }
            AppError::Storage(e) => {
                tracing::error!("Storage error: {e}");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "STORAGE_ERROR",
                    "A storage error occurred".to_string(),
                )
            }
            AppError::Internal(e) => {
                tracing::error!("Internal error: {e:?}");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "INTERNAL_ERROR",
                    "An internal server error occurred".to_string(),
                )
            }
        };

        let body = Json(json!({
            "error": {
                "code": code,
                "message": message
            }
        }));

        (status, body).into_response()
    }
}
