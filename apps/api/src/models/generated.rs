use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use sqlx::FromRow;
use uuid::Uuid;

/// A persisted snapshot of a refined resume. `data` holds a serialized `ResumeRecord`.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct GeneratedResumeRow {
    pub id: Uuid,
    pub user_id: Uuid,
    pub title: String,
    pub company: Option<String>,
    pub data: Value,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Listing entry for a user's generated resumes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow)]
pub struct GeneratedResumeSummary {
    pub id: Uuid,
    pub title: String,
    pub company: Option<String>,
    pub created_at: DateTime<Utc>,
}
