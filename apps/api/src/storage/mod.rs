// Persistence collaborators: in-progress drafts (Redis) and generated resume
// snapshots (PostgreSQL). The refinement pipeline only ever writes to these.

use async_trait::async_trait;
use thiserror::Error;
use uuid::Uuid;

use crate::models::generated::GeneratedResumeSummary;
use crate::models::resume::ResumeRecord;

pub mod drafts;
pub mod generated;
pub mod handlers;

#[derive(Debug, Error)]
pub enum StorageError {
    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),

    #[error("redis error: {0}")]
    Redis(#[from] redis::RedisError),

    #[error("stored resume is not valid JSON: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// The user's single work-in-progress record.
#[async_trait]
pub trait DraftStore: Send + Sync {
    async fn save_draft(&self, user_id: Uuid, record: &ResumeRecord) -> Result<(), StorageError>;
    async fn load_draft(&self, user_id: Uuid) -> Result<Option<ResumeRecord>, StorageError>;
    async fn clear_draft(&self, user_id: Uuid) -> Result<(), StorageError>;
}

/// Named snapshots of refined resumes, keyed by an opaque id.
#[async_trait]
pub trait ResumeRepository: Send + Sync {
    async fn save_generated(
        &self,
        user_id: Uuid,
        title: &str,
        record: &ResumeRecord,
    ) -> Result<Uuid, StorageError>;

    /// Returns `false` if no snapshot with `id` exists.
    async fn update_generated(
        &self,
        id: Uuid,
        title: &str,
        record: &ResumeRecord,
    ) -> Result<bool, StorageError>;

    /// Newest first.
    async fn list_generated(
        &self,
        user_id: Uuid,
    ) -> Result<Vec<GeneratedResumeSummary>, StorageError>;

    async fn get_generated(&self, id: Uuid) -> Result<Option<ResumeRecord>, StorageError>;

    /// Returns `false` if no snapshot with `id` exists.
    async fn delete_generated(&self, id: Uuid) -> Result<bool, StorageError>;
}
