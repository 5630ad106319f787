use async_trait::async_trait;
use redis::AsyncCommands;
use tracing::debug;
use uuid::Uuid;

use crate::models::resume::ResumeRecord;
use crate::storage::{DraftStore, StorageError};

const DRAFT_KEY_PREFIX: &str = "tailor:draft";

fn draft_key(user_id: Uuid) -> String {
    format!("{DRAFT_KEY_PREFIX}:{user_id}")
}

/// Drafts stored as one JSON string per user.
#[derive(Clone)]
pub struct RedisDraftStore {
    client: redis::Client,
}

impl RedisDraftStore {
    pub fn new(client: redis::Client) -> Self {
        Self { client }
    }
}

#[async_trait]
impl DraftStore for RedisDraftStore {
    async fn save_draft(&self, user_id: Uuid, record: &ResumeRecord) -> Result<(), StorageError> {
        let payload = serde_json::to_string(record)?;
        let mut conn = self.client.get_multiplexed_async_connection().await?;
        conn.set::<_, _, ()>(draft_key(user_id), payload).await?;
        debug!("Saved draft for user {}", user_id);
        Ok(())
    }

    async fn load_draft(&self, user_id: Uuid) -> Result<Option<ResumeRecord>, StorageError> {
        let mut conn = self.client.get_multiplexed_async_connection().await?;
        let payload: Option<String> = conn.get(draft_key(user_id)).await?;
        payload
            .map(|p| serde_json::from_str(&p))
            .transpose()
            .map_err(StorageError::from)
    }

    async fn clear_draft(&self, user_id: Uuid) -> Result<(), StorageError> {
        let mut conn = self.client.get_multiplexed_async_connection().await?;
        conn.del::<_, ()>(draft_key(user_id)).await?;
        Ok(())
    }
}
