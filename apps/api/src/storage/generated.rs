use async_trait::async_trait;
use sqlx::PgPool;
use tracing::info;
use uuid::Uuid;

use crate::models::generated::{GeneratedResumeRow, GeneratedResumeSummary};
use crate::models::resume::ResumeRecord;
use crate::storage::{ResumeRepository, StorageError};

/// Snapshots in the `generated_resumes` table.
#[derive(Clone)]
pub struct PgResumeRepository {
    pool: PgPool,
}

impl PgResumeRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

/// Company column value for `record`; blank companies are stored as NULL.
fn company_of(record: &ResumeRecord) -> Option<String> {
    let company = record.target_job.company.trim();
    (!company.is_empty()).then(|| company.to_string())
}

fn decode_record(row: GeneratedResumeRow) -> Result<ResumeRecord, StorageError> {
    Ok(serde_json::from_value(row.data)?)
}

#[async_trait]
impl ResumeRepository for PgResumeRepository {
    async fn save_generated(
        &self,
        user_id: Uuid,
        title: &str,
        record: &ResumeRecord,
    ) -> Result<Uuid, StorageError> {
        let id = Uuid::new_v4();
        let data = serde_json::to_value(record)?;

        sqlx::query(
            r#"
            INSERT INTO generated_resumes (id, user_id, title, company, data)
            VALUES ($1, $2, $3, $4, $5)
            "#,
        )
        .bind(id)
        .bind(user_id)
        .bind(title)
        .bind(company_of(record))
        .bind(&data)
        .execute(&self.pool)
        .await?;

        info!("Saved generated resume {} for user {}", id, user_id);
        Ok(id)
    }

    async fn update_generated(
        &self,
        id: Uuid,
        title: &str,
        record: &ResumeRecord,
    ) -> Result<bool, StorageError> {
        let data = serde_json::to_value(record)?;

        let result = sqlx::query(
            r#"
            UPDATE generated_resumes
            SET title = $2, company = $3, data = $4, updated_at = NOW()
            WHERE id = $1
            "#,
        )
        .bind(id)
        .bind(title)
        .bind(company_of(record))
        .bind(&data)
        .execute(&self.pool)
        .await?;

        Ok(result.rows_affected() > 0)
    }

    async fn list_generated(
        &self,
        user_id: Uuid,
    ) -> Result<Vec<GeneratedResumeSummary>, StorageError> {
        let rows = sqlx::query_as::<_, GeneratedResumeSummary>(
            r#"
            SELECT id, title, company, created_at
            FROM generated_resumes
            WHERE user_id = $1
            ORDER BY created_at DESC
            "#,
        )
        .bind(user_id)
        .fetch_all(&self.pool)
        .await?;

        Ok(rows)
    }

    async fn get_generated(&self, id: Uuid) -> Result<Option<ResumeRecord>, StorageError> {
        let row = sqlx::query_as::<_, GeneratedResumeRow>(
            "SELECT * FROM generated_resumes WHERE id = $1",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        row.map(decode_record).transpose()
    }

    async fn delete_generated(&self, id: Uuid) -> Result<bool, StorageError> {
        let result = sqlx::query("DELETE FROM generated_resumes WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected() > 0)
    }
}
