//! Resume service: the public `optimize` use case.
//!
//! Flow: validate_record → RefinementClient::refine → merge →
//!       cover letter (best effort) → optional persistence (best effort).
//!
//! Only `RefineError` escapes `optimize` and `optimize_and_save`. Cover
//! letter and storage failures are logged and the merged record is still
//! returned. The cover letter is written from the caller's record, not the
//! refined one.

use std::sync::Arc;

use serde::Serialize;
use tracing::{info, warn};
use uuid::Uuid;

use crate::models::resume::ResumeRecord;
use crate::refinement::client::RefinementClient;
use crate::refinement::cover_letter::CoverLetterComposer;
use crate::refinement::error::{CoverLetterError, RefineError};
use crate::refinement::merge::merge;
use crate::refinement::preconditions::validate_record;
use crate::storage::ResumeRepository;

/// A refined record together with the id of its persisted snapshot.
/// `resume_id` is `None` when the snapshot could not be stored.
#[derive(Debug, Clone, Serialize)]
pub struct SavedResume {
    pub resume_id: Option<Uuid>,
    pub record: ResumeRecord,
}

#[derive(Clone)]
pub struct ResumeService {
    refiner: RefinementClient,
    cover_letters: CoverLetterComposer,
    repository: Arc<dyn ResumeRepository>,
}

impl ResumeService {
    pub fn new(
        refiner: RefinementClient,
        cover_letters: CoverLetterComposer,
        repository: Arc<dyn ResumeRepository>,
    ) -> Self {
        Self {
            refiner,
            cover_letters,
            repository,
        }
    }

    /// Refines `record` against its target job and returns the merged record.
    /// The input is never mutated.
    pub async fn optimize(&self, record: &ResumeRecord) -> Result<ResumeRecord, RefineError> {
        validate_record(record)?;

        let response = self.refiner.refine(record).await?;
        let mut merged = merge(record, &response);
        info!(
            "Merged refinement: {} positions, {} projects, {} activities",
            merged.positions.len(),
            merged.projects.len(),
            merged.activities.len()
        );

        match self.cover_letters.compose(record).await {
            Ok(letter) => merged.cover_letter = Some(letter),
            Err(e) => warn!("Cover letter generation failed, continuing without it: {e}"),
        }

        Ok(merged)
    }

    /// Generates a cover letter on its own, surfacing any failure.
    pub async fn cover_letter(&self, record: &ResumeRecord) -> Result<String, CoverLetterError> {
        self.cover_letters.compose(record).await
    }

    /// Runs `optimize` and stores the result as a generated resume snapshot.
    pub async fn optimize_and_save(
        &self,
        user_id: Uuid,
        record: &ResumeRecord,
    ) -> Result<SavedResume, RefineError> {
        let record = self.optimize(record).await?;
        let resume_id = match self
            .repository
            .save_generated(user_id, &record.snapshot_title(), &record)
            .await
        {
            Ok(id) => Some(id),
            Err(e) => {
                warn!(
                    "Saving generated resume for user {user_id} failed, returning it unsaved: {e}"
                );
                None
            }
        };

        Ok(SavedResume { resume_id, record })
    }
}
