//! LLM-backed implementations of the refinement capabilities.

use async_trait::async_trait;
use tracing::debug;

use crate::llm_client::LlmClient;
use crate::models::resume::ResumeRecord;
use crate::refinement::error::{AttemptError, CoverLetterError, SchemaViolation};
use crate::refinement::prompts::{
    build_cover_letter_prompt, build_refine_prompt, refine_system, COVER_LETTER_SYSTEM,
};
use crate::refinement::response::RefinementResponse;
use crate::refinement::{CoverLetterGenerator, ResumeOptimizer};

/// Refines a record with one Claude call returning JSON.
pub struct LlmResumeOptimizer(pub LlmClient);

#[async_trait]
impl ResumeOptimizer for LlmResumeOptimizer {
    async fn optimize(&self, record: &ResumeRecord) -> Result<RefinementResponse, AttemptError> {
        let prompt = build_refine_prompt(record)
            .map_err(|e| SchemaViolation::Malformed(format!("failed to build prompt: {e}")))?;

        debug!(
            "Requesting refinement: {} positions, {} projects, {} activities",
            record.positions.len(),
            record.projects.len(),
            record.activities.len()
        );

        let response = self
            .0
            .call_json::<RefinementResponse>(&prompt, &refine_system())
            .await?;
        Ok(response)
    }
}

/// Writes cover letters with one Claude call returning plain text.
pub struct LlmCoverLetterGenerator(pub LlmClient);

#[async_trait]
impl CoverLetterGenerator for LlmCoverLetterGenerator {
    async fn generate(&self, record: &ResumeRecord) -> Result<String, CoverLetterError> {
        let prompt = build_cover_letter_prompt(record).map_err(|e| {
            CoverLetterError::Generation(format!("failed to build prompt: {e}"))
        })?;

        self.0
            .call_text(&prompt, COVER_LETTER_SYSTEM)
            .await
            .map_err(|e| CoverLetterError::Generation(e.to_string()))
    }
}
