// Refinement pipeline: preconditions → generation client (timeout, retry,
// response validation) → merge → best-effort cover letter.
// All LLM calls go through llm_client.

use async_trait::async_trait;

use crate::models::resume::ResumeRecord;

pub mod client;
pub mod cover_letter;
pub mod error;
pub mod handlers;
pub mod llm;
pub mod merge;
pub mod preconditions;
pub mod prompts;
pub mod response;
pub mod schema;
pub mod service;
pub mod validator;

pub use client::{RefinementClient, RefinementConfig};
pub use cover_letter::CoverLetterComposer;
pub use error::{
    AttemptError, Collection, CoverLetterError, FailureKind, RefineError, SchemaViolation,
    ValidationError,
};
pub use response::{Fragment, RefinementResponse};
pub use service::ResumeService;

/// Produces a job-tailored refinement of a record. One call is one attempt.
///
/// Implement this to swap the generation backend without touching the retry
/// loop, validator or merge. Carried as `Arc<dyn ResumeOptimizer>`.
#[async_trait]
pub trait ResumeOptimizer: Send + Sync {
    async fn optimize(&self, record: &ResumeRecord) -> Result<RefinementResponse, AttemptError>;
}

/// Produces free-text cover letters.
#[async_trait]
pub trait CoverLetterGenerator: Send + Sync {
    async fn generate(&self, record: &ResumeRecord) -> Result<String, CoverLetterError>;
}
