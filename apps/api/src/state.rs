use std::sync::Arc;

use crate::refinement::ResumeService;
use crate::storage::{DraftStore, ResumeRepository};

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    pub resumes: Arc<ResumeService>,
    /// Generated resume snapshots. Default: `PgResumeRepository`.
    pub repository: Arc<dyn ResumeRepository>,
    /// Work-in-progress drafts. Default: `RedisDraftStore`.
    pub drafts: Arc<dyn DraftStore>,
}
