pub mod health;

use axum::{
    routing::{get, post},
    Router,
};

use crate::refinement::handlers as refinement;
use crate::state::AppState;
use crate::storage::handlers as storage;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        // Refinement API
        .route("/api/v1/resumes/optimize", post(refinement::handle_optimize))
        .route(
            "/api/v1/resumes/cover-letter",
            post(refinement::handle_cover_letter),
        )
        // Drafts
        .route(
            "/api/v1/drafts/:user_id",
            get(storage::handle_get_draft)
                .put(storage::handle_save_draft)
                .delete(storage::handle_clear_draft),
        )
        // Generated resumes
        .route(
            "/api/v1/users/:user_id/resumes",
            get(storage::handle_list_resumes),
        )
        .route(
            "/api/v1/resumes/:id",
            get(storage::handle_get_resume)
                .put(storage::handle_update_resume)
                .delete(storage::handle_delete_resume),
        )
        .with_state(state)
}
