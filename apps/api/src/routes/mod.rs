pub mod health;

use axum::{
    routing::{get, post},
    Json, Router,
};
use serde_json::{json, Value};

use crate::enhance::handlers as enhance_handlers;
use crate::resumes::handlers as resume_handlers;
use crate::state::AppState;

/// GET /
/// Service banner for quick is-it-up checks.
async fn root_handler() -> Json<Value> {
    Json(json!({ "message": "Resume Editor API is running!" }))
}

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/", get(root_handler))
        .route("/health", get(health::health_handler))
        .route("/api/v1/enhance", post(enhance_handlers::handle_enhance))
        .route(
            "/api/v1/resumes",
            post(resume_handlers::handle_save_resume).get(resume_handlers::handle_list_resumes),
        )
        .route(
            "/api/v1/resumes/:id",
            get(resume_handlers::handle_get_resume).delete(resume_handlers::handle_delete_resume),
        )
        .with_state(state)
}
