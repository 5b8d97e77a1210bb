//! Axum route handlers for the Resume API.

use axum::{
    extract::{Path, State},
    Json,
};
use serde::Serialize;
use serde_json::Value;

use crate::errors::AppError;
use crate::models::resume::Resume;
use crate::state::AppState;

// ────────────────────────────────────────────────────────────────────────────
// Response types
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SaveResumeResponse {
    pub message: String,
    pub resume_id: String,
    pub timestamp: String,
}

#[derive(Debug, Serialize)]
pub struct ListResumesResponse {
    pub resumes: Vec<String>,
    pub count: usize,
}

#[derive(Debug, Serialize)]
pub struct DeleteResumeResponse {
    pub message: String,
}

// ────────────────────────────────────────────────────────────────────────────
// Handlers
// ────────────────────────────────────────────────────────────────────────────

/// POST /api/v1/resumes
///
/// Saves a resume under a freshly minted identifier. Every save creates a new
/// record; there is no update-in-place. The body is deserialized explicitly
/// so missing required fields surface as a VALIDATION_ERROR naming the field.
pub async fn handle_save_resume(
    State(state): State<AppState>,
    Json(body): Json<Value>,
) -> Result<Json<SaveResumeResponse>, AppError> {
    let resume: Resume = serde_json::from_value(body)
        .map_err(|e| AppError::Validation(format!("invalid resume document: {e}")))?;

    let (resume_id, timestamp) = state.store.put(resume)?;

    Ok(Json(SaveResumeResponse {
        message: "Resume saved successfully".to_string(),
        resume_id,
        timestamp,
    }))
}

/// GET /api/v1/resumes
///
/// Lists all stored identifiers. Order is indeterminate.
pub async fn handle_list_resumes(State(state): State<AppState>) -> Json<ListResumesResponse> {
    let resumes = state.store.list();
    let count = resumes.len();
    Json(ListResumesResponse { resumes, count })
}

/// GET /api/v1/resumes/:id
pub async fn handle_get_resume(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<Resume>, AppError> {
    Ok(Json(state.store.get(&id)?))
}

/// DELETE /api/v1/resumes/:id
pub async fn handle_delete_resume(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<DeleteResumeResponse>, AppError> {
    state.store.delete(&id)?;
    Ok(Json(DeleteResumeResponse {
        message: "Resume deleted successfully".to_string(),
    }))
}
