//! Axum route handler for the enhancement endpoint.

use axum::Json;
use serde::{Deserialize, Serialize};

use crate::enhance::enhance;

#[derive(Debug, Deserialize)]
pub struct EnhanceRequest {
    pub section: String,
    pub content: String,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EnhanceResponse {
    pub enhanced_content: String,
}

/// POST /api/v1/enhance
///
/// Pure transform of one section's content. No store interaction, never fails.
pub async fn handle_enhance(Json(request): Json<EnhanceRequest>) -> Json<EnhanceResponse> {
    Json(EnhanceResponse {
        enhanced_content: enhance(&request.section, &request.content),
    })
}
