use axum::{extract::State, Json};
use chrono::Utc;
use serde_json::{json, Value};

use crate::state::AppState;

/// GET /health
/// Returns service status, the current time, and the stored-resume count.
pub async fn health_handler(State(state): State<AppState>) -> Json<Value> {
    Json(json!({
        "status": "healthy",
        "timestamp": Utc::now().to_rfc3339(),
        "count": state.store.count(),
    }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::ResumeStore;
    use std::sync::Arc;
    use tempfile::TempDir;

    #[tokio::test]
    async fn test_health_reports_store_count() {
        let temp_dir = TempDir::new().unwrap();
        let state = AppState {
            store: Arc::new(ResumeStore::new(temp_dir.path().join("data"))),
        };

        let body = health_handler(State(state)).await.0;
        assert_eq!(body["status"], "healthy");
        assert_eq!(body["count"], 0);
        assert!(body["timestamp"].as_str().is_some());
    }
}
