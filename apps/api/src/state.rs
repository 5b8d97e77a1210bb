use std::sync::Arc;

use crate::store::ResumeStore;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    /// The resume store, constructed once at startup and owned behind `Arc`.
    /// Handlers never reach for ambient storage; everything goes through here.
    pub store: Arc<ResumeStore>,
}
