use std::sync::Arc;

use axum::{routing::get, Router};

use crate::handlers;
use crate::state::AppState;

/// Create the API router with all routes
pub fn create_router(state: Arc<AppState>) -> Router {
    Router::new()
        // Health
        .route("/health", get(handlers::health_check))

        // Catalog
        .route("/api/v1/logs", get(handlers::list_logs))
        .route("/api/v1/logs/{id}", get(handlers::get_log))
        .route("/api/v1/logs/{id}/preview", get(handlers::get_log_preview))

        .with_state(state)
}
