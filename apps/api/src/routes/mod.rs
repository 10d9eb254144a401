pub mod health;

use axum::{
    http::StatusCode,
    response::IntoResponse,
    routing::{get, post},
    Json, Router,
};
use serde_json::json;

use crate::analysis::handlers;
use crate::state::AppState;

/// JSON 404 for unknown routes, matching the error envelope used elsewhere.
async fn not_found() -> impl IntoResponse {
    (
        StatusCode::NOT_FOUND,
        Json(json!({
            "success": false,
            "error": {
                "code": "NOT_FOUND",
                "message": "API endpoint not found"
            }
        })),
    )
}

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/api/health", get(health::health_handler))
        .route("/api/analyze/text", post(handlers::handle_analyze_text))
        .route("/api/analyze/file", post(handlers::handle_analyze_file))
        .fallback(not_found)
        .with_state(state)
}
