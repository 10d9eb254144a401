use axum::Json;
use chrono::Utc;
use serde_json::{json, Value};

/// GET /api/health
/// Returns a simple status object with service version and timestamp.
pub async fn health_handler() -> Json<Value> {
    Json(json!({
        "success": true,
        "status": "OK",
        "service": "neurohire-api",
        "version": env!("CARGO_PKG_VERSION"),
        "timestamp": Utc::now().to_rfc3339(),
    }))
}
