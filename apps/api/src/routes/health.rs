use axum::Json;
use serde_json::{json, Value};

/// GET /health
/// Liveness probe only; does not touch the generation service.
pub async fn health_handler() -> Json<Value> {
    Json(json!({
        "status": "ok",
        "message": "Argument Strengthener API is running"
    }))
}
