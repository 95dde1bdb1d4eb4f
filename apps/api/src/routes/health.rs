use axum::Json;
use serde_json::{json, Value};

pub const SERVICE_NAME: &str = "Edu9 API";

/// GET /api/health
pub async fn health_handler() -> Json<Value> {
    Json(json!({
        "status": "healthy",
        "service": SERVICE_NAME
    }))
}

/// GET /api/
pub async fn root_handler() -> Json<Value> {
    Json(json!({
        "message": "Edu9 Career Guidance API",
        "version": "1.0"
    }))
}
