//! Health check handler

use axum::{response::IntoResponse, Json};

pub async fn health_check() -> impl IntoResponse {
    Json(serde_json::json!({
        "status": "ok",
        "service": "dinemap-core",
        "version": env!("CARGO_PKG_VERSION"),
    }))
}
