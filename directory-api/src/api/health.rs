//! Health check endpoint

use axum::Json;
use shared::HealthResponse;

/// Liveness only: answers without touching the store.
pub async fn health_check() -> Json<HealthResponse> {
    Json(HealthResponse::ok())
}
