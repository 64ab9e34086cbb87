//! Liveness endpoint

use axum::Json;

use crate::response::ApiResponse;

/// Health check - GET /health
pub async fn health_check() -> Json<ApiResponse<()>> {
    Json(ApiResponse::ok_empty("OK"))
}
