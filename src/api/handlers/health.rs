//! Handler for health check endpoint.

use axum::{Json, extract::State, http::StatusCode};

use crate::api::dto::health::HealthResponse;
use crate::state::TodoState;

/// Reports whether the to-do service can reach its database.
///
/// # Endpoint
///
/// `GET /health`
///
/// # Response Codes
///
/// - **200 OK**: `{"status": "healthy"}`
/// - **503 Service Unavailable**: `{"status": "unhealthy"}`
pub async fn health_handler(State(state): State<TodoState>) -> (StatusCode, Json<HealthResponse>) {
    if state.todo_service.is_healthy().await {
        (
            StatusCode::OK,
            Json(HealthResponse {
                status: "healthy".to_string(),
            }),
        )
    } else {
        (
            StatusCode::SERVICE_UNAVAILABLE,
            Json(HealthResponse {
                status: "unhealthy".to_string(),
            }),
        )
    }
}
