//! DTOs for health check endpoint.

use serde::Serialize;

/// `healthy` when the database answers, `unhealthy` otherwise.
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: String,
}
