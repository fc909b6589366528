//! Handler for link statistics.

use axum::{
    Json,
    extract::{Path, State},
};

use crate::api::dto::stats::StatsResponse;
use crate::error::AppError;
use crate::state::ShortenerState;

/// Returns the stored record for a short code. Does not count as a click.
///
/// # Endpoint
///
/// `GET /stats/{short_id}`
///
/// # Response
///
/// ```json
/// {
///   "short_id": "aB3xY9",
///   "full_url": "https://example.com",
///   "click_count": 3,
///   "created_at": "2025-01-01T12:00:00Z",
///   "short_url": "http://localhost:80/aB3xY9"
/// }
/// ```
///
/// # Errors
///
/// Returns 404 Not Found if the short code doesn't exist.
pub async fn stats_handler(
    State(state): State<ShortenerState>,
    Path(short_id): Path<String>,
) -> Result<Json<StatsResponse>, AppError> {
    let link = state.link_service.stats(&short_id).await?;
    let short_url = state.link_service.short_url(&link.short_code);

    Ok(Json(StatsResponse {
        short_id: link.short_code,
        full_url: link.target_url,
        click_count: link.click_count,
        created_at: link.created_at,
        short_url,
    }))
}
