//! Handler for link shortening endpoint.

use axum::{Json, extract::State};

use crate::api::dto::shorten::{ShortenRequest, ShortenResponse};
use crate::error::AppError;
use crate::state::ShortenerState;

/// Returns a short code for the given URL, reusing an existing one if the
/// exact same URL was shortened before.
///
/// # Endpoint
///
/// `POST /shorten`
///
/// # Request Body
///
/// ```json
/// { "url": "https://example.com/some/long/path" }
/// ```
///
/// # Response
///
/// ```json
/// { "short_id": "aB3xY9", "short_url": "http://localhost:80/aB3xY9" }
/// ```
///
/// # Errors
///
/// Returns 503 Service Unavailable if no free code was found within the
/// configured number of attempts.
pub async fn shorten_handler(
    State(state): State<ShortenerState>,
    Json(payload): Json<ShortenRequest>,
) -> Result<Json<ShortenResponse>, AppError> {
    let link = state.link_service.shorten(&payload.url).await?;
    let short_url = state.link_service.short_url(&link.short_code);

    Ok(Json(ShortenResponse {
        short_id: link.short_code,
        short_url,
    }))
}
