//! Handler for short URL redirect.

use axum::{
    extract::{Path, State},
    http::{HeaderValue, StatusCode, header},
    response::{IntoResponse, Response},
};
use serde_json::json;
use tracing::error;

use crate::error::AppError;
use crate::state::ShortenerState;
use crate::utils::location::encode_location;

/// Redirects a short code to its target URL and counts the click.
///
/// # Endpoint
///
/// `GET /{short_id}`
///
/// Responds with `307 Temporary Redirect`. The `Location` header carries the
/// stored URL percent-encoded, so spaces, control characters and non-ASCII
/// text never produce an invalid header.
///
/// # Errors
///
/// Returns 404 Not Found if the short code doesn't exist.
pub async fn redirect_handler(
    Path(short_id): Path<String>,
    State(state): State<ShortenerState>,
) -> Result<Response, AppError> {
    let target_url = state.link_service.resolve(&short_id).await?;

    let location = HeaderValue::from_str(&encode_location(&target_url)).map_err(|e| {
        error!(short_id = %short_id, error = %e, "Encoded URL is not a valid Location header");
        AppError::internal(
            "Stored URL cannot be used as a redirect target",
            json!({ "short_id": short_id }),
        )
    })?;

    Ok((StatusCode::TEMPORARY_REDIRECT, [(header::LOCATION, location)]).into_response())
}
