//! DTOs for link shortening endpoint.

use serde::{Deserialize, Serialize};

/// Request to shorten a URL.
///
/// The URL is stored verbatim; it is neither validated nor normalized.
#[derive(Debug, Deserialize)]
pub struct ShortenRequest {
    pub url: String,
}

/// The allocated (or reused) short code and its display URL.
#[derive(Debug, Serialize)]
pub struct ShortenResponse {
    pub short_id: String,
    pub short_url: String,
}
