//! DTOs for link statistics.

use chrono::{DateTime, Utc};
use serde::Serialize;

/// Stored data for one short link.
#[derive(Debug, Serialize)]
pub struct StatsResponse {
    pub short_id: String,
    pub full_url: String,
    pub click_count: i64,
    pub created_at: DateTime<Utc>,
    pub short_url: String,
}
