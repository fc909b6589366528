//! Short link allocation, resolution and statistics.

use std::sync::Arc;

use serde_json::json;
use tokio::sync::Mutex;
use tracing::{debug, info, warn};

use crate::domain::entities::{NewShortLink, ShortLink};
use crate::domain::repositories::LinkRepository;
use crate::error::AppError;
use crate::utils::code_generator::generate_code;

/// Default upper bound on candidates drawn per allocation.
pub const DEFAULT_MAX_CODE_ATTEMPTS: usize = 10;

/// Service for shortening URLs and resolving short codes.
///
/// # Deduplication
///
/// Shortening a URL that is already stored (exact byte match, no
/// normalization) returns the existing link untouched.
///
/// # Concurrency
///
/// The dedup check, code generation and insert run under one async lock, so
/// concurrent requests for the same new URL yield a single record. Click
/// counting is a single atomic statement in the repository.
pub struct LinkService<L: LinkRepository> {
    link_repository: Arc<L>,
    base_url: String,
    max_attempts: usize,
    write_lock: Mutex<()>,
}

impl<L: LinkRepository> LinkService<L> {
    /// Creates a new link service.
    ///
    /// `base_url` is the origin used to build display URLs; a trailing `/` is
    /// ignored. `max_attempts` is clamped to at least 1.
    pub fn new(link_repository: Arc<L>, base_url: impl Into<String>, max_attempts: usize) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();

        Self {
            link_repository,
            base_url,
            max_attempts: max_attempts.max(1),
            write_lock: Mutex::new(()),
        }
    }

    /// Returns the short code for `target_url`, allocating one if needed.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Exhausted`] if every candidate code collided.
    /// Returns [`AppError::Internal`] on database errors.
    pub async fn shorten(&self, target_url: &str) -> Result<ShortLink, AppError> {
        let _guard = self.write_lock.lock().await;

        if let Some(existing) = self.link_repository.find_by_target_url(target_url).await? {
            debug!(short_id = %existing.short_code, "Reusing existing short link");
            return Ok(existing);
        }

        let link = self.allocate(target_url).await?;
        info!(short_id = %link.short_code, "Short link created");

        Ok(link)
    }

    /// Resolves a short code to its target URL and counts the visit.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if the code is unknown.
    /// Returns [`AppError::Internal`] on database errors.
    pub async fn resolve(&self, short_code: &str) -> Result<String, AppError> {
        self.link_repository
            .record_click(short_code)
            .await?
            .ok_or_else(|| not_found(short_code))
    }

    /// Returns the stored link for `short_code` without side effects.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if the code is unknown.
    /// Returns [`AppError::Internal`] on database errors.
    pub async fn stats(&self, short_code: &str) -> Result<ShortLink, AppError> {
        self.link_repository
            .find_by_code(short_code)
            .await?
            .ok_or_else(|| not_found(short_code))
    }

    /// Builds the display URL `<base_url>/<short_code>`.
    pub fn short_url(&self, short_code: &str) -> String {
        format!("{}/{}", self.base_url, short_code)
    }

    /// Draws candidates until one is free, then inserts it.
    ///
    /// An insert rejected by the UNIQUE constraint (a writer outside this
    /// process took the code) counts as a collision.
    async fn allocate(&self, target_url: &str) -> Result<ShortLink, AppError> {
        for attempt in 1..=self.max_attempts {
            let code = generate_code();

            if self.link_repository.find_by_code(&code).await?.is_some() {
                debug!(attempt, short_id = %code, "Short code collision");
                continue;
            }

            match self
                .link_repository
                .create(NewShortLink::now(code, target_url.to_string()))
                .await
            {
                Ok(link) => return Ok(link),
                Err(AppError::Conflict { .. }) => {
                    debug!(attempt, "Short code taken on insert");
                }
                Err(e) => return Err(e),
            }
        }

        warn!(attempts = self.max_attempts, "Short code space exhausted");

        Err(AppError::exhausted(
            "Failed to allocate a unique short code",
            json!({ "attempts": self.max_attempts }),
        ))
    }
}

fn not_found(short_code: &str) -> AppError {
    AppError::not_found("URL not found", json!({ "short_id": short_code }))
}
