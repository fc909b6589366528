//! Repository trait for short link data access.

use crate::domain::entities::{NewShortLink, ShortLink};
use crate::error::AppError;
use async_trait::async_trait;

/// Repository interface for short links.
///
/// # Implementations
///
/// - [`crate::infrastructure::persistence::SqliteLinkRepository`] - SQLite implementation
/// - Test mocks available with `cfg(test)`
///
/// # Examples
///
/// See integration tests: `tests/repository_link.rs`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait LinkRepository: Send + Sync {
    /// Inserts a new link with `click_count = 0`.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Conflict`] if the short code already exists.
    /// Returns [`AppError::Internal`] on database errors.
    async fn create(&self, new_link: NewShortLink) -> Result<ShortLink, AppError>;

    /// Finds a link by its exact short code.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn find_by_code(&self, short_code: &str) -> Result<Option<ShortLink>, AppError>;

    /// Finds a link whose target URL equals `target_url` byte for byte.
    ///
    /// If several rows share the URL, the oldest one wins.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn find_by_target_url(&self, target_url: &str) -> Result<Option<ShortLink>, AppError>;

    /// Increments the click counter of `short_code` and returns its target URL.
    ///
    /// The increment and the read happen in one statement, so concurrent calls
    /// never lose updates.
    ///
    /// # Returns
    ///
    /// - `Ok(Some(url))` if the code exists
    /// - `Ok(None)` if it does not (nothing is written)
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn record_click(&self, short_code: &str) -> Result<Option<String>, AppError>;

    /// Lists links ordered by click count, most visited first.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn list_most_clicked(&self, limit: i64) -> Result<Vec<ShortLink>, AppError>;

    /// Counts stored links.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn count(&self) -> Result<i64, AppError>;
}
