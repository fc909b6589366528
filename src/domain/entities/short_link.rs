//! Short link entity representing a code → URL mapping.

use chrono::{DateTime, Utc};

/// A shortened URL with its visit counter.
///
/// Only `click_count` changes after insertion; links are never deleted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShortLink {
    pub id: i64,
    pub short_code: String,
    pub target_url: String,
    pub click_count: i64,
    pub created_at: DateTime<Utc>,
}

impl ShortLink {
    /// Creates a new ShortLink instance.
    pub fn new(
        id: i64,
        short_code: String,
        target_url: String,
        click_count: i64,
        created_at: DateTime<Utc>,
    ) -> Self {
        Self {
            id,
            short_code,
            target_url,
            click_count,
            created_at,
        }
    }
}

/// Input data for inserting a new link.
///
/// New links always start with `click_count = 0`.
#[derive(Debug, Clone)]
pub struct NewShortLink {
    pub short_code: String,
    pub target_url: String,
    pub created_at: DateTime<Utc>,
}

impl NewShortLink {
    /// Builds an insert stamped with the current time.
    pub fn now(short_code: String, target_url: String) -> Self {
        Self {
            short_code,
            target_url,
            created_at: Utc::now(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_short_link_creation() {
        let now = Utc::now();
        let link = ShortLink::new(
            1,
            "aB3xY9".to_string(),
            "https://example.com".to_string(),
            0,
            now,
        );

        assert_eq!(link.id, 1);
        assert_eq!(link.short_code, "aB3xY9");
        assert_eq!(link.target_url, "https://example.com");
        assert_eq!(link.click_count, 0);
        assert_eq!(link.created_at, now);
    }

    #[test]
    fn test_new_short_link_is_stamped() {
        let before = Utc::now();
        let new_link = NewShortLink::now("Qw3rTy".to_string(), "https://rust-lang.org".to_string());

        assert_eq!(new_link.short_code, "Qw3rTy");
        assert_eq!(new_link.target_url, "https://rust-lang.org");
        assert!(new_link.created_at >= before);
    }
}
