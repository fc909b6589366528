//! Storage error classification.

/// Column whose UNIQUE constraint guards short code uniqueness.
const SHORT_CODE_COLUMN: &str = "short_links.short_code";

/// Returns true if `e` is a UNIQUE violation on `short_links.short_code`.
///
/// SQLite does not expose constraint names, so the check falls back to the
/// `table.column` pair it reports in the error message.
pub fn is_unique_violation_on_code(e: &sqlx::Error) -> bool {
    let Some(db_err) = e.as_database_error() else {
        return false;
    };

    if !db_err.is_unique_violation() {
        return false;
    }

    db_err.constraint() == Some(SHORT_CODE_COLUMN) || db_err.message().contains(SHORT_CODE_COLUMN)
}
