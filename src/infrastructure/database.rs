//! SQLite connection pool and schema migrations.
//!
//! Each service owns one database file. Connections are opened in WAL mode so
//! readers never wait on the single writer SQLite allows at a time; a busy
//! timeout makes competing writers queue instead of failing immediately.

use anyhow::{Context, Result};
use sqlx::SqlitePool;
use sqlx::migrate::Migrator;
use sqlx::sqlite::{SqliteConnectOptions, SqliteJournalMode, SqlitePoolOptions, SqliteSynchronous};
use std::str::FromStr;
use std::time::Duration;

/// Schema of the shortener database (`short_links`).
pub static SHORTENER_MIGRATOR: Migrator = sqlx::migrate!("./migrations/shortener");

/// Schema of the to-do database (`todo_items`).
pub static TODO_MIGRATOR: Migrator = sqlx::migrate!("./migrations/todo");

/// Pool settings taken from [`crate::config::Config`].
#[derive(Debug, Clone)]
pub struct PoolSettings {
    pub database_url: String,
    pub max_connections: u32,
    pub busy_timeout: Duration,
    /// Create the file (and its directory) when it does not exist.
    pub create_if_missing: bool,
}

/// Opens a pool on the database file named by `settings.database_url`.
///
/// With `create_if_missing`, the file and its parent directory are created
/// when absent.
///
/// # Errors
///
/// Returns an error if the URL is malformed, the directory cannot be created,
/// or the first connection fails.
pub async fn connect(settings: &PoolSettings) -> Result<SqlitePool> {
    let options = SqliteConnectOptions::from_str(&settings.database_url)
        .with_context(|| format!("Invalid database URL '{}'", settings.database_url))?
        .create_if_missing(settings.create_if_missing)
        .journal_mode(SqliteJournalMode::Wal)
        .synchronous(SqliteSynchronous::Normal)
        .busy_timeout(settings.busy_timeout);

    if settings.create_if_missing
        && let Some(parent) = options.get_filename().parent()
        && !parent.as_os_str().is_empty()
    {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create directory {}", parent.display()))?;
    }

    let pool = SqlitePoolOptions::new()
        .max_connections(settings.max_connections)
        .connect_with(options)
        .await
        .context("Failed to open database")?;

    Ok(pool)
}

/// Applies `migrator` to `pool`.
///
/// # Errors
///
/// Returns an error if a migration fails or the recorded history diverges.
pub async fn migrate(pool: &SqlitePool, migrator: &Migrator) -> Result<()> {
    migrator
        .run(pool)
        .await
        .context("Failed to apply migrations")?;
    Ok(())
}
