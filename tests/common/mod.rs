#![allow(dead_code)]

use axum_test::TestServer;
use chrono::Utc;
use pocket_services::api::routes::{shortener_routes, todo_routes};
use pocket_services::infrastructure::database::{
    self, PoolSettings, SHORTENER_MIGRATOR, TODO_MIGRATOR,
};
use pocket_services::state::{ShortenerState, TodoState};
use sqlx::SqlitePool;
use sqlx::migrate::Migrator;
use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};
use std::str::FromStr;
use std::sync::Arc;
use std::time::Duration;
use tempfile::TempDir;

pub const BASE_URL: &str = "http://localhost:80";

/// Single-connection in-memory database with `migrator` applied.
///
/// The connection is never recycled, so the database lives as long as the pool.
pub async fn memory_pool(migrator: &Migrator) -> SqlitePool {
    let options = SqliteConnectOptions::from_str("sqlite::memory:").unwrap();

    let pool = SqlitePoolOptions::new()
        .max_connections(1)
        .min_connections(1)
        .idle_timeout(None)
        .max_lifetime(None)
        .connect_with(options)
        .await
        .unwrap();

    migrator.run(&pool).await.unwrap();
    pool
}

pub async fn shortener_pool() -> SqlitePool {
    memory_pool(&SHORTENER_MIGRATOR).await
}

pub async fn todo_pool() -> SqlitePool {
    memory_pool(&TODO_MIGRATOR).await
}

pub fn create_shortener_state(pool: SqlitePool) -> ShortenerState {
    ShortenerState::new(Arc::new(pool), BASE_URL, 10)
}

pub fn create_todo_state(pool: SqlitePool) -> TodoState {
    TodoState::new(Arc::new(pool))
}

pub fn shortener_server(pool: SqlitePool) -> TestServer {
    let app = shortener_routes().with_state(create_shortener_state(pool));
    TestServer::new(app).unwrap()
}

pub fn todo_server(pool: SqlitePool) -> TestServer {
    let app = todo_routes().with_state(create_todo_state(pool));
    TestServer::new(app).unwrap()
}

pub async fn create_test_link(pool: &SqlitePool, code: &str, url: &str) {
    sqlx::query(
        "INSERT INTO short_links (short_code, target_url, click_count, created_at) VALUES (?1, ?2, 0, ?3)",
    )
    .bind(code)
    .bind(url)
    .bind(Utc::now())
    .execute(pool)
    .await
    .unwrap();
}

pub async fn click_count(pool: &SqlitePool, code: &str) -> i64 {
    sqlx::query_scalar("SELECT click_count FROM short_links WHERE short_code = ?1")
        .bind(code)
        .fetch_one(pool)
        .await
        .unwrap()
}

pub async fn count_links_for_url(pool: &SqlitePool, url: &str) -> i64 {
    sqlx::query_scalar("SELECT COUNT(*) FROM short_links WHERE target_url = ?1")
        .bind(url)
        .fetch_one(pool)
        .await
        .unwrap()
}

pub async fn count_items(pool: &SqlitePool) -> i64 {
    sqlx::query_scalar("SELECT COUNT(*) FROM todo_items")
        .fetch_one(pool)
        .await
        .unwrap()
}

/// A fresh temporary directory and a database URL inside a not-yet-existing
/// `data/` subdirectory of it. The directory is removed when the guard drops.
pub fn temp_database(name: &str) -> (TempDir, String) {
    let dir = tempfile::Builder::new()
        .prefix(&format!("pocket-services-{name}-"))
        .tempdir()
        .unwrap();
    let file = dir.path().join("data").join("test.db");

    (dir, format!("sqlite://{}", file.display()))
}

pub fn file_settings(database_url: &str) -> PoolSettings {
    PoolSettings {
        database_url: database_url.to_string(),
        max_connections: 5,
        busy_timeout: Duration::from_secs(5),
        create_if_missing: true,
    }
}

/// Multi-connection pool on a database file, with the shortener schema.
pub async fn shortener_file_pool(database_url: &str) -> SqlitePool {
    let pool = database::connect(&file_settings(database_url)).await.unwrap();
    database::migrate(&pool, &SHORTENER_MIGRATOR).await.unwrap();
    pool
}
