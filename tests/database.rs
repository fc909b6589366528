mod common;

use pocket_services::infrastructure::database::{self, SHORTENER_MIGRATOR, TODO_MIGRATOR};

#[tokio::test]
async fn test_connect_creates_directory_and_file() {
    let (dir, database_url) = common::temp_database("create");
    assert!(!dir.path().join("data").exists());

    let pool = database::connect(&common::file_settings(&database_url))
        .await
        .unwrap();

    assert!(dir.path().join("data").join("test.db").exists());

    pool.close().await;
}

#[tokio::test]
async fn test_connect_enables_wal() {
    let (_dir, database_url) = common::temp_database("wal");
    let pool = database::connect(&common::file_settings(&database_url))
        .await
        .unwrap();

    let mode: String = sqlx::query_scalar("PRAGMA journal_mode")
        .fetch_one(&pool)
        .await
        .unwrap();
    assert_eq!(mode.to_lowercase(), "wal");

    pool.close().await;
}

#[tokio::test]
async fn test_connect_without_create_fails_on_missing_file() {
    let (dir, database_url) = common::temp_database("missing");

    let mut settings = common::file_settings(&database_url);
    settings.create_if_missing = false;

    assert!(database::connect(&settings).await.is_err());
    assert!(!dir.path().join("data").join("test.db").exists());
}

#[tokio::test]
async fn test_migrations_are_idempotent() {
    let (_dir, database_url) = common::temp_database("migrate");
    let pool = database::connect(&common::file_settings(&database_url))
        .await
        .unwrap();

    database::migrate(&pool, &SHORTENER_MIGRATOR).await.unwrap();
    database::migrate(&pool, &SHORTENER_MIGRATOR).await.unwrap();

    let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM short_links")
        .fetch_one(&pool)
        .await
        .unwrap();
    assert_eq!(count, 0);

    pool.close().await;
}

#[tokio::test]
async fn test_todo_schema() {
    let pool = common::memory_pool(&TODO_MIGRATOR).await;

    sqlx::query("INSERT INTO todo_items (title) VALUES ('defaults')")
        .execute(&pool)
        .await
        .unwrap();

    let (description, completed): (Option<String>, bool) =
        sqlx::query_as("SELECT description, completed FROM todo_items WHERE id = 1")
            .fetch_one(&pool)
            .await
            .unwrap();

    assert!(description.is_none());
    assert!(!completed);
}

#[tokio::test]
async fn test_short_code_is_unique() {
    let pool = common::shortener_pool().await;
    common::create_test_link(&pool, "same01", "https://a.com").await;

    let result = sqlx::query(
        "INSERT INTO short_links (short_code, target_url, click_count, created_at) VALUES ('same01', 'https://b.com', 0, '2025-01-01T00:00:00Z')",
    )
    .execute(&pool)
    .await;

    assert!(result.is_err());
}
