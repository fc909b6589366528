mod common;

use serde_json::{Value, json};

#[tokio::test]
async fn test_stats_fresh_link() {
    let pool = common::shortener_pool().await;
    let server = common::shortener_server(pool);

    let created: Value = server
        .post("/shorten")
        .json(&json!({ "url": "https://example.com/stats" }))
        .await
        .json();
    let short_id = created["short_id"].as_str().unwrap();

    let response = server.get(&format!("/stats/{short_id}")).await;
    response.assert_status_ok();

    let body: Value = response.json();
    assert_eq!(body["short_id"], short_id);
    assert_eq!(body["full_url"], "https://example.com/stats");
    assert_eq!(body["click_count"], 0);
    assert_eq!(body["short_url"], created["short_url"]);
    assert!(body["created_at"].as_str().is_some());
}

#[tokio::test]
async fn test_stats_after_redirects() {
    let pool = common::shortener_pool().await;
    common::create_test_link(&pool, "stat01", "https://example.com").await;

    let server = common::shortener_server(pool);
    for _ in 0..3 {
        server.get("/stat01").await;
    }

    let body: Value = server.get("/stats/stat01").await.json();
    assert_eq!(body["click_count"], 3);
}

#[tokio::test]
async fn test_stats_is_read_only() {
    let pool = common::shortener_pool().await;
    common::create_test_link(&pool, "read01", "https://example.com").await;

    let server = common::shortener_server(pool.clone());
    server.get("/stats/read01").await;
    server.get("/stats/read01").await;

    assert_eq!(common::click_count(&pool, "read01").await, 0);
}

#[tokio::test]
async fn test_stats_not_found() {
    let pool = common::shortener_pool().await;
    let server = common::shortener_server(pool);

    let response = server.get("/stats/nope00").expect_failure().await;

    response.assert_status_not_found();
    let body: Value = response.json();
    assert_eq!(body["error"]["details"]["short_id"], "nope00");
}
