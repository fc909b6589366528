mod common;

use serde_json::{Value, json};
use std::collections::HashSet;

fn assert_valid_code(code: &str) {
    assert_eq!(code.len(), 6);
    assert!(code.chars().all(|c| c.is_ascii_alphanumeric()));
}

#[tokio::test]
async fn test_shorten_new_url() {
    let pool = common::shortener_pool().await;
    let server = common::shortener_server(pool.clone());

    let response = server
        .post("/shorten")
        .json(&json!({ "url": "https://example.com/some/long/path" }))
        .await;

    response.assert_status_ok();

    let body: Value = response.json();
    let short_id = body["short_id"].as_str().unwrap();
    assert_valid_code(short_id);
    assert_eq!(
        body["short_url"],
        format!("{}/{}", common::BASE_URL, short_id)
    );
    assert_eq!(
        common::count_links_for_url(&pool, "https://example.com/some/long/path").await,
        1
    );
}

#[tokio::test]
async fn test_shorten_same_url_twice_reuses_code() {
    let pool = common::shortener_pool().await;
    let server = common::shortener_server(pool.clone());

    let first: Value = server
        .post("/shorten")
        .json(&json!({ "url": "https://a.com" }))
        .await
        .json();
    let second: Value = server
        .post("/shorten")
        .json(&json!({ "url": "https://a.com" }))
        .await
        .json();

    assert_eq!(first["short_id"], second["short_id"]);
    assert_eq!(common::count_links_for_url(&pool, "https://a.com").await, 1);
}

#[tokio::test]
async fn test_shorten_distinct_urls_get_distinct_codes() {
    let pool = common::shortener_pool().await;
    let server = common::shortener_server(pool);

    let mut codes = HashSet::new();
    for i in 0..20 {
        let body: Value = server
            .post("/shorten")
            .json(&json!({ "url": format!("https://example.com/{i}") }))
            .await
            .json();

        let code = body["short_id"].as_str().unwrap().to_string();
        assert_valid_code(&code);
        codes.insert(code);
    }

    assert_eq!(codes.len(), 20);
}

#[tokio::test]
async fn test_shorten_accepts_any_string() {
    let pool = common::shortener_pool().await;
    let server = common::shortener_server(pool);

    let response = server
        .post("/shorten")
        .json(&json!({ "url": "not a url at all" }))
        .await;

    response.assert_status_ok();
}

#[tokio::test]
async fn test_shorten_missing_url_field_is_rejected() {
    let pool = common::shortener_pool().await;
    let server = common::shortener_server(pool);

    let response = server
        .post("/shorten")
        .json(&json!({ "link": "https://a.com" }))
        .expect_failure()
        .await;

    assert!(response.status_code().is_client_error());
}

#[tokio::test]
async fn test_concurrent_shorten_of_one_url_creates_one_record() {
    let (_dir, database_url) = common::temp_database("shorten-race");
    let pool = common::shortener_file_pool(&database_url).await;
    let state = common::create_shortener_state(pool.clone());

    let mut handles = Vec::new();
    for _ in 0..16 {
        let service = state.link_service.clone();
        handles.push(tokio::spawn(async move {
            service.shorten("https://race.example.com").await.unwrap()
        }));
    }

    let mut codes = HashSet::new();
    for handle in handles {
        codes.insert(handle.await.unwrap().short_code);
    }

    assert_eq!(codes.len(), 1);
    assert_eq!(
        common::count_links_for_url(&pool, "https://race.example.com").await,
        1
    );

    pool.close().await;
}
