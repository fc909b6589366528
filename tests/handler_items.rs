mod common;

use serde_json::{Value, json};

#[tokio::test]
async fn test_create_item_defaults() {
    let pool = common::todo_pool().await;
    let server = common::todo_server(pool);

    let response = server
        .post("/items")
        .json(&json!({ "title": "Buy milk" }))
        .await;

    response.assert_status_ok();
    response.assert_json(&json!({
        "id": 1,
        "title": "Buy milk",
        "description": null,
        "completed": false
    }));
}

#[tokio::test]
async fn test_create_then_get_round_trip() {
    let pool = common::todo_pool().await;
    let server = common::todo_server(pool);

    let created: Value = server
        .post("/items")
        .json(&json!({
            "title": "Write report",
            "description": "Q3 numbers",
            "completed": true
        }))
        .await
        .json();

    let id = created["id"].as_i64().unwrap();
    let fetched: Value = server.get(&format!("/items/{id}")).await.json();

    assert_eq!(fetched, created);
}

#[tokio::test]
async fn test_create_without_title_is_rejected() {
    let pool = common::todo_pool().await;
    let server = common::todo_server(pool.clone());

    let response = server
        .post("/items")
        .json(&json!({ "description": "no title" }))
        .expect_failure()
        .await;

    assert!(response.status_code().is_client_error());
    assert_eq!(common::count_items(&pool).await, 0);
}

#[tokio::test]
async fn test_list_items_in_order() {
    let pool = common::todo_pool().await;
    let server = common::todo_server(pool);

    server.post("/items").json(&json!({ "title": "first" })).await;
    server.post("/items").json(&json!({ "title": "second" })).await;

    let items: Vec<Value> = server.get("/items").await.json();
    assert_eq!(items.len(), 2);
    assert_eq!(items[0]["title"], "first");
    assert_eq!(items[1]["title"], "second");
}

#[tokio::test]
async fn test_list_empty() {
    let pool = common::todo_pool().await;
    let server = common::todo_server(pool);

    server.get("/items").await.assert_json(&json!([]));
}

#[tokio::test]
async fn test_update_item() {
    let pool = common::todo_pool().await;
    let server = common::todo_server(pool);

    server
        .post("/items")
        .json(&json!({ "title": "Draft", "description": "rough" }))
        .await;

    let response = server
        .put("/items/1")
        .json(&json!({ "title": "Done", "completed": true }))
        .await;

    response.assert_status_ok();
    response.assert_json(&json!({
        "id": 1,
        "title": "Done",
        "description": null,
        "completed": true
    }));

    let stored: Value = server.get("/items/1").await.json();
    assert_eq!(stored["title"], "Done");
    assert_eq!(stored["description"], Value::Null);
}

#[tokio::test]
async fn test_update_missing_item_creates_nothing() {
    let pool = common::todo_pool().await;
    let server = common::todo_server(pool.clone());

    let response = server
        .put("/items/99")
        .json(&json!({ "title": "Ghost" }))
        .expect_failure()
        .await;

    response.assert_status_not_found();
    let body: Value = response.json();
    assert_eq!(body["error"]["message"], "Item not found");
    assert_eq!(common::count_items(&pool).await, 0);
}

#[tokio::test]
async fn test_delete_then_get_is_not_found() {
    let pool = common::todo_pool().await;
    let server = common::todo_server(pool);

    server.post("/items").json(&json!({ "title": "Temp" })).await;

    let response = server.delete("/items/1").await;
    response.assert_status_ok();
    response.assert_json(&json!({ "message": "Item deleted successfully" }));

    server
        .get("/items/1")
        .expect_failure()
        .await
        .assert_status_not_found();
}

#[tokio::test]
async fn test_delete_missing_item() {
    let pool = common::todo_pool().await;
    let server = common::todo_server(pool);

    server
        .delete("/items/7")
        .expect_failure()
        .await
        .assert_status_not_found();
}

#[tokio::test]
async fn test_non_numeric_id_is_rejected() {
    let pool = common::todo_pool().await;
    let server = common::todo_server(pool);

    let response = server.get("/items/abc").expect_failure().await;
    assert!(response.status_code().is_client_error());
}
