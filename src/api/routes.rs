//! API route configuration for each service.

use crate::api::handlers::{
    create_item_handler, delete_item_handler, get_item_handler, health_handler,
    list_items_handler, redirect_handler, shorten_handler, shortener_docs_handler,
    shortener_root_handler, stats_handler, todo_docs_handler, todo_root_handler,
    update_item_handler,
};
use crate::state::{ShortenerState, TodoState};
use axum::{
    Router,
    routing::{get, post},
};

/// Shortener routes.
///
/// # Endpoints
///
/// - `GET  /`                  - Service banner
/// - `GET  /docs`              - Endpoint catalogue
/// - `POST /shorten`           - Allocate or reuse a short code
/// - `GET  /stats/{short_id}`  - Link statistics
/// - `GET  /{short_id}`        - Redirect (counts a click)
///
/// Static paths take precedence over `/{short_id}`; `docs` is shorter than a
/// generated code and can never shadow one.
pub fn shortener_routes() -> Router<ShortenerState> {
    Router::new()
        .route("/", get(shortener_root_handler))
        .route("/docs", get(shortener_docs_handler))
        .route("/shorten", post(shorten_handler))
        .route("/stats/{short_id}", get(stats_handler))
        .route("/{short_id}", get(redirect_handler))
}

/// To-do routes.
///
/// # Endpoints
///
/// - `GET    /`            - Service banner
/// - `GET    /docs`        - Endpoint catalogue
/// - `GET    /health`      - Database liveness
/// - `GET    /items`       - List items
/// - `POST   /items`       - Create an item
/// - `GET    /items/{id}`  - Fetch an item
/// - `PUT    /items/{id}`  - Replace an item
/// - `DELETE /items/{id}`  - Delete an item
pub fn todo_routes() -> Router<TodoState> {
    Router::new()
        .route("/", get(todo_root_handler))
        .route("/docs", get(todo_docs_handler))
        .route("/health", get(health_handler))
        .route("/items", get(list_items_handler).post(create_item_handler))
        .route(
            "/items/{id}",
            get(get_item_handler)
                .put(update_item_handler)
                .delete(delete_item_handler),
        )
}
