//! Top-level routers for the two services.
//!
//! # Middleware
//!
//! - **Tracing** - Structured request/response logging
//! - **Path normalization** - Trailing slash handling (`/items/` → `/items`)

use crate::api::middleware::tracing;
use crate::api::routes::{shortener_routes, todo_routes};
use crate::state::{ShortenerState, TodoState};
use axum::Router;
use tower::Layer;
use tower_http::normalize_path::{NormalizePath, NormalizePathLayer};

/// Builds the shortener application with its middleware stack.
pub fn shortener_router(state: ShortenerState) -> NormalizePath<Router> {
    let router = shortener_routes()
        .with_state(state)
        .layer(tracing::layer());

    NormalizePathLayer::trim_trailing_slash().layer(router)
}

/// Builds the to-do application with its middleware stack.
pub fn todo_router(state: TodoState) -> NormalizePath<Router> {
    let router = todo_routes().with_state(state).layer(tracing::layer());

    NormalizePathLayer::trim_trailing_slash().layer(router)
}
