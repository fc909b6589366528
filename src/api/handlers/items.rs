//! Handlers for to-do item endpoints.
//!
//! # Endpoints
//!
//! - `POST   /items`       - Create an item
//! - `GET    /items`       - List all items
//! - `GET    /items/{id}`  - Fetch one item
//! - `PUT    /items/{id}`  - Replace an item
//! - `DELETE /items/{id}`  - Delete an item
//!
//! Unknown ids yield 404 Not Found with message `Item not found`.

use axum::{
    Json,
    extract::{Path, State},
};

use crate::api::dto::todo::{DeleteResponse, TodoItemRequest, TodoItemResponse};
use crate::error::AppError;
use crate::state::TodoState;

/// `POST /items`
pub async fn create_item_handler(
    State(state): State<TodoState>,
    Json(payload): Json<TodoItemRequest>,
) -> Result<Json<TodoItemResponse>, AppError> {
    let item = state.todo_service.create(payload.into()).await?;
    Ok(Json(item.into()))
}

/// `GET /items`
pub async fn list_items_handler(
    State(state): State<TodoState>,
) -> Result<Json<Vec<TodoItemResponse>>, AppError> {
    let items = state.todo_service.list().await?;
    Ok(Json(items.into_iter().map(Into::into).collect()))
}

/// `GET /items/{id}`
pub async fn get_item_handler(
    State(state): State<TodoState>,
    Path(id): Path<i64>,
) -> Result<Json<TodoItemResponse>, AppError> {
    let item = state.todo_service.get(id).await?;
    Ok(Json(item.into()))
}

/// `PUT /items/{id}`
///
/// Full overwrite: omitted `description` becomes null and omitted
/// `completed` becomes false. The response echoes the submitted fields.
pub async fn update_item_handler(
    State(state): State<TodoState>,
    Path(id): Path<i64>,
    Json(payload): Json<TodoItemRequest>,
) -> Result<Json<TodoItemResponse>, AppError> {
    let item = state.todo_service.update(id, payload.into()).await?;
    Ok(Json(item.into()))
}

/// `DELETE /items/{id}`
pub async fn delete_item_handler(
    State(state): State<TodoState>,
    Path(id): Path<i64>,
) -> Result<Json<DeleteResponse>, AppError> {
    state.todo_service.delete(id).await?;

    Ok(Json(DeleteResponse {
        message: "Item deleted successfully".to_string(),
    }))
}
