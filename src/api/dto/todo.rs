//! DTOs for to-do item endpoints.

use serde::{Deserialize, Serialize};

use crate::domain::entities::{TodoFields, TodoItem};

/// Body of `POST /items` and `PUT /items/{id}`.
///
/// Only `title` is required. On update, omitted fields are reset to their
/// defaults rather than kept.
#[derive(Debug, Deserialize)]
pub struct TodoItemRequest {
    pub title: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub completed: bool,
}

impl From<TodoItemRequest> for TodoFields {
    fn from(req: TodoItemRequest) -> Self {
        TodoFields {
            title: req.title,
            description: req.description,
            completed: req.completed,
        }
    }
}

/// An item as returned by every item endpoint.
#[derive(Debug, Serialize)]
pub struct TodoItemResponse {
    pub id: i64,
    pub title: String,
    pub description: Option<String>,
    pub completed: bool,
}

impl From<TodoItem> for TodoItemResponse {
    fn from(item: TodoItem) -> Self {
        TodoItemResponse {
            id: item.id,
            title: item.title,
            description: item.description,
            completed: item.completed,
        }
    }
}

/// Confirmation returned by `DELETE /items/{id}`.
#[derive(Debug, Serialize)]
pub struct DeleteResponse {
    pub message: String,
}
