//! To-do item CRUD service.

use std::sync::Arc;

use serde_json::json;
use tracing::{debug, warn};

use crate::domain::entities::{TodoFields, TodoItem};
use crate::domain::repositories::TodoRepository;
use crate::error::AppError;

/// Service for creating, reading, replacing and deleting to-do items.
pub struct TodoService<T: TodoRepository> {
    todo_repository: Arc<T>,
}

impl<T: TodoRepository> TodoService<T> {
    /// Creates a new to-do service.
    pub fn new(todo_repository: Arc<T>) -> Self {
        Self { todo_repository }
    }

    /// Stores a new item and returns it with its assigned id.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    pub async fn create(&self, fields: TodoFields) -> Result<TodoItem, AppError> {
        let item = self.todo_repository.create(fields).await?;
        debug!(id = item.id, "Item created");
        Ok(item)
    }

    /// Returns every item in insertion order.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    pub async fn list(&self) -> Result<Vec<TodoItem>, AppError> {
        self.todo_repository.list().await
    }

    /// Returns item `id`.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if no such item exists.
    pub async fn get(&self, id: i64) -> Result<TodoItem, AppError> {
        self.todo_repository
            .find_by_id(id)
            .await?
            .ok_or_else(|| not_found(id))
    }

    /// Replaces every field of item `id`.
    ///
    /// The returned item echoes the submitted fields; storage is not re-read.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if no such item exists. Nothing is created
    /// in that case.
    pub async fn update(&self, id: i64, fields: TodoFields) -> Result<TodoItem, AppError> {
        if !self.todo_repository.update(id, fields.clone()).await? {
            return Err(not_found(id));
        }

        debug!(id, "Item replaced");
        Ok(TodoItem::from_fields(id, fields))
    }

    /// Deletes item `id`.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if no such item exists.
    pub async fn delete(&self, id: i64) -> Result<(), AppError> {
        if !self.todo_repository.delete(id).await? {
            return Err(not_found(id));
        }

        debug!(id, "Item deleted");
        Ok(())
    }

    /// Returns true if the database answers a trivial query.
    pub async fn is_healthy(&self) -> bool {
        match self.todo_repository.ping().await {
            Ok(()) => true,
            Err(e) => {
                warn!(error = %e, "Database health check failed");
                false
            }
        }
    }
}

fn not_found(id: i64) -> AppError {
    AppError::not_found("Item not found", json!({ "id": id }))
}
