//! Repository trait for to-do item data access.

use crate::domain::entities::{TodoFields, TodoItem};
use crate::error::AppError;
use async_trait::async_trait;

/// Repository interface for to-do items keyed by `id`.
///
/// # Implementations
///
/// - [`crate::infrastructure::persistence::SqliteTodoRepository`] - SQLite implementation
/// - Test mocks available with `cfg(test)`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait TodoRepository: Send + Sync {
    /// Inserts an item and returns it with its assigned id.
    async fn create(&self, fields: TodoFields) -> Result<TodoItem, AppError>;

    /// Returns every item in insertion order.
    async fn list(&self) -> Result<Vec<TodoItem>, AppError>;

    async fn find_by_id(&self, id: i64) -> Result<Option<TodoItem>, AppError>;

    /// Overwrites all fields of item `id`.
    ///
    /// Returns `Ok(false)` if no such item exists; nothing is inserted.
    async fn update(&self, id: i64, fields: TodoFields) -> Result<bool, AppError>;

    /// Deletes item `id`. Returns `Ok(false)` if it did not exist.
    async fn delete(&self, id: i64) -> Result<bool, AppError>;

    async fn count(&self) -> Result<i64, AppError>;

    /// Round-trips a trivial query to check the database answers.
    async fn ping(&self) -> Result<(), AppError>;
}
