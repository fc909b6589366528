//! SQLite implementation of to-do repository.

use async_trait::async_trait;
use sqlx::SqlitePool;
use std::sync::Arc;

use crate::domain::entities::{TodoFields, TodoItem};
use crate::domain::repositories::TodoRepository;
use crate::error::AppError;

#[derive(sqlx::FromRow)]
struct TodoItemRow {
    id: i64,
    title: String,
    description: Option<String>,
    completed: bool,
}

impl From<TodoItemRow> for TodoItem {
    fn from(r: TodoItemRow) -> Self {
        TodoItem {
            id: r.id,
            title: r.title,
            description: r.description,
            completed: r.completed,
        }
    }
}

/// SQLite repository for the `todo_items` table.
pub struct SqliteTodoRepository {
    pool: Arc<SqlitePool>,
}

impl SqliteTodoRepository {
    /// Creates a new repository with a database connection pool.
    pub fn new(pool: Arc<SqlitePool>) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl TodoRepository for SqliteTodoRepository {
    async fn create(&self, fields: TodoFields) -> Result<TodoItem, AppError> {
        let row = sqlx::query_as::<_, TodoItemRow>(
            r#"
            INSERT INTO todo_items (title, description, completed)
            VALUES (?1, ?2, ?3)
            RETURNING id, title, description, completed
            "#,
        )
        .bind(&fields.title)
        .bind(&fields.description)
        .bind(fields.completed)
        .fetch_one(self.pool.as_ref())
        .await?;

        Ok(row.into())
    }

    async fn list(&self) -> Result<Vec<TodoItem>, AppError> {
        let rows = sqlx::query_as::<_, TodoItemRow>(
            "SELECT id, title, description, completed FROM todo_items ORDER BY id",
        )
        .fetch_all(self.pool.as_ref())
        .await?;

        Ok(rows.into_iter().map(Into::into).collect())
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<TodoItem>, AppError> {
        let row = sqlx::query_as::<_, TodoItemRow>(
            "SELECT id, title, description, completed FROM todo_items WHERE id = ?1",
        )
        .bind(id)
        .fetch_optional(self.pool.as_ref())
        .await?;

        Ok(row.map(Into::into))
    }

    async fn update(&self, id: i64, fields: TodoFields) -> Result<bool, AppError> {
        let result = sqlx::query(
            r#"
            UPDATE todo_items
            SET title = ?1, description = ?2, completed = ?3
            WHERE id = ?4
            "#,
        )
        .bind(&fields.title)
        .bind(&fields.description)
        .bind(fields.completed)
        .bind(id)
        .execute(self.pool.as_ref())
        .await?;

        Ok(result.rows_affected() > 0)
    }

    async fn delete(&self, id: i64) -> Result<bool, AppError> {
        let result = sqlx::query("DELETE FROM todo_items WHERE id = ?1")
            .bind(id)
            .execute(self.pool.as_ref())
            .await?;

        Ok(result.rows_affected() > 0)
    }

    async fn count(&self) -> Result<i64, AppError> {
        let count = sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM todo_items")
            .fetch_one(self.pool.as_ref())
            .await?;

        Ok(count)
    }

    async fn ping(&self) -> Result<(), AppError> {
        sqlx::query_scalar::<_, i64>("SELECT 1")
            .fetch_one(self.pool.as_ref())
            .await?;

        Ok(())
    }
}
