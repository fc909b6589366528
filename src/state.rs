//! Shared handler state for each service.

use sqlx::SqlitePool;
use std::sync::Arc;

use crate::application::services::{LinkService, TodoService};
use crate::infrastructure::persistence::{SqliteLinkRepository, SqliteTodoRepository};

/// State injected into the shortener's handlers.
#[derive(Clone)]
pub struct ShortenerState {
    pub link_service: Arc<LinkService<SqliteLinkRepository>>,
}

impl ShortenerState {
    /// Wires the link service over `pool`.
    pub fn new(pool: Arc<SqlitePool>, base_url: impl Into<String>, max_attempts: usize) -> Self {
        let link_repository = Arc::new(SqliteLinkRepository::new(pool));

        Self {
            link_service: Arc::new(LinkService::new(link_repository, base_url, max_attempts)),
        }
    }
}

/// State injected into the to-do service's handlers.
#[derive(Clone)]
pub struct TodoState {
    pub todo_service: Arc<TodoService<SqliteTodoRepository>>,
}

impl TodoState {
    /// Wires the to-do service over `pool`.
    pub fn new(pool: Arc<SqlitePool>) -> Self {
        let todo_repository = Arc::new(SqliteTodoRepository::new(pool));

        Self {
            todo_service: Arc::new(TodoService::new(todo_repository)),
        }
    }
}
