//! SQLite repository implementations.
//!
//! Concrete implementations of domain repository traits using SQLx runtime
//! queries with bound parameters.
//!
//! # Repositories
//!
//! - [`SqliteLinkRepository`] - Short link storage and click counting
//! - [`SqliteTodoRepository`] - To-do item CRUD

pub mod sqlite_link_repository;
pub mod sqlite_todo_repository;

pub use sqlite_link_repository::SqliteLinkRepository;
pub use sqlite_todo_repository::SqliteTodoRepository;
