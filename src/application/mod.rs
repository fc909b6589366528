//! Application layer services implementing business logic.
//!
//! Services consume repository traits and give HTTP handlers a small,
//! storage-agnostic API.
//!
//! # Available Services
//!
//! - [`services::link_service::LinkService`] - Short code allocation, redirects and stats
//! - [`services::todo_service::TodoService`] - To-do item CRUD

pub mod services;
