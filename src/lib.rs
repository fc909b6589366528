//! # Pocket Services
//!
//! Two small JSON services built with Axum and SQLite, sharing one library:
//!
//! - **URL shortener** - maps long URLs to 6-character codes, redirects and
//!   counts clicks
//! - **To-do list** - CRUD over titled items
//!
//! ## Architecture
//!
//! - **Domain Layer** ([`domain`]) - Core business entities and repository traits
//! - **Application Layer** ([`application`]) - Business logic and service orchestration
//! - **Infrastructure Layer** ([`infrastructure`]) - SQLite pool, migrations, repositories
//! - **API Layer** ([`api`]) - REST handlers, DTOs, routes and middleware
//!
//! ## Quick Start
//!
//! ```bash
//! export DATABASE_URL="sqlite://./data/urls.db"
//! cargo run -- shortener
//!
//! export DATABASE_URL="sqlite://./data/todo.db"
//! cargo run -- todo --listen 127.0.0.1:8001
//! ```
//!
//! ## Configuration
//!
//! Service configuration is loaded from environment variables via [`config::Config`].
//! See [`config`] module for available options.

pub mod api;
pub mod application;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod state;
pub mod utils;

pub mod config;
pub mod server;
pub mod telemetry;

pub mod routes;

pub use error::AppError;
pub use state::{ShortenerState, TodoState};

/// Commonly used types for external consumers.
///
/// Re-exports frequently used types to simplify imports for library users
/// and integration tests.
pub mod prelude {
    pub use crate::application::services::{LinkService, TodoService};
    pub use crate::domain::entities::{NewShortLink, ShortLink, TodoFields, TodoItem};
    pub use crate::error::AppError;
    pub use crate::state::{ShortenerState, TodoState};
}
