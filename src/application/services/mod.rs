//! Business logic services for the application layer.

pub mod link_service;
pub mod todo_service;

pub use link_service::LinkService;
pub use todo_service::TodoService;
