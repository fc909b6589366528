//! HTTP request handlers for API endpoints.
//!
//! Each handler module corresponds to a logical grouping of endpoints.

pub mod health;
pub mod items;
pub mod redirect;
pub mod service_info;
pub mod shorten;
pub mod stats;

pub use health::health_handler;
pub use items::{
    create_item_handler, delete_item_handler, get_item_handler, list_items_handler,
    update_item_handler,
};
pub use redirect::redirect_handler;
pub use service_info::{
    shortener_docs_handler, shortener_root_handler, todo_docs_handler, todo_root_handler,
};
pub use shorten::shorten_handler;
pub use stats::stats_handler;
