//! Core domain entities.
//!
//! Entities are plain data structures without storage concerns.
//!
//! # Entity Types
//!
//! - [`ShortLink`] - A short code mapped to a target URL with a click counter
//! - [`TodoItem`] - A to-do list entry
//!
//! Creation inputs live next to their entity: [`NewShortLink`] for inserts,
//! [`TodoFields`] for both creating and fully replacing an item.

pub mod short_link;
pub mod todo_item;

pub use short_link::{NewShortLink, ShortLink};
pub use todo_item::{TodoFields, TodoItem};
