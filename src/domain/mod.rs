//! Domain layer containing business entities and repository contracts.
//!
//! # Architecture
//!
//! - [`entities`] - Core business data structures
//! - [`repositories`] - Data access trait definitions
//!
//! The domain layer has no dependency on HTTP or on a particular database.
//! Business logic lives in [`crate::application::services`]; concrete storage
//! lives in [`crate::infrastructure::persistence`].

pub mod entities;
pub mod repositories;
