//! Data Transfer Objects for API requests and responses.
//!
//! All DTOs use Serde for JSON serialization/deserialization. Field names
//! follow the public wire format, which differs from the entity names
//! (`short_id`/`full_url` for `short_code`/`target_url`).

pub mod health;
pub mod service_info;
pub mod shorten;
pub mod stats;
pub mod todo;
