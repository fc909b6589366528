//! Helper functions shared across layers.
//!
//! - [`code_generator`] - Random short code generation
//! - [`db_error`] - Storage error classification
//! - [`location`] - `Location` header encoding

pub mod code_generator;
pub mod db_error;
pub mod location;
