//! Data Transfer Objects for API requests and responses.
//!
//! All DTOs use Serde for JSON and query-string (de)serialization and validator
//! for input validation.

pub mod custom_shorten;
pub mod health;
pub mod shorten;
