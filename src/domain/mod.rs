//! Domain layer containing business entities and storage contracts.
//!
//! # Architecture
//!
//! - [`entities`] - Core business data structures
//! - [`repositories`] - Data access trait definitions
//!
//! The domain layer has no dependencies on infrastructure or presentation layers.
//! Repository traits define the contracts implemented by
//! [`crate::infrastructure::persistence`]; business rules live in
//! [`crate::application::services`].
//!
//! # Alias Allocation Flow
//!
//! 1. [`repositories::CounterRepository::next`] atomically increments the singleton counter
//! 2. [`crate::utils::base62::encode`] turns the value into an alias
//! 3. [`repositories::UrlRepository::insert`] persists the mapping under the
//!    storage-level uniqueness constraint

pub mod entities;
pub mod repositories;
