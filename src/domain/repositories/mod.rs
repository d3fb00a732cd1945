//! Repository trait definitions for the domain layer.
//!
//! # Architecture
//!
//! - Traits define the contract for data operations
//! - Implementations live in `crate::infrastructure::persistence`
//! - Mock implementations are auto-generated via `mockall` for testing
//!
//! # Available Repositories
//!
//! - [`CounterRepository`] - Atomic allocation of unique integers
//! - [`UrlRepository`] - Alias → URL mapping storage
//!
//! # Testing
//!
//! See integration tests in `tests/repository_*.rs` for usage examples.

pub mod counter_repository;
pub mod url_repository;

pub use counter_repository::CounterRepository;
pub use url_repository::UrlRepository;

#[cfg(test)]
pub use counter_repository::MockCounterRepository;
#[cfg(test)]
pub use url_repository::MockUrlRepository;
