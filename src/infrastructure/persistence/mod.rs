//! Repository implementations.
//!
//! PostgreSQL repositories use SQLx with bound parameters; atomicity comes from
//! single-statement updates and table constraints, never from read-then-write.
//!
//! # Repositories
//!
//! - [`PgCounterRepository`] - Singleton counter allocation
//! - [`PgUrlRepository`] - URL mapping storage and lookup
//! - [`InMemoryStore`] - Both contracts in process memory

pub mod memory_store;
pub mod pg_counter_repository;
pub mod pg_url_repository;

pub use memory_store::InMemoryStore;
pub use pg_counter_repository::PgCounterRepository;
pub use pg_url_repository::PgUrlRepository;
