//! Repository trait for alias → URL mappings.

use crate::domain::entities::{NewUrlMapping, UrlMapping};
use crate::error::AppError;
use async_trait::async_trait;

/// Repository interface for URL mappings.
///
/// Aliases are unique across every mapping regardless of how they were created.
///
/// # Implementations
///
/// - [`crate::infrastructure::persistence::PgUrlRepository`] - PostgreSQL implementation
/// - [`crate::infrastructure::persistence::InMemoryStore`] - Single-process store
/// - Test mocks available with `cfg(test)`
///
/// # Examples
///
/// See integration tests: `tests/repository_url.rs`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait UrlRepository: Send + Sync {
    /// Inserts a new mapping.
    ///
    /// The uniqueness check and the insert are a single atomic step; there is no
    /// window between them for a concurrent writer.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Conflict`] if the alias is already taken.
    /// Returns [`AppError::Validation`] if `expires_at` is not after the creation time.
    /// Returns [`AppError::Storage`] on database errors.
    async fn insert(&self, new_mapping: NewUrlMapping) -> Result<UrlMapping, AppError>;

    /// Finds a mapping by alias, including expired ones.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Storage`] on database errors or if more than one row
    /// carries the alias.
    async fn find_by_alias(&self, alias: &str) -> Result<Option<UrlMapping>, AppError>;
}
