//! Repository trait for the singleton allocation counter.

use crate::domain::entities::Counter;
use crate::error::AppError;
use async_trait::async_trait;

/// Source of globally unique, strictly increasing integers.
///
/// Implementations must make increment-and-read one indivisible step in the
/// backing store so that any number of processes can allocate concurrently.
///
/// # Implementations
///
/// - [`crate::infrastructure::persistence::PgCounterRepository`] - PostgreSQL implementation
/// - [`crate::infrastructure::persistence::InMemoryStore`] - Single-process store
/// - Test mocks available with `cfg(test)`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait CounterRepository: Send + Sync {
    /// Increments the counter and returns the post-increment value.
    ///
    /// A value is never handed out twice, even if the caller later fails to use it.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Allocation`] if the increment could not be committed.
    /// The counter is left unchanged in that case.
    async fn next(&self) -> Result<i64, AppError>;

    /// Reads the current counter state without modifying it.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Storage`] on database errors or if the counter row is missing.
    async fn current(&self) -> Result<Counter, AppError>;
}
