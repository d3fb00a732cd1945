//! PostgreSQL implementation of the allocation counter.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde_json::json;
use sqlx::PgPool;
use std::sync::Arc;

use crate::domain::entities::Counter;
use crate::domain::repositories::CounterRepository;
use crate::error::AppError;

/// PostgreSQL-backed counter stored in the `global_counter` singleton row.
///
/// Allocation is a single `UPDATE ... RETURNING` statement. The row lock taken by
/// the update serializes concurrent allocators across every process sharing the
/// database, and a failed statement leaves the value untouched.
pub struct PgCounterRepository {
    pool: Arc<PgPool>,
}

#[derive(sqlx::FromRow)]
struct CounterRow {
    current_value: i64,
    last_updated: DateTime<Utc>,
}

impl PgCounterRepository {
    /// Creates a new repository with a database connection pool.
    pub fn new(pool: Arc<PgPool>) -> Self {
        Self { pool }
    }

    /// Creates the singleton row if missing and raises it to at least `floor`.
    ///
    /// Never lowers an existing value, so re-running with a smaller floor is a no-op.
    pub async fn ensure_seeded(&self, floor: i64) -> Result<Counter, AppError> {
        let row = sqlx::query_as::<_, CounterRow>(
            r#"
            INSERT INTO global_counter (id, current_value)
            VALUES (1, $1)
            ON CONFLICT (id) DO UPDATE
                SET current_value = GREATEST(global_counter.current_value, EXCLUDED.current_value)
            RETURNING current_value, last_updated
            "#,
        )
        .bind(floor)
        .fetch_one(self.pool.as_ref())
        .await?;

        Ok(Counter::new(row.current_value, row.last_updated))
    }
}

#[async_trait]
impl CounterRepository for PgCounterRepository {
    async fn next(&self) -> Result<i64, AppError> {
        let value = sqlx::query_scalar::<_, i64>(
            r#"
            UPDATE global_counter
            SET current_value = current_value + 1,
                last_updated  = NOW()
            WHERE id = 1
            RETURNING current_value
            "#,
        )
        .fetch_optional(self.pool.as_ref())
        .await
        .map_err(|e| {
            tracing::warn!(error = %e, "Counter increment failed");
            AppError::allocation(
                "Failed to allocate identifier",
                json!({ "reason": e.to_string() }),
            )
        })?;

        value.ok_or_else(|| {
            AppError::allocation(
                "Failed to allocate identifier",
                json!({ "reason": "counter row is missing" }),
            )
        })
    }

    async fn current(&self) -> Result<Counter, AppError> {
        let row = sqlx::query_as::<_, CounterRow>(
            "SELECT current_value, last_updated FROM global_counter WHERE id = 1",
        )
        .fetch_optional(self.pool.as_ref())
        .await?;

        row.map(|r| Counter::new(r.current_value, r.last_updated))
            .ok_or_else(|| AppError::storage("Counter row is missing", json!({})))
    }
}
