//! PostgreSQL implementation of the URL mapping repository.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde_json::json;
use sqlx::PgPool;
use std::sync::Arc;

use crate::domain::entities::{NewUrlMapping, UrlMapping};
use crate::domain::repositories::UrlRepository;
use crate::error::AppError;

const ALIAS_CONSTRAINT: &str = "urls_alias_key";

/// PostgreSQL repository for URL mappings.
///
/// Alias uniqueness is owned by the `urls_alias_key` constraint. Inserts never
/// read first; a duplicate surfaces as a unique violation from the same statement.
pub struct PgUrlRepository {
    pool: Arc<PgPool>,
}

#[derive(sqlx::FromRow)]
struct UrlRow {
    id: i64,
    original_url: String,
    alias: String,
    custom_domain: Option<String>,
    expires_at: Option<DateTime<Utc>>,
    created_at: DateTime<Utc>,
    created_by: i64,
}

impl From<UrlRow> for UrlMapping {
    fn from(r: UrlRow) -> Self {
        UrlMapping {
            id: r.id,
            original_url: r.original_url,
            alias: r.alias,
            custom_domain: r.custom_domain,
            expires_at: r.expires_at,
            created_at: r.created_at,
            created_by: r.created_by,
        }
    }
}

impl PgUrlRepository {
    /// Creates a new repository with a database connection pool.
    pub fn new(pool: Arc<PgPool>) -> Self {
        Self { pool }
    }
}

fn is_alias_violation(e: &sqlx::Error) -> bool {
    let Some(db_err) = e.as_database_error() else {
        return false;
    };

    db_err.is_unique_violation() && matches!(db_err.constraint(), Some(ALIAS_CONSTRAINT))
}

#[async_trait]
impl UrlRepository for PgUrlRepository {
    async fn insert(&self, new_mapping: NewUrlMapping) -> Result<UrlMapping, AppError> {
        let result = sqlx::query_as::<_, UrlRow>(
            r#"
            INSERT INTO urls (original_url, alias, custom_domain, expires_at, created_by)
            VALUES ($1, $2, $3, $4, $5)
            RETURNING id, original_url, alias, custom_domain, expires_at, created_at, created_by
            "#,
        )
        .bind(&new_mapping.original_url)
        .bind(&new_mapping.alias)
        .bind(&new_mapping.custom_domain)
        .bind(new_mapping.expires_at)
        .bind(new_mapping.created_by)
        .fetch_one(self.pool.as_ref())
        .await;

        match result {
            Ok(row) => Ok(row.into()),
            Err(e) if is_alias_violation(&e) => Err(AppError::conflict(
                "Alias already exists",
                json!({ "alias": new_mapping.alias }),
            )),
            Err(e) => Err(e.into()),
        }
    }

    async fn find_by_alias(&self, alias: &str) -> Result<Option<UrlMapping>, AppError> {
        // LIMIT 2: a second row means the alias constraint is broken.
        let mut rows = sqlx::query_as::<_, UrlRow>(
            r#"
            SELECT id, original_url, alias, custom_domain, expires_at, created_at, created_by
            FROM urls
            WHERE alias = $1
            LIMIT 2
            "#,
        )
        .bind(alias)
        .fetch_all(self.pool.as_ref())
        .await?;

        if rows.len() > 1 {
            tracing::error!(alias, "Alias matches more than one mapping");
            return Err(AppError::storage(
                "Alias matches more than one mapping",
                json!({ "alias": alias }),
            ));
        }

        Ok(rows.pop().map(UrlMapping::from))
    }
}
