//! In-memory storage for tests and single-process runs.

use async_trait::async_trait;
use chrono::Utc;
use serde_json::json;
use std::collections::HashMap;
use std::sync::{Mutex, MutexGuard};

use crate::domain::entities::{Counter, NewUrlMapping, UrlMapping};
use crate::domain::repositories::{CounterRepository, UrlRepository};
use crate::error::AppError;

/// Counter and mappings behind one mutex.
///
/// Implements both repository traits with the same atomicity the PostgreSQL
/// backend gets from row locks and the alias constraint. It only coordinates
/// callers inside one process.
pub struct InMemoryStore {
    inner: Mutex<State>,
}

struct State {
    counter: Counter,
    next_id: i64,
    by_alias: HashMap<String, UrlMapping>,
}

impl InMemoryStore {
    /// Creates an empty store whose counter starts at `floor`.
    pub fn new(floor: i64) -> Self {
        Self {
            inner: Mutex::new(State {
                counter: Counter::new(floor, Utc::now()),
                next_id: 1,
                by_alias: HashMap::new(),
            }),
        }
    }

    /// Number of stored mappings, expired ones included.
    ///
    /// # Panics
    ///
    /// Panics if the store mutex is poisoned.
    pub fn len(&self) -> usize {
        self.inner
            .lock()
            .expect("in-memory store mutex poisoned")
            .by_alias
            .len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn lock(&self) -> Result<MutexGuard<'_, State>, AppError> {
        self.inner
            .lock()
            .map_err(|_| AppError::storage("In-memory store mutex poisoned", json!({})))
    }
}

#[async_trait]
impl CounterRepository for InMemoryStore {
    async fn next(&self) -> Result<i64, AppError> {
        let mut state = self.lock().map_err(|_| {
            AppError::allocation(
                "Failed to allocate identifier",
                json!({ "reason": "store unavailable" }),
            )
        })?;

        let value = state.counter.current_value.checked_add(1).ok_or_else(|| {
            AppError::allocation(
                "Failed to allocate identifier",
                json!({ "reason": "counter exhausted" }),
            )
        })?;

        state.counter = Counter::new(value, Utc::now());
        Ok(value)
    }

    async fn current(&self) -> Result<Counter, AppError> {
        Ok(self.lock()?.counter.clone())
    }
}

#[async_trait]
impl UrlRepository for InMemoryStore {
    async fn insert(&self, new_mapping: NewUrlMapping) -> Result<UrlMapping, AppError> {
        let mut state = self.lock()?;
        let created_at = Utc::now();

        if new_mapping.expires_at.is_some_and(|e| e <= created_at) {
            return Err(AppError::bad_request(
                "Check constraint violation",
                json!({ "constraint": "urls_expiry_after_creation" }),
            ));
        }

        if state.by_alias.contains_key(&new_mapping.alias) {
            return Err(AppError::conflict(
                "Alias already exists",
                json!({ "alias": new_mapping.alias }),
            ));
        }

        let mapping = UrlMapping {
            id: state.next_id,
            original_url: new_mapping.original_url,
            alias: new_mapping.alias,
            custom_domain: new_mapping.custom_domain,
            expires_at: new_mapping.expires_at,
            created_at,
            created_by: new_mapping.created_by,
        };
        state.next_id += 1;
        state
            .by_alias
            .insert(mapping.alias.clone(), mapping.clone());

        Ok(mapping)
    }

    async fn find_by_alias(&self, alias: &str) -> Result<Option<UrlMapping>, AppError> {
        Ok(self.lock()?.by_alias.get(alias).cloned())
    }
}
