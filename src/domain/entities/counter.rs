//! Counter entity backing auto-generated aliases.

use chrono::{DateTime, Utc};

/// Snapshot of the singleton allocation counter.
///
/// Only the allocator mutates the underlying row; this struct is a read-only view.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Counter {
    pub current_value: i64,
    pub last_updated: DateTime<Utc>,
}

impl Counter {
    pub fn new(current_value: i64, last_updated: DateTime<Utc>) -> Self {
        Self {
            current_value,
            last_updated,
        }
    }
}
