//! Core domain entities.
//!
//! - [`Counter`] - The singleton allocation counter
//! - [`UrlMapping`] - One persisted alias → URL shortening
//!
//! Creation inputs use separate structs (`NewUrlMapping`) the same way the
//! persisted rows and their inserts differ.

pub mod counter;
pub mod url_mapping;

pub use counter::Counter;
pub use url_mapping::{NewUrlMapping, SYSTEM_PRINCIPAL, UrlMapping};
