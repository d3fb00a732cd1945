//! HTTP request handlers for API endpoints.
//!
//! Each handler module corresponds to a logical grouping of endpoints.

pub mod custom_shorten;
pub mod health;
pub mod redirect;
pub mod shorten;

pub use custom_shorten::{custom_shorten_handler, custom_shorten_query_handler};
pub use health::health_handler;
pub use redirect::redirect_handler;
pub use shorten::{shorten_handler, shorten_query_handler};
