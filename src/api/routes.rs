//! Shortening route configuration.

use crate::api::handlers::{
    custom_shorten_handler, custom_shorten_query_handler, shorten_handler, shorten_query_handler,
};
use crate::state::AppState;
use axum::{Router, routing::get};

/// Routes that create mappings.
///
/// # Endpoints
///
/// - `POST /shortenUrl`        - Shorten under a generated alias (JSON body)
/// - `GET  /shortenUrl`        - Same, with query parameters
/// - `POST /customShortenUrl`  - Shorten under a custom alias (JSON body)
/// - `GET  /customShortenUrl`  - Same, with query parameters
pub fn shorten_routes() -> Router<AppState> {
    Router::new()
        .route(
            "/shortenUrl",
            get(shorten_query_handler).post(shorten_handler),
        )
        .route(
            "/customShortenUrl",
            get(custom_shorten_query_handler).post(custom_shorten_handler),
        )
}
