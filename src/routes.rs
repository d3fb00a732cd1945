//! Top-level router configuration.
//!
//! # Route Structure
//!
//! - `GET  /{alias}`            - Short link redirect
//! - `GET  /health`             - Health check
//! - `/shortenUrl`              - Auto-alias shortening (GET query or POST JSON)
//! - `/customShortenUrl`        - Custom-alias shortening (GET query or POST JSON)
//!
//! # Middleware
//!
//! - **Tracing** - Structured request/response logging
//! - **Path normalization** - Trailing slash handling

use crate::api;
use crate::api::handlers::{health_handler, redirect_handler};
use crate::api::middleware::trace;
use crate::state::AppState;
use axum::Router;
use axum::routing::get;
use tower::Layer;
use tower_http::normalize_path::{NormalizePath, NormalizePathLayer};

/// Constructs the application router with all routes and middleware.
///
/// Static routes take precedence over `/{alias}`, which is why those names are
/// reserved in [`crate::utils::alias`].
pub fn app_router(state: AppState) -> NormalizePath<Router> {
    let router = Router::new()
        .route("/{alias}", get(redirect_handler))
        .route("/health", get(health_handler))
        .merge(api::routes::shorten_routes())
        .with_state(state)
        .layer(trace::layer());

    NormalizePathLayer::trim_trailing_slash().layer(router)
}
