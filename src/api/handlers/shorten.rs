//! Handler for auto-alias shortening.

use axum::{Json, extract::State};
use validator::Validate;

use crate::api::dto::shorten::{ShortenRequest, ShortenResponse};
use crate::api::extract::{ApiJson, ApiQuery};
use crate::error::AppError;
use crate::state::AppState;

/// Shortens a URL under a counter-derived base62 alias.
///
/// # Endpoint
///
/// `POST /shortenUrl`
///
/// # Request Body
///
/// ```json
/// { "url": "https://example.com/a" }
/// ```
///
/// # Response
///
/// ```json
/// {
///   "original_url": "https://example.com/a",
///   "shortened_url": "http://short.ly/4c93",
///   "alias": "4c93"
/// }
/// ```
///
/// # Errors
///
/// Returns 400 Bad Request if the body is malformed or `url` is missing or empty.
/// Returns 503 Service Unavailable if no identifier could be allocated.
pub async fn shorten_handler(
    State(state): State<AppState>,
    ApiJson(payload): ApiJson<ShortenRequest>,
) -> Result<Json<ShortenResponse>, AppError> {
    shorten(&state, payload).await
}

/// Query-string variant of [`shorten_handler`].
///
/// # Endpoint
///
/// `GET /shortenUrl?url=...`
pub async fn shorten_query_handler(
    State(state): State<AppState>,
    ApiQuery(params): ApiQuery<ShortenRequest>,
) -> Result<Json<ShortenResponse>, AppError> {
    shorten(&state, params).await
}

async fn shorten(
    state: &AppState,
    request: ShortenRequest,
) -> Result<Json<ShortenResponse>, AppError> {
    request.validate()?;

    let created = state.url_service.create_auto(request.url).await?;

    Ok(Json(ShortenResponse {
        original_url: created.mapping.original_url,
        shortened_url: created.shortened_url,
        alias: created.mapping.alias,
    }))
}
