//! Handler for custom-alias shortening.

use axum::{Json, extract::State};
use validator::Validate;

use crate::api::dto::custom_shorten::{CustomShortenRequest, CustomShortenResponse};
use crate::api::extract::{ApiJson, ApiQuery};
use crate::error::AppError;
use crate::state::AppState;

/// Shortens a URL under a caller-chosen alias, optionally on a custom domain and
/// with an expiration date.
///
/// # Endpoint
///
/// `POST /customShortenUrl`
///
/// # Request Body
///
/// ```json
/// {
///   "url": "https://example.com/b",
///   "custom_alias": "promo",        // optional, defaults to the last path segment
///   "expires_at": "2030-01-01",     // optional, must be in the future
///   "custom_domain": "https://go.example.com", // optional
///   "user_id": 1
/// }
/// ```
///
/// # Response
///
/// ```json
/// {
///   "original_url": "https://example.com/b",
///   "alias": "promo",
///   "custom_alias": "promo",
///   "expires_at": "2030-01-01",
///   "custom_domain": null,
///   "shortened_url": "http://short.ly/promo",
///   "created_by": 1
/// }
/// ```
///
/// # Errors
///
/// Returns 400 Bad Request on a malformed body, missing `user_id`, empty `url`,
/// bad alias, or bad expiry.
/// Returns 409 Conflict if the alias is already in use.
pub async fn custom_shorten_handler(
    State(state): State<AppState>,
    ApiJson(payload): ApiJson<CustomShortenRequest>,
) -> Result<Json<CustomShortenResponse>, AppError> {
    custom_shorten(&state, payload).await
}

/// Query-string variant of [`custom_shorten_handler`].
///
/// # Endpoint
///
/// `GET /customShortenUrl?url=...&custom_alias=...&user_id=...`
pub async fn custom_shorten_query_handler(
    State(state): State<AppState>,
    ApiQuery(params): ApiQuery<CustomShortenRequest>,
) -> Result<Json<CustomShortenResponse>, AppError> {
    custom_shorten(&state, params).await
}

async fn custom_shorten(
    state: &AppState,
    request: CustomShortenRequest,
) -> Result<Json<CustomShortenResponse>, AppError> {
    request.validate()?;

    let custom_alias = request.custom_alias.clone();
    let expires_at = request.expires_at.clone();

    let created = state.url_service.create_custom(request.into()).await?;

    Ok(Json(CustomShortenResponse {
        original_url: created.mapping.original_url,
        alias: created.mapping.alias,
        custom_alias,
        expires_at,
        custom_domain: created.mapping.custom_domain,
        shortened_url: created.shortened_url,
        created_by: created.mapping.created_by,
    }))
}
