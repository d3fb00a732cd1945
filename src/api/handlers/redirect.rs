//! Handler for short URL redirect.

use axum::{
    extract::{Path, State},
    http::{HeaderValue, StatusCode, header},
    response::IntoResponse,
};
use serde_json::json;
use tracing::debug;

use crate::error::AppError;
use crate::state::AppState;

/// Redirects an alias to its original URL.
///
/// # Endpoint
///
/// `GET /{alias}`
///
/// # Response
///
/// 307 Temporary Redirect, so clients and caches do not treat the mapping as permanent.
///
/// # Errors
///
/// Returns 404 Not Found if the alias doesn't exist or has expired.
pub async fn redirect_handler(
    Path(alias): Path<String>,
    State(state): State<AppState>,
) -> Result<impl IntoResponse, AppError> {
    let mapping = state.url_service.resolve(&alias).await?;
    debug!(alias = %mapping.alias, "Redirecting");

    // Stored URLs are not validated, so they may not be legal header values.
    let location = HeaderValue::try_from(mapping.original_url.as_str()).map_err(|_| {
        AppError::storage(
            "Stored URL cannot be used as a redirect target",
            json!({ "alias": mapping.alias }),
        )
    })?;

    Ok((StatusCode::TEMPORARY_REDIRECT, [(header::LOCATION, location)]))
}
