//! DTOs for the custom-alias shortening endpoint.

use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::application::services::CustomShortenInput;

/// Request to shorten a URL under a chosen or URL-derived alias.
///
/// Accepted as a JSON body or as query parameters.
#[derive(Debug, Deserialize, Validate)]
pub struct CustomShortenRequest {
    #[serde(default)]
    #[validate(length(min = 1, message = "URL is required"))]
    pub url: String,

    /// Alias to use; defaults to the last path segment of `url`.
    #[validate(length(max = 64))]
    pub custom_alias: Option<String>,

    /// Expiration date in `YYYY-MM-DD` form.
    pub expires_at: Option<String>,

    /// Host to use instead of the default short domain.
    #[validate(length(max = 255))]
    pub custom_domain: Option<String>,

    /// Caller identity resolved by the fronting auth layer.
    pub user_id: Option<i64>,
}

impl From<CustomShortenRequest> for CustomShortenInput {
    fn from(r: CustomShortenRequest) -> Self {
        CustomShortenInput {
            original_url: r.url,
            custom_alias: r.custom_alias,
            expires_at: r.expires_at,
            custom_domain: r.custom_domain,
            user_id: r.user_id,
        }
    }
}

/// Summary of a custom shortening, echoing the request inputs.
#[derive(Debug, Serialize)]
pub struct CustomShortenResponse {
    pub original_url: String,
    pub alias: String,
    pub custom_alias: Option<String>,
    pub expires_at: Option<String>,
    pub custom_domain: Option<String>,
    pub shortened_url: String,
    pub created_by: i64,
}
