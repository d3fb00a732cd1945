//! DTOs for the auto-alias shortening endpoint.

use serde::{Deserialize, Serialize};
use validator::Validate;

/// Request to shorten a URL under a generated alias.
///
/// Accepted as a JSON body or as query parameters.
#[derive(Debug, Deserialize, Validate)]
pub struct ShortenRequest {
    /// The URL to shorten. Stored as given; only emptiness is checked.
    #[serde(default)]
    #[validate(length(min = 1, message = "URL is required"))]
    pub url: String,
}

/// Result of an auto-alias shortening.
#[derive(Debug, Serialize)]
pub struct ShortenResponse {
    pub original_url: String,
    pub shortened_url: String,
    pub alias: String,
}
