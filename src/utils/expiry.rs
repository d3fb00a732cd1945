//! Expiration date parsing for custom mappings.

use chrono::{DateTime, NaiveDate, Utc};
use serde_json::json;

use crate::error::AppError;

/// Accepted `expires_at` format.
pub const EXPIRY_FORMAT: &str = "%Y-%m-%d";

/// Parses a `YYYY-MM-DD` expiry into midnight UTC of that date.
///
/// # Errors
///
/// Returns [`AppError::Validation`] if the value is not a calendar date in
/// `YYYY-MM-DD` form, or if the resulting instant is not strictly after `now`.
pub fn parse_expiry(raw: &str, now: DateTime<Utc>) -> Result<DateTime<Utc>, AppError> {
    let date = NaiveDate::parse_from_str(raw.trim(), EXPIRY_FORMAT).map_err(|e| {
        AppError::bad_request(
            "Invalid expiration date format. Use YYYY-MM-DD.",
            json!({ "expires_at": raw, "reason": e.to_string() }),
        )
    })?;

    let expires_at = date.and_hms_opt(0, 0, 0).map(|t| t.and_utc()).ok_or_else(|| {
        AppError::bad_request(
            "Invalid expiration date format. Use YYYY-MM-DD.",
            json!({ "expires_at": raw }),
        )
    })?;

    if expires_at <= now {
        return Err(AppError::bad_request(
            "Expiration date must be in the future.",
            json!({ "expires_at": raw }),
        ));
    }

    Ok(expires_at)
}
