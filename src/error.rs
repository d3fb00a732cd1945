//! Application error type shared by every layer.
//!
//! Errors carry a human-readable message plus a structured `details` payload and
//! render as a uniform JSON body:
//!
//! ```json
//! { "error": { "code": "conflict", "message": "Alias already exists", "details": { "alias": "promo" } } }
//! ```

use axum::{
    Json,
    extract::rejection::{JsonRejection, QueryRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;
use serde_json::{Value, json};

#[derive(Serialize)]
struct ErrorBody {
    error: ErrorInfo,
}

/// Serializable error payload.
#[derive(Debug, Serialize)]
pub struct ErrorInfo {
    pub code: &'static str,
    pub message: String,
    pub details: Value,
}

/// Error taxonomy surfaced to the request layer.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// Malformed or missing input. The caller can fix the request.
    #[error("{message}")]
    Validation { message: String, details: Value },

    /// No matching, unexpired mapping.
    #[error("{message}")]
    NotFound { message: String, details: Value },

    /// Alias already taken.
    #[error("{message}")]
    Conflict { message: String, details: Value },

    /// Counter increment failed. Nothing was consumed, safe to retry.
    #[error("{message}")]
    Allocation { message: String, details: Value },

    /// Any other persistence failure.
    #[error("{message}")]
    Storage { message: String, details: Value },
}

impl AppError {
    pub fn bad_request(message: impl Into<String>, details: Value) -> Self {
        Self::Validation {
            message: message.into(),
            details,
        }
    }

    pub fn not_found(message: impl Into<String>, details: Value) -> Self {
        Self::NotFound {
            message: message.into(),
            details,
        }
    }

    pub fn conflict(message: impl Into<String>, details: Value) -> Self {
        Self::Conflict {
            message: message.into(),
            details,
        }
    }

    pub fn allocation(message: impl Into<String>, details: Value) -> Self {
        Self::Allocation {
            message: message.into(),
            details,
        }
    }

    pub fn storage(message: impl Into<String>, details: Value) -> Self {
        Self::Storage {
            message: message.into(),
            details,
        }
    }

    /// Returns true for failures a caller may retry without side effects.
    pub fn is_retryable(&self) -> bool {
        matches!(self, Self::Allocation { .. })
    }

    fn parts(&self) -> (StatusCode, &'static str) {
        match self {
            Self::Validation { .. } => (StatusCode::BAD_REQUEST, "validation_error"),
            Self::NotFound { .. } => (StatusCode::NOT_FOUND, "not_found"),
            Self::Conflict { .. } => (StatusCode::CONFLICT, "conflict"),
            Self::Allocation { .. } => (StatusCode::SERVICE_UNAVAILABLE, "allocation_error"),
            Self::Storage { .. } => (StatusCode::INTERNAL_SERVER_ERROR, "storage_error"),
        }
    }

    /// Converts the error into its serializable payload.
    pub fn to_error_info(&self) -> ErrorInfo {
        let (_, code) = self.parts();
        let (message, details) = match self {
            Self::Validation { message, details }
            | Self::NotFound { message, details }
            | Self::Conflict { message, details }
            | Self::Allocation { message, details }
            | Self::Storage { message, details } => (message.clone(), details.clone()),
        };

        ErrorInfo {
            code,
            message,
            details,
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, _) = self.parts();

        if status.is_server_error() {
            tracing::error!(error = %self, "Request failed");
        }

        let body = ErrorBody {
            error: self.to_error_info(),
        };

        (status, Json(body)).into_response()
    }
}

impl From<sqlx::Error> for AppError {
    fn from(e: sqlx::Error) -> Self {
        if let Some(db) = e.as_database_error() {
            if db.is_unique_violation() {
                return AppError::conflict(
                    "Unique constraint violation",
                    json!({ "constraint": db.constraint() }),
                );
            }
            if db.is_check_violation() {
                return AppError::bad_request(
                    "Check constraint violation",
                    json!({ "constraint": db.constraint() }),
                );
            }
        }

        tracing::error!(error = %e, "Database error");
        AppError::storage("Database error", json!({}))
    }
}

impl From<JsonRejection> for AppError {
    fn from(rejection: JsonRejection) -> Self {
        AppError::bad_request(
            "Invalid JSON body",
            json!({ "reason": rejection.body_text() }),
        )
    }
}

impl From<QueryRejection> for AppError {
    fn from(rejection: QueryRejection) -> Self {
        AppError::bad_request(
            "Invalid query parameters",
            json!({ "reason": rejection.body_text() }),
        )
    }
}

impl From<validator::ValidationErrors> for AppError {
    fn from(e: validator::ValidationErrors) -> Self {
        AppError::bad_request(
            "Request validation failed",
            serde_json::to_value(&e).unwrap_or_default(),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_codes() {
        let cases = [
            (AppError::bad_request("x", json!({})), StatusCode::BAD_REQUEST),
            (AppError::not_found("x", json!({})), StatusCode::NOT_FOUND),
            (AppError::conflict("x", json!({})), StatusCode::CONFLICT),
            (
                AppError::allocation("x", json!({})),
                StatusCode::SERVICE_UNAVAILABLE,
            ),
            (
                AppError::storage("x", json!({})),
                StatusCode::INTERNAL_SERVER_ERROR,
            ),
        ];

        for (err, status) in cases {
            assert_eq!(err.into_response().status(), status);
        }
    }

    #[test]
    fn test_only_allocation_is_retryable() {
        assert!(AppError::allocation("x", json!({})).is_retryable());
        assert!(!AppError::storage("x", json!({})).is_retryable());
        assert!(!AppError::conflict("x", json!({})).is_retryable());
    }

    #[test]
    fn test_error_info_carries_code_and_details() {
        let info = AppError::conflict("Alias already exists", json!({ "alias": "promo" }))
            .to_error_info();

        assert_eq!(info.code, "conflict");
        assert_eq!(info.message, "Alias already exists");
        assert_eq!(info.details["alias"], "promo");
    }

    #[test]
    fn test_display_uses_message() {
        let err = AppError::bad_request("URL is required", json!({}));
        assert_eq!(err.to_string(), "URL is required");
    }
}
