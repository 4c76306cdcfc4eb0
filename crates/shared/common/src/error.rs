//! Unified error handling.
//!
//! Provides a single error type that converts into the service's JSON
//! failure shape: `{"status": "fail", "message": "..."}`.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use domain::{DomainError, MSG_DUPLICATE_EMAIL, MSG_INVALID_PAYLOAD, MSG_USER_NOT_FOUND, STATUS_FAIL};
use serde::Serialize;
use thiserror::Error;

/// Application error types.
#[derive(Error, Debug)]
pub enum AppError {
    // Client errors
    #[error("Invalid payload")]
    InvalidPayload,

    #[error("Email already exists")]
    DuplicateEmail,

    #[error("User not found")]
    UserNotFound,

    // External service errors
    #[cfg(feature = "database")]
    #[error("Database error")]
    Database(#[from] sea_orm::DbErr),

    // Internal
    #[error("Internal server error")]
    Internal(String),
}

/// Error response body for HTTP
#[derive(Debug, Serialize)]
struct ErrorResponse {
    status: &'static str,
    message: String,
}

impl AppError {
    /// Get error code for logs
    pub fn code(&self) -> &'static str {
        match self {
            AppError::InvalidPayload => "INVALID_PAYLOAD",
            AppError::DuplicateEmail => "DUPLICATE_EMAIL",
            AppError::UserNotFound => "USER_NOT_FOUND",
            #[cfg(feature = "database")]
            AppError::Database(_) => "DATABASE_ERROR",
            AppError::Internal(_) => "INTERNAL_ERROR",
        }
    }

    /// Get HTTP status code
    pub fn status(&self) -> StatusCode {
        match self {
            AppError::InvalidPayload | AppError::DuplicateEmail => StatusCode::BAD_REQUEST,
            AppError::UserNotFound => StatusCode::NOT_FOUND,
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Get user-facing message (hides internal details)
    pub fn user_message(&self) -> String {
        match self {
            AppError::InvalidPayload => MSG_INVALID_PAYLOAD.to_string(),
            AppError::DuplicateEmail => MSG_DUPLICATE_EMAIL.to_string(),
            AppError::UserNotFound => MSG_USER_NOT_FOUND.to_string(),

            #[cfg(feature = "database")]
            AppError::Database(e) => {
                tracing::error!("Database error: {:?}", e);
                "A database error occurred".to_string()
            }
            AppError::Internal(msg) => {
                tracing::error!("Internal error: {}", msg);
                "An internal error occurred".to_string()
            }
        }
    }

    /// Whether the error is caused by client input
    pub fn is_client_error(&self) -> bool {
        self.status().is_client_error()
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status();
        let body = ErrorResponse {
            status: STATUS_FAIL,
            message: self.user_message(),
        };

        (status, Json(body)).into_response()
    }
}

impl From<DomainError> for AppError {
    fn from(err: DomainError) -> Self {
        match err {
            DomainError::InvalidPayload(_) => AppError::InvalidPayload,
        }
    }
}

/// Result type alias
pub type AppResult<T> = Result<T, AppError>;

/// Extension trait for Option -> AppError conversion
pub trait OptionExt<T> {
    fn ok_or_not_found(self) -> AppResult<T>;
}

impl<T> OptionExt<T> for Option<T> {
    fn ok_or_not_found(self) -> AppResult<T> {
        self.ok_or(AppError::UserNotFound)
    }
}

/// Convenience constructors
impl AppError {
    pub fn internal(msg: impl Into<String>) -> Self {
        AppError::Internal(msg.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn client_errors_map_to_fixed_statuses() {
        assert_eq!(AppError::InvalidPayload.status(), StatusCode::BAD_REQUEST);
        assert_eq!(AppError::DuplicateEmail.status(), StatusCode::BAD_REQUEST);
        assert_eq!(AppError::UserNotFound.status(), StatusCode::NOT_FOUND);
        assert!(AppError::UserNotFound.is_client_error());
    }

    #[test]
    fn internal_errors_hide_details() {
        let err = AppError::internal("connection reset by peer");

        assert_eq!(err.status(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(err.user_message(), "An internal error occurred");
        assert!(!err.is_client_error());
    }

    #[test]
    fn domain_errors_convert() {
        let err = AppError::from(DomainError::invalid_payload("missing email"));
        assert!(matches!(err, AppError::InvalidPayload));
        assert_eq!(err.user_message(), "Invalid payload.");
    }

    #[test]
    fn error_body_uses_fail_status() {
        let body = ErrorResponse {
            status: STATUS_FAIL,
            message: AppError::UserNotFound.user_message(),
        };

        assert_eq!(
            serde_json::to_value(body).unwrap(),
            serde_json::json!({"status": "fail", "message": "user not exists"})
        );
    }

    #[test]
    fn missing_option_is_not_found() {
        let found: Option<i32> = None;
        assert!(matches!(found.ok_or_not_found(), Err(AppError::UserNotFound)));
    }
}
