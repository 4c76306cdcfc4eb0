//! Domain-level errors.
//!
//! These errors represent business rule violations. They are independent of
//! infrastructure concerns (HTTP, database).

use thiserror::Error;

/// Domain-specific errors for business rule violations.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// Create payload is empty or lacks a required field
    #[error("Invalid payload: {0}")]
    InvalidPayload(String),
}

impl DomainError {
    /// Create an invalid payload error
    pub fn invalid_payload(reason: impl Into<String>) -> Self {
        DomainError::InvalidPayload(reason.into())
    }
}

/// Result type alias for domain operations
pub type DomainResult<T> = Result<T, DomainError>;
