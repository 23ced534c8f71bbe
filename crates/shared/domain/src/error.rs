//! Domain-level errors.
//!
//! These errors represent business rule violations on customer records.
//! They are independent of infrastructure concerns (database, CLI).

use thiserror::Error;

/// Domain-specific errors for business rule violations.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// Validation failed for a field or input
    #[error("Validation error: {0}")]
    Validation(String),

    /// A unique value is already taken by another record
    #[error("{0} already exists")]
    Conflict(String),
}

impl DomainError {
    /// Create a validation error
    pub fn validation(msg: impl Into<String>) -> Self {
        DomainError::Validation(msg.into())
    }

    /// Create a conflict error
    pub fn conflict(field: impl Into<String>) -> Self {
        DomainError::Conflict(field.into())
    }
}

/// Result type alias for domain operations
pub type DomainResult<T> = Result<T, DomainError>;
