//! Unified error handling.
//!
//! Every failure surfaced by the repository or the service layer is an
//! [`AppError`]. Callers that only need to know whether to ask the user for
//! different input or to give up on the call use [`AppError::kind`].

use domain::DomainError;
use thiserror::Error;

/// Application error types.
#[derive(Error, Debug)]
pub enum AppError {
    // Validation
    #[error("{0}")]
    Validation(String),

    #[error("{0} already exists")]
    Conflict(String),

    // Storage
    #[cfg(feature = "database")]
    #[error("{context}: {source}")]
    Database {
        context: &'static str,
        #[source]
        source: sea_orm::DbErr,
    },

    #[error("{0}")]
    Storage(String),

    // Construction
    #[error("Configuration error: {0}")]
    Config(String),

    // Internal
    #[error("Internal error: {0}")]
    Internal(String),
}

/// Broad classification of an [`AppError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// Bad input; the caller can correct it and retry
    Validation,
    /// Database or driver failure; the call cannot complete
    Storage,
    /// Missing or malformed settings detected at construction time
    Configuration,
    /// Bug or unexpected failure outside storage
    Internal,
}

impl AppError {
    /// Classify the error
    pub fn kind(&self) -> ErrorKind {
        match self {
            AppError::Validation(_) | AppError::Conflict(_) => ErrorKind::Validation,
            #[cfg(feature = "database")]
            AppError::Database { .. } => ErrorKind::Storage,
            AppError::Storage(_) => ErrorKind::Storage,
            AppError::Config(_) => ErrorKind::Configuration,
            AppError::Internal(_) => ErrorKind::Internal,
        }
    }

    /// Whether correcting the input could make the same call succeed
    pub fn is_recoverable(&self) -> bool {
        self.kind() == ErrorKind::Validation
    }

    /// Get a stable error code for logs and scripts
    pub fn code(&self) -> &'static str {
        match self {
            AppError::Validation(_) => "VALIDATION_ERROR",
            AppError::Conflict(_) => "CONFLICT",
            #[cfg(feature = "database")]
            AppError::Database { .. } => "DATABASE_ERROR",
            AppError::Storage(_) => "STORAGE_ERROR",
            AppError::Config(_) => "CONFIG_ERROR",
            AppError::Internal(_) => "INTERNAL_ERROR",
        }
    }
}

// =============================================================================
// Domain Error Conversion
// =============================================================================

impl From<DomainError> for AppError {
    fn from(err: DomainError) -> Self {
        match err {
            DomainError::Validation(msg) => AppError::Validation(msg),
            DomainError::Conflict(field) => AppError::Conflict(field),
        }
    }
}

// =============================================================================
// Database Error Conversion
// =============================================================================

#[cfg(feature = "database")]
impl From<sea_orm::DbErr> for AppError {
    fn from(source: sea_orm::DbErr) -> Self {
        AppError::Database {
            context: "Database operation failed",
            source,
        }
    }
}

/// Result type alias
pub type AppResult<T> = Result<T, AppError>;

/// Convenience constructors
impl AppError {
    pub fn conflict(field: impl Into<String>) -> Self {
        AppError::Conflict(field.into())
    }

    pub fn validation(msg: impl Into<String>) -> Self {
        AppError::Validation(msg.into())
    }

    pub fn storage(msg: impl Into<String>) -> Self {
        AppError::Storage(msg.into())
    }

    pub fn config(msg: impl Into<String>) -> Self {
        AppError::Config(msg.into())
    }

    pub fn internal(msg: impl Into<String>) -> Self {
        AppError::Internal(msg.into())
    }

    /// Wrap a driver error with the operation that produced it.
    ///
    /// Meant for `map_err`: `.map_err(AppError::database("Failed to list customers"))`.
    #[cfg(feature = "database")]
    pub fn database(context: &'static str) -> impl FnOnce(sea_orm::DbErr) -> AppError {
        move |source| AppError::Database { context, source }
    }
}
