//! Common utilities shared across the workspace.
//!
//! This crate provides:
//! - Unified error handling with validation/storage classification
//! - Database configuration with fail-fast validation

pub mod config;
pub mod error;

pub use config::DatabaseConfig;
pub use error::{AppError, AppResult, ErrorKind};
