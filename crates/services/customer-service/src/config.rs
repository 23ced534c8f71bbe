//! Customer service configuration.

use std::env;

use common::{AppResult, DatabaseConfig};

/// Customer service configuration.
#[derive(Debug, Clone)]
pub struct CustomerServiceConfig {
    /// Database address and principal
    pub database: DatabaseConfig,
    /// Log every SQL statement issued by the driver
    pub log_statements: bool,
}

impl CustomerServiceConfig {
    /// Load configuration from environment variables.
    ///
    /// Fails when the database address or principal is missing.
    pub fn from_env() -> AppResult<Self> {
        Ok(Self {
            database: DatabaseConfig::from_env()?,
            log_statements: env::var("CUSTOMER_DB_LOG_SQL")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(false),
        })
    }
}
