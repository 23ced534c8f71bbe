//! Database connection factory.
//!
//! Every repository call opens its own connection through [`Database::open`]
//! and hands it back to [`Database::release`] once its single statement has
//! run. Nothing is pooled or shared between calls.

use sea_orm::{ConnectOptions, ConnectionTrait, Database as SeaDatabase, DatabaseConnection, Statement};

use common::{AppError, AppResult, DatabaseConfig};

/// Per-call connection factory
#[derive(Clone)]
pub struct Database {
    options: ConnectOptions,
}

impl Database {
    /// Resolve connection settings.
    ///
    /// Fails fast when the configured URL cannot be parsed. No connection is
    /// opened here.
    pub fn new(config: &DatabaseConfig, log_statements: bool) -> AppResult<Self> {
        let mut options = ConnectOptions::new(config.connection_url()?);
        options
            .max_connections(1)
            .min_connections(0)
            .sqlx_logging(log_statements);

        Ok(Self { options })
    }

    /// Open a dedicated connection for one operation.
    pub async fn open(&self) -> AppResult<DatabaseConnection> {
        let connection = SeaDatabase::connect(self.options.clone())
            .await
            .map_err(AppError::database("Failed to open database connection"))?;
        tracing::debug!("Database connection opened");
        Ok(connection)
    }

    /// Close a connection obtained from [`Database::open`].
    ///
    /// A failed close is logged and otherwise ignored so it never hides the
    /// outcome of the operation that used the connection.
    pub async fn release(&self, connection: DatabaseConnection) {
        match connection.close().await {
            Ok(()) => tracing::debug!("Database connection released"),
            Err(e) => tracing::warn!(error = %e, "Failed to close database connection"),
        }
    }

    /// Check database connectivity by executing a simple query.
    pub async fn ping(&self) -> AppResult<()> {
        let connection = self.open().await?;
        let result = connection
            .execute(Statement::from_string(
                connection.get_database_backend(),
                "SELECT 1".to_string(),
            ))
            .await;
        self.release(connection).await;

        result.map_err(AppError::database("Database ping failed"))?;
        Ok(())
    }
}
