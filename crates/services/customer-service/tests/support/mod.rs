//! Shared fixtures: a throwaway SQLite database with the customers table.

#![allow(dead_code)]

use std::sync::Arc;

use sea_orm::{ConnectionTrait, Schema};
use tempfile::TempDir;

use common::DatabaseConfig;
use customer_service_lib::infra::Database;
use customer_service_lib::repository::entities::customer;
use customer_service_lib::repository::CustomerStore;
use domain::Customer;

/// SQLite database living in a temp directory for the duration of a test
pub struct TestDatabase {
    _dir: TempDir,
    pub database: Database,
}

impl TestDatabase {
    /// Create an empty database with the customers table in place
    pub async fn new() -> Self {
        let dir = tempfile::tempdir().expect("temp dir should be created");
        let url = format!(
            "sqlite://{}?mode=rwc",
            dir.path().join("customers.db").display()
        );
        let config = DatabaseConfig::new(Some(url), Some("tester".to_string()), None)
            .expect("test config should be valid");
        let database = Database::new(&config, false).expect("test database should resolve");

        create_schema(&database).await;

        Self {
            _dir: dir,
            database,
        }
    }

    /// Repository over this database
    pub fn store(&self) -> Arc<CustomerStore> {
        Arc::new(CustomerStore::new(self.database.clone()))
    }
}

async fn create_schema(database: &Database) {
    let conn = database.open().await.expect("connection should open");
    let backend = conn.get_database_backend();
    let schema = Schema::new(backend);

    conn.execute(backend.build(&schema.create_table_from_entity(customer::Entity)))
        .await
        .expect("customers table should be created");

    database.release(conn).await;
}

/// Unsaved customer with the given name and document
pub fn customer(name: &str, document: Option<&str>) -> Customer {
    Customer::new(
        name,
        document.map(str::to_string),
        format!("{}@example.com", name.to_lowercase()),
        "555-0100",
    )
}
