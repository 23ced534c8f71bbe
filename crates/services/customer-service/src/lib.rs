//! Customer Service Library
//!
//! This crate provides customer record management: a SQL-backed repository,
//! a service layer enforcing document uniqueness, and the command-line front
//! end that drives them.

pub mod cli;
pub mod commands;
pub mod config;
pub mod infra;
pub mod repository;
pub mod service;

use std::sync::Arc;

use common::AppResult;

use crate::cli::Commands;
use crate::config::CustomerServiceConfig;
use crate::infra::Database;
use crate::repository::CustomerStore;
use crate::service::{CustomerManager, CustomerService};

/// Wire repository and service on top of a connection factory.
pub fn build_service(database: Database) -> Arc<dyn CustomerService> {
    let customer_repo = Arc::new(CustomerStore::new(database));
    Arc::new(CustomerManager::new(customer_repo))
}

/// Run one CLI command with the given configuration and return its output.
pub async fn run(command: Commands, config: CustomerServiceConfig) -> AppResult<String> {
    let database = Database::new(&config.database, config.log_statements)?;
    let service = build_service(database.clone());

    commands::execute(command, service.as_ref(), &database).await
}
