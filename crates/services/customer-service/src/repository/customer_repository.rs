//! Customer repository implementation.
//!
//! Each method opens a connection, runs exactly one statement and releases
//! the connection before inspecting the result.

use async_trait::async_trait;
use sea_orm::{ColumnTrait, DbErr, EntityTrait, NotSet, QueryFilter, QueryOrder, Set};

use super::entities::customer::{ActiveModel, Column, Entity as CustomerEntity};
use crate::infra::Database;
use common::{AppError, AppResult};
use domain::{Customer, CustomerId};

#[cfg(any(test, feature = "test-utils"))]
use mockall::automock;

/// Customer repository trait for dependency injection.
///
/// Lookups return `Ok(None)` when nothing matches; writes that touch no row
/// fail with [`AppError::Storage`].
#[cfg_attr(any(test, feature = "test-utils"), automock)]
#[async_trait]
pub trait CustomerRepository: Send + Sync {
    /// Insert a new customer and return it with its assigned ID
    async fn save(&self, customer: Customer) -> AppResult<Customer>;

    /// Overwrite name, document, email and phone of an existing customer
    async fn update(&self, customer: Customer) -> AppResult<Customer>;

    /// Find customer by ID
    async fn find_by_id(&self, id: CustomerId) -> AppResult<Option<Customer>>;

    /// List all customers, newest first
    async fn find_all(&self) -> AppResult<Vec<Customer>>;

    /// Find customer by document id
    async fn find_by_document(&self, document: &str) -> AppResult<Option<Customer>>;

    /// Permanently delete customer by ID
    async fn delete_by_id(&self, id: CustomerId) -> AppResult<()>;
}

/// SQL-backed implementation of CustomerRepository
pub struct CustomerStore {
    database: Database,
}

impl CustomerStore {
    /// Create new repository instance
    pub fn new(database: Database) -> Self {
        Self { database }
    }
}

#[async_trait]
impl CustomerRepository for CustomerStore {
    async fn save(&self, customer: Customer) -> AppResult<Customer> {
        customer.ensure_unsaved()?;

        let active_model = ActiveModel {
            id: NotSet,
            name: Set(customer.name.clone()),
            document: Set(customer.document.clone()),
            email: Set(customer.email.clone()),
            phone: Set(customer.phone.clone()),
            created_at: Set(chrono::Utc::now()),
        };

        let conn = self.database.open().await?;
        let result = CustomerEntity::insert(active_model).exec(&conn).await;
        self.database.release(conn).await;

        let inserted = result.map_err(|err| match err {
            DbErr::RecordNotInserted => AppError::storage("Insert failed, no rows affected"),
            other => AppError::database("Failed to insert customer")(other),
        })?;

        tracing::info!(customer_id = inserted.last_insert_id, "Customer created");
        Ok(customer.with_id(inserted.last_insert_id))
    }

    async fn update(&self, customer: Customer) -> AppResult<Customer> {
        let id = customer.require_id()?;

        let changes = ActiveModel {
            name: Set(customer.name.clone()),
            document: Set(customer.document.clone()),
            email: Set(customer.email.clone()),
            phone: Set(customer.phone.clone()),
            ..Default::default()
        };

        let conn = self.database.open().await?;
        let result = CustomerEntity::update_many()
            .set(changes)
            .filter(Column::Id.eq(id))
            .exec(&conn)
            .await;
        self.database.release(conn).await;

        let result = result.map_err(AppError::database("Failed to update customer"))?;
        if result.rows_affected == 0 {
            return Err(AppError::storage(format!(
                "Update affected no rows (customer id={id} does not exist?)"
            )));
        }

        tracing::info!(customer_id = id, "Customer updated");
        Ok(customer)
    }

    async fn find_by_id(&self, id: CustomerId) -> AppResult<Option<Customer>> {
        let conn = self.database.open().await?;
        let result = CustomerEntity::find_by_id(id).one(&conn).await;
        self.database.release(conn).await;

        let model = result.map_err(AppError::database("Failed to find customer by id"))?;
        Ok(model.map(Customer::from))
    }

    async fn find_all(&self) -> AppResult<Vec<Customer>> {
        let conn = self.database.open().await?;
        let result = CustomerEntity::find()
            .order_by_desc(Column::CreatedAt)
            .order_by_desc(Column::Id)
            .all(&conn)
            .await;
        self.database.release(conn).await;

        let models = result.map_err(AppError::database("Failed to list customers"))?;
        Ok(models.into_iter().map(Customer::from).collect())
    }

    async fn find_by_document(&self, document: &str) -> AppResult<Option<Customer>> {
        let conn = self.database.open().await?;
        let result = CustomerEntity::find()
            .filter(Column::Document.eq(document))
            .one(&conn)
            .await;
        self.database.release(conn).await;

        let model = result.map_err(AppError::database("Failed to find customer by document"))?;
        Ok(model.map(Customer::from))
    }

    async fn delete_by_id(&self, id: CustomerId) -> AppResult<()> {
        let conn = self.database.open().await?;
        let result = CustomerEntity::delete_by_id(id).exec(&conn).await;
        self.database.release(conn).await;

        let result = result.map_err(AppError::database("Failed to delete customer"))?;
        if result.rows_affected == 0 {
            return Err(AppError::storage(format!(
                "Delete affected no rows (customer id={id} does not exist?)"
            )));
        }

        tracing::info!(customer_id = id, "Customer deleted");
        Ok(())
    }
}
