//! Customer service - Handles customer-related business logic.
//!
//! The only rule enforced here is document uniqueness on creation; every
//! other operation is a straight delegation to the repository.

use async_trait::async_trait;
use std::sync::Arc;

use common::AppResult;
use domain::{Customer, CustomerId, DomainError, FIELD_DOCUMENT};

use crate::repository::CustomerRepository;

/// Customer service trait for dependency injection.
#[async_trait]
pub trait CustomerService: Send + Sync {
    /// Create a customer, rejecting already registered documents
    async fn create_customer(&self, customer: Customer) -> AppResult<Customer>;

    /// Overwrite an existing customer; the record must carry its ID
    async fn update_customer(&self, customer: Customer) -> AppResult<Customer>;

    /// Get customer by ID (`None` when absent)
    async fn get_by_id(&self, id: CustomerId) -> AppResult<Option<Customer>>;

    /// List all customers, newest first
    async fn list_all(&self) -> AppResult<Vec<Customer>>;

    /// Delete customer by ID
    async fn delete_by_id(&self, id: CustomerId) -> AppResult<()>;
}

/// Concrete implementation of CustomerService using repository.
pub struct CustomerManager {
    repo: Arc<dyn CustomerRepository>,
}

impl CustomerManager {
    /// Create new customer service instance with repository
    pub fn new(repo: Arc<dyn CustomerRepository>) -> Self {
        Self { repo }
    }
}

#[async_trait]
impl CustomerService for CustomerManager {
    async fn create_customer(&self, customer: Customer) -> AppResult<Customer> {
        // Check if document already registered
        if let Some(document) = customer.document.as_deref() {
            if self.repo.find_by_document(document).await?.is_some() {
                tracing::warn!("Rejected customer with duplicate document");
                return Err(DomainError::conflict(FIELD_DOCUMENT).into());
            }
        }

        self.repo.save(customer).await
    }

    async fn update_customer(&self, customer: Customer) -> AppResult<Customer> {
        customer.require_id()?;
        self.repo.update(customer).await
    }

    async fn get_by_id(&self, id: CustomerId) -> AppResult<Option<Customer>> {
        self.repo.find_by_id(id).await
    }

    async fn list_all(&self) -> AppResult<Vec<Customer>> {
        self.repo.find_all().await
    }

    async fn delete_by_id(&self, id: CustomerId) -> AppResult<()> {
        self.repo.delete_by_id(id).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use common::{AppError, ErrorKind};
    use mockall::predicate::eq;

    use crate::repository::MockCustomerRepository;

    fn new_customer(document: Option<&str>) -> Customer {
        Customer::new(
            "Ana Torres",
            document.map(str::to_string),
            "ana@example.com",
            "555-0101",
        )
    }

    fn service(repo: MockCustomerRepository) -> CustomerManager {
        CustomerManager::new(Arc::new(repo))
    }

    #[tokio::test]
    async fn test_create_without_document_skips_lookup() {
        let mut repo = MockCustomerRepository::new();
        repo.expect_find_by_document().never();
        repo.expect_save()
            .times(1)
            .returning(|customer| Ok(customer.with_id(1)));

        let created = service(repo)
            .create_customer(new_customer(None))
            .await
            .unwrap();

        assert_eq!(created.id, Some(1));
        assert_eq!(created.document, None);
    }

    #[tokio::test]
    async fn test_create_with_free_document_saves() {
        let mut repo = MockCustomerRepository::new();
        repo.expect_find_by_document()
            .with(eq("12345678"))
            .times(1)
            .returning(|_| Ok(None));
        repo.expect_save()
            .times(1)
            .returning(|customer| Ok(customer.with_id(5)));

        let created = service(repo)
            .create_customer(new_customer(Some("12345678")))
            .await
            .unwrap();

        assert_eq!(created.id, Some(5));
    }

    #[tokio::test]
    async fn test_create_duplicate_document_never_saves() {
        let mut repo = MockCustomerRepository::new();
        repo.expect_find_by_document()
            .with(eq("12345678"))
            .returning(|doc| {
                Ok(Some(
                    Customer::new("Existing", Some(doc.to_string()), "", "").with_id(9),
                ))
            });
        repo.expect_save().never();

        let err = service(repo)
            .create_customer(new_customer(Some("12345678")))
            .await
            .unwrap_err();

        assert!(matches!(err, AppError::Conflict(ref field) if field == "Document"));
        assert_eq!(err.kind(), ErrorKind::Validation);
    }

    #[tokio::test]
    async fn test_update_without_id_never_touches_storage() {
        let mut repo = MockCustomerRepository::new();
        repo.expect_update().never();

        let err = service(repo)
            .update_customer(new_customer(None))
            .await
            .unwrap_err();

        assert!(matches!(err, AppError::Validation(_)));
    }

    #[tokio::test]
    async fn test_update_propagates_missing_row() {
        let mut repo = MockCustomerRepository::new();
        repo.expect_update()
            .times(1)
            .returning(|_| Err(AppError::storage("Update affected no rows")));

        let err = service(repo)
            .update_customer(new_customer(None).with_id(404))
            .await
            .unwrap_err();

        assert_eq!(err.kind(), ErrorKind::Storage);
    }

    #[tokio::test]
    async fn test_get_by_id_absent_is_not_an_error() {
        let mut repo = MockCustomerRepository::new();
        repo.expect_find_by_id()
            .with(eq(3))
            .returning(|_| Ok(None));

        let result = service(repo).get_by_id(3).await.unwrap();

        assert!(result.is_none());
    }

    #[tokio::test]
    async fn test_list_all_keeps_repository_order() {
        let mut repo = MockCustomerRepository::new();
        repo.expect_find_all().returning(|| {
            Ok(vec![
                new_customer(None).with_id(3),
                new_customer(None).with_id(2),
                new_customer(None).with_id(1),
            ])
        });

        let ids: Vec<_> = service(repo)
            .list_all()
            .await
            .unwrap()
            .into_iter()
            .map(|c| c.id)
            .collect();

        assert_eq!(ids, vec![Some(3), Some(2), Some(1)]);
    }

    #[tokio::test]
    async fn test_delete_delegates_to_repository() {
        let mut repo = MockCustomerRepository::new();
        repo.expect_delete_by_id()
            .with(eq(7))
            .times(1)
            .returning(|_| Ok(()));

        assert!(service(repo).delete_by_id(7).await.is_ok());
    }
}
