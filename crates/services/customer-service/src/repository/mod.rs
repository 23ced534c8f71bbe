//! Repository layer for data access.

pub mod entities;
mod customer_repository;

pub use customer_repository::{CustomerRepository, CustomerStore};

#[cfg(any(test, feature = "test-utils"))]
pub use customer_repository::MockCustomerRepository;
