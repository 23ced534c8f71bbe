//! Domain layer - Core business entities and value objects.
//!
//! This crate contains pure domain logic with no infrastructure dependencies.
//! The customer record defined here is shared by the repository, the service
//! layer and the command-line front end.

pub mod constants;
pub mod customer;
pub mod error;

pub use constants::*;
pub use customer::{normalize_document, Customer, CustomerId};
pub use error::{DomainError, DomainResult};
