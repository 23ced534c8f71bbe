//! Customer domain entity and related helpers.

use serde::{Deserialize, Serialize};

use crate::constants::{MSG_ID_ASSIGNED_BY_STORAGE, MSG_ID_REQUIRED_FOR_UPDATE, SUMMARY_SEPARATOR};
use crate::error::{DomainError, DomainResult};

/// Storage-assigned customer identifier
pub type CustomerId = i32;

/// Customer domain entity.
///
/// `id` is `None` until the record has been saved; storage assigns it and it
/// never changes afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Customer {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<CustomerId>,
    pub name: String,
    /// National/tax document number, unique across customers when present
    pub document: Option<String>,
    pub email: String,
    pub phone: String,
}

impl Customer {
    /// Create an unsaved customer.
    ///
    /// Text fields are trimmed; a blank document is stored as `None`.
    pub fn new(
        name: impl Into<String>,
        document: Option<String>,
        email: impl Into<String>,
        phone: impl Into<String>,
    ) -> Self {
        Self {
            id: None,
            name: trimmed(name.into()),
            document: normalize_document(document),
            email: trimmed(email.into()),
            phone: trimmed(phone.into()),
        }
    }

    /// Return the same record carrying the given identifier
    pub fn with_id(mut self, id: CustomerId) -> Self {
        self.id = Some(id);
        self
    }

    /// Identifier required by update paths
    pub fn require_id(&self) -> DomainResult<CustomerId> {
        self.id
            .ok_or_else(|| DomainError::validation(MSG_ID_REQUIRED_FOR_UPDATE))
    }

    /// Reject records that already carry an identifier on insert
    pub fn ensure_unsaved(&self) -> DomainResult<()> {
        match self.id {
            Some(_) => Err(DomainError::validation(MSG_ID_ASSIGNED_BY_STORAGE)),
            None => Ok(()),
        }
    }

    /// One-line rendering: `id - name - document - email`.
    ///
    /// Missing id or document render as empty text.
    pub fn summary_line(&self) -> String {
        let id = self.id.map(|id| id.to_string()).unwrap_or_default();
        [
            id.as_str(),
            self.name.as_str(),
            self.document.as_deref().unwrap_or(""),
            self.email.as_str(),
        ]
        .join(SUMMARY_SEPARATOR)
    }
}

fn trimmed(value: String) -> String {
    value.trim().to_string()
}

/// Trim a document id and map blank input to `None`
pub fn normalize_document(document: Option<String>) -> Option<String> {
    document
        .map(|doc| doc.trim().to_string())
        .filter(|doc| !doc.is_empty())
}
