//! Domain-level constants.
//!
//! These constants define business rules and user-facing field names.

// =============================================================================
// Customer fields
// =============================================================================

/// Field name reported when a document id is already registered
pub const FIELD_DOCUMENT: &str = "Document";

/// Separator used when rendering a customer on a single line
pub const SUMMARY_SEPARATOR: &str = " - ";

// =============================================================================
// Messages
// =============================================================================

/// Reported when an update is attempted on a record without identifier
pub const MSG_ID_REQUIRED_FOR_UPDATE: &str = "Customer ID is required for update";

/// Reported when a record that already has an identifier is saved as new
pub const MSG_ID_ASSIGNED_BY_STORAGE: &str =
    "New customers must not carry an ID; it is assigned by storage";
