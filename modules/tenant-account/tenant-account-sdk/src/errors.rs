//! Public error types for the `tenant_account` module.
//!
//! These errors are safe to expose to other modules and consumers.

use thiserror::Error;
use uuid::Uuid;

/// Errors that can be returned by the `TenantAccountApi`.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TenantAccountError {
    /// Tenant with the specified ID was not found.
    #[error("Tenant not found: {tenant_id}")]
    NotFound { tenant_id: Uuid },

    /// Any other failure: storage errors, malformed stored data, lost update races.
    #[error("{message}")]
    OperationFailed { message: String },
}

impl TenantAccountError {
    /// Create a `NotFound` error.
    #[must_use]
    pub fn not_found(tenant_id: Uuid) -> Self {
        Self::NotFound { tenant_id }
    }

    /// Create an `OperationFailed` error.
    pub fn operation_failed(message: impl Into<String>) -> Self {
        Self::OperationFailed {
            message: message.into(),
        }
    }
}
