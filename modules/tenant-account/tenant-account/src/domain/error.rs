use tenant_account_sdk::TenantAccountError;
use thiserror::Error;
use uuid::Uuid;

/// Domain-specific errors using thiserror
#[derive(Error, Debug)]
pub enum DomainError {
    #[error("Tenant not found: {id}")]
    TenantNotFound { id: Uuid },

    /// A write operation addressed a tenant that does not exist.
    #[error("Cannot update tenant {id}: no such tenant")]
    UpdateTargetMissing { id: Uuid },

    #[error("Tenant {id} was modified concurrently; gave up after {attempts} attempt(s)")]
    ConcurrentModification { id: Uuid, attempts: u32 },

    #[error("Stored tenant document is malformed: {message}")]
    MalformedDocument { message: String },

    #[error("Token generation failed: {message}")]
    TokenGeneration { message: String },

    #[error("Database error: {message}")]
    Database { message: String },
}

impl DomainError {
    pub fn tenant_not_found(id: Uuid) -> Self {
        Self::TenantNotFound { id }
    }

    pub fn update_target_missing(id: Uuid) -> Self {
        Self::UpdateTargetMissing { id }
    }

    pub fn concurrent_modification(id: Uuid, attempts: u32) -> Self {
        Self::ConcurrentModification { id, attempts }
    }

    pub fn malformed_document(message: impl Into<String>) -> Self {
        Self::MalformedDocument {
            message: message.into(),
        }
    }

    pub fn token_generation(message: impl Into<String>) -> Self {
        Self::TokenGeneration {
            message: message.into(),
        }
    }

    pub fn database(message: impl Into<String>) -> Self {
        Self::Database {
            message: message.into(),
        }
    }

    /// True for the only failure callers see as "not found".
    #[must_use]
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::TenantNotFound { .. })
    }
}

impl From<sea_orm::DbErr> for DomainError {
    fn from(e: sea_orm::DbErr) -> Self {
        Self::database(e.to_string())
    }
}

/// Convert domain errors to SDK errors for public API consumption.
///
/// Everything except a missing tenant on read collapses into `OperationFailed`
/// carrying the underlying message.
impl From<DomainError> for TenantAccountError {
    fn from(domain_error: DomainError) -> Self {
        match domain_error {
            DomainError::TenantNotFound { id } => TenantAccountError::not_found(id),
            other => TenantAccountError::operation_failed(other.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn only_tenant_not_found_maps_to_sdk_not_found() {
        let id = Uuid::new_v4();
        assert_eq!(
            TenantAccountError::from(DomainError::tenant_not_found(id)),
            TenantAccountError::not_found(id)
        );

        let err = TenantAccountError::from(DomainError::update_target_missing(id));
        assert!(matches!(err, TenantAccountError::OperationFailed { .. }));
    }

    #[test]
    fn operation_failed_carries_underlying_message() {
        let err = TenantAccountError::from(DomainError::database("disk I/O error"));
        assert_eq!(
            err,
            TenantAccountError::operation_failed("Database error: disk I/O error")
        );
    }
}
