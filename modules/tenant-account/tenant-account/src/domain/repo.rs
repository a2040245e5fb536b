use async_trait::async_trait;
use tenant_account_sdk::Tenant;
use uuid::Uuid;

use super::error::DomainError;

/// Tenant document together with the revision it was read at.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VersionedTenant {
    pub tenant: Tenant,
    pub version: i64,
}

/// Repository trait for tenant document persistence.
///
/// Documents are always read and written whole; there are no partial column updates.
#[async_trait]
pub trait TenantRepository: Send + Sync {
    /// Load the tenant document and its current revision.
    async fn find(&self, id: Uuid) -> Result<Option<VersionedTenant>, DomainError>;

    /// Replace the stored document if its revision still equals `expected_version`.
    ///
    /// Returns `Ok(false)` when another writer saved first; the stored document is
    /// left untouched in that case.
    async fn save(&self, tenant: &Tenant, expected_version: i64) -> Result<bool, DomainError>;

    /// Insert a new tenant document at its initial revision.
    async fn create(&self, tenant: &Tenant) -> Result<(), DomainError>;
}
