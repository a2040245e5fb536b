use uuid::Uuid;

/// Identity of the caller as established by the upstream authentication layer.
///
/// The tenant id is trusted as-is; this crate performs no authentication.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CallerContext {
    tenant_id: Uuid,
}

impl CallerContext {
    #[must_use]
    pub fn new(tenant_id: Uuid) -> Self {
        Self { tenant_id }
    }

    /// Get the tenant ID the request acts on.
    #[must_use]
    pub fn tenant_id(&self) -> Uuid {
        self.tenant_id
    }
}
