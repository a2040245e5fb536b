//! `TenantAccountApi` trait definition.
//!
//! Every method takes the tenant id explicitly; callers obtain it from the
//! `CallerContext` of the current request.

use async_trait::async_trait;
use uuid::Uuid;

use crate::errors::TenantAccountError;
use crate::models::{
    ApiKey, Integration, IntegrationUpsert, NewApiKey, NewWebhook, Tenant, TenantSettingsUpdate,
    Webhook,
};

/// Public API trait for the `tenant_account` module.
#[async_trait]
pub trait TenantAccountApi: Send + Sync {
    /// Get the tenant with API key secrets redacted.
    async fn get_current(&self, tenant_id: Uuid) -> Result<Tenant, TenantAccountError>;

    /// Overwrite the provided name/settings/branding leaves and return the tenant.
    async fn update_settings(
        &self,
        tenant_id: Uuid,
        update: TenantSettingsUpdate,
    ) -> Result<Tenant, TenantAccountError>;

    /// Insert or update an integration by provider and return all integrations.
    async fn upsert_integration(
        &self,
        tenant_id: Uuid,
        upsert: IntegrationUpsert,
    ) -> Result<Vec<Integration>, TenantAccountError>;

    /// Subscribe a new webhook and return all webhooks, secrets included.
    async fn add_webhook(
        &self,
        tenant_id: Uuid,
        webhook: NewWebhook,
    ) -> Result<Vec<Webhook>, TenantAccountError>;

    /// Remove the webhook whose id renders as `webhook_id`; unknown ids are a no-op.
    async fn remove_webhook(
        &self,
        tenant_id: Uuid,
        webhook_id: &str,
    ) -> Result<Vec<Webhook>, TenantAccountError>;

    /// Mint a new API key and return all keys, secrets included.
    async fn generate_api_key(
        &self,
        tenant_id: Uuid,
        new_key: NewApiKey,
    ) -> Result<Vec<ApiKey>, TenantAccountError>;
}
