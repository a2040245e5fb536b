use std::sync::Arc;

use async_trait::async_trait;
use tenant_account_sdk::{
    ApiKey, Integration, IntegrationUpsert, NewApiKey, NewWebhook, Tenant, TenantAccountApi,
    TenantAccountError, TenantSettingsUpdate, Webhook,
};
use uuid::Uuid;

use crate::domain::service::Service;

/// `TenantAccountApi` implementation that calls the domain service directly.
pub struct TenantAccountLocalClient {
    service: Arc<Service>,
}

impl TenantAccountLocalClient {
    #[must_use]
    pub fn new(service: Arc<Service>) -> Self {
        Self { service }
    }
}

#[async_trait]
impl TenantAccountApi for TenantAccountLocalClient {
    async fn get_current(&self, tenant_id: Uuid) -> Result<Tenant, TenantAccountError> {
        self.service
            .get_current(tenant_id)
            .await
            .map_err(Into::into)
    }

    async fn update_settings(
        &self,
        tenant_id: Uuid,
        update: TenantSettingsUpdate,
    ) -> Result<Tenant, TenantAccountError> {
        self.service
            .update_settings(tenant_id, update)
            .await
            .map_err(Into::into)
    }

    async fn upsert_integration(
        &self,
        tenant_id: Uuid,
        upsert: IntegrationUpsert,
    ) -> Result<Vec<Integration>, TenantAccountError> {
        self.service
            .upsert_integration(tenant_id, upsert)
            .await
            .map_err(Into::into)
    }

    async fn add_webhook(
        &self,
        tenant_id: Uuid,
        webhook: NewWebhook,
    ) -> Result<Vec<Webhook>, TenantAccountError> {
        self.service
            .add_webhook(tenant_id, webhook)
            .await
            .map_err(Into::into)
    }

    async fn remove_webhook(
        &self,
        tenant_id: Uuid,
        webhook_id: &str,
    ) -> Result<Vec<Webhook>, TenantAccountError> {
        self.service
            .remove_webhook(tenant_id, webhook_id)
            .await
            .map_err(Into::into)
    }

    async fn generate_api_key(
        &self,
        tenant_id: Uuid,
        new_key: NewApiKey,
    ) -> Result<Vec<ApiKey>, TenantAccountError> {
        self.service
            .generate_api_key(tenant_id, new_key)
            .await
            .map_err(Into::into)
    }
}
