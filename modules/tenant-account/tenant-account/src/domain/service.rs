use std::collections::BTreeSet;
use std::sync::Arc;
use std::time::Duration;

use rand::Rng as _;
use tenant_account_sdk::{
    ApiKey, Branding, FULL_ACCESS_SCOPE, Integration, IntegrationUpsert, NewApiKey, NewWebhook,
    Tenant, TenantSettings, TenantSettingsUpdate, Webhook,
};
use time::OffsetDateTime;
use tracing::{debug, info, warn};
use uuid::Uuid;

use super::aggregate::{self, UpsertOutcome};
use super::error::DomainError;
use super::repo::{TenantRepository, VersionedTenant};
use super::tokens;

const DEFAULT_TIMEZONE: &str = "UTC";
const DEFAULT_LANGUAGE: &str = "en";

/// Upper bound for a single pause between write attempts.
const MAX_RETRY_BACKOFF: Duration = Duration::from_millis(250);

pub struct ServiceConfig {
    /// Name given to API keys created without one.
    pub default_api_key_name: String,
    /// How many load-mutate-save rounds a write gets before a lost race is reported.
    pub max_write_attempts: u32,
    /// Base pause after a lost race; doubles per attempt, with full jitter.
    pub retry_backoff: Duration,
}

impl Default for ServiceConfig {
    fn default() -> Self {
        Self {
            default_api_key_name: "Default Key".to_owned(),
            max_write_attempts: 10,
            retry_backoff: Duration::from_millis(10),
        }
    }
}

/// Tenant account domain service.
///
/// Each write reads the full tenant document, mutates it in memory and saves it
/// back guarded by the revision it was read at. A save that loses the race is
/// retried from a fresh read.
pub struct Service {
    repo: Arc<dyn TenantRepository>,
    config: ServiceConfig,
}

impl Service {
    pub fn new(repo: Arc<dyn TenantRepository>, config: ServiceConfig) -> Self {
        Self { repo, config }
    }

    #[tracing::instrument(skip(self))]
    pub async fn get_current(&self, tenant_id: Uuid) -> Result<Tenant, DomainError> {
        let Some(VersionedTenant { tenant, .. }) = self.repo.find(tenant_id).await? else {
            debug!("Tenant not found");
            return Err(DomainError::tenant_not_found(tenant_id));
        };
        Ok(tenant.without_secrets())
    }

    #[tracing::instrument(skip(self, update))]
    pub async fn update_settings(
        &self,
        tenant_id: Uuid,
        update: TenantSettingsUpdate,
    ) -> Result<Tenant, DomainError> {
        let tenant = self
            .modify(tenant_id, |tenant| {
                aggregate::apply_settings_update(tenant, &update);
                Ok(())
            })
            .await?;

        info!("Updated tenant settings");
        Ok(tenant.without_secrets())
    }

    #[tracing::instrument(skip(self, upsert), fields(provider = %upsert.provider))]
    pub async fn upsert_integration(
        &self,
        tenant_id: Uuid,
        upsert: IntegrationUpsert,
    ) -> Result<Vec<Integration>, DomainError> {
        let mut outcome = UpsertOutcome::Inserted;
        let tenant = self
            .modify(tenant_id, |tenant| {
                outcome = aggregate::upsert_integration(&mut tenant.integrations, &upsert);
                Ok(())
            })
            .await?;

        info!(?outcome, "Upserted integration");
        Ok(tenant.integrations)
    }

    #[tracing::instrument(skip(self, webhook), fields(url = %webhook.url))]
    pub async fn add_webhook(
        &self,
        tenant_id: Uuid,
        webhook: NewWebhook,
    ) -> Result<Vec<Webhook>, DomainError> {
        let mut webhook_id = Uuid::nil();
        let tenant = self
            .modify(tenant_id, |tenant| {
                let created = Webhook {
                    id: Uuid::new_v4(),
                    url: webhook.url.clone(),
                    events: webhook.events.clone(),
                    active: true,
                    secret: tokens::generate_webhook_secret()?,
                    created_at: OffsetDateTime::now_utc(),
                };
                webhook_id = created.id;
                tenant.webhooks.push(created);
                Ok(())
            })
            .await?;

        info!(%webhook_id, "Added webhook");
        Ok(tenant.webhooks)
    }

    #[tracing::instrument(skip(self))]
    pub async fn remove_webhook(
        &self,
        tenant_id: Uuid,
        webhook_id: &str,
    ) -> Result<Vec<Webhook>, DomainError> {
        let mut removed = 0;
        let tenant = self
            .modify(tenant_id, |tenant| {
                removed = aggregate::remove_webhook(&mut tenant.webhooks, webhook_id);
                Ok(())
            })
            .await?;

        if removed == 0 {
            debug!("No webhook matched; nothing removed");
        } else {
            info!(removed, "Removed webhook");
        }
        Ok(tenant.webhooks)
    }

    #[tracing::instrument(skip(self, new_key))]
    pub async fn generate_api_key(
        &self,
        tenant_id: Uuid,
        new_key: NewApiKey,
    ) -> Result<Vec<ApiKey>, DomainError> {
        let name = new_key
            .name
            .unwrap_or_else(|| self.config.default_api_key_name.clone());

        let tenant = self
            .modify(tenant_id, |tenant| {
                tenant.api_keys.push(ApiKey {
                    key: Some(tokens::generate_api_key()?),
                    name: name.clone(),
                    scopes: BTreeSet::from([FULL_ACCESS_SCOPE.to_owned()]),
                    created_at: OffsetDateTime::now_utc(),
                });
                Ok(())
            })
            .await?;

        info!(key_name = %name, "Generated API key");
        Ok(tenant.api_keys)
    }

    /// Create an empty tenant document unless one with `tenant_id` already exists.
    ///
    /// Returns `true` when a new document was written.
    #[tracing::instrument(skip(self))]
    pub async fn provision(&self, tenant_id: Uuid, name: &str) -> Result<bool, DomainError> {
        if self.repo.find(tenant_id).await?.is_some() {
            debug!("Tenant already provisioned");
            return Ok(false);
        }

        let now = OffsetDateTime::now_utc();
        let tenant = Tenant {
            id: tenant_id,
            name: name.to_owned(),
            settings: TenantSettings {
                timezone: DEFAULT_TIMEZONE.to_owned(),
                language: DEFAULT_LANGUAGE.to_owned(),
            },
            branding: Branding::default(),
            integrations: Vec::new(),
            webhooks: Vec::new(),
            api_keys: Vec::new(),
            created_at: now,
            updated_at: now,
        };
        self.repo.create(&tenant).await?;

        info!("Provisioned tenant");
        Ok(true)
    }

    /// Run one load-mutate-save cycle per attempt until a save lands.
    ///
    /// `mutate` sees a freshly loaded document on every attempt, so it must not
    /// assume state from a previous call.
    async fn modify<F>(&self, tenant_id: Uuid, mut mutate: F) -> Result<Tenant, DomainError>
    where
        F: FnMut(&mut Tenant) -> Result<(), DomainError> + Send,
    {
        let attempts = self.config.max_write_attempts.max(1);

        for attempt in 1..=attempts {
            let Some(VersionedTenant {
                mut tenant,
                version,
            }) = self.repo.find(tenant_id).await?
            else {
                warn!("Write addressed a missing tenant");
                return Err(DomainError::update_target_missing(tenant_id));
            };

            mutate(&mut tenant)?;
            tenant.updated_at = OffsetDateTime::now_utc();

            if self.repo.save(&tenant, version).await? {
                return Ok(tenant);
            }

            if attempt < attempts {
                let pause = backoff_delay(self.config.retry_backoff, attempt);
                warn!(
                    attempt,
                    version,
                    pause_ms = pause.as_millis(),
                    "Tenant changed since it was read; retrying"
                );
                tokio::time::sleep(pause).await;
            }
        }

        Err(DomainError::concurrent_modification(tenant_id, attempts))
    }
}

/// Randomized pause before retry number `attempt + 1`.
///
/// The ceiling is `base * 2^(attempt - 1)`, capped at [`MAX_RETRY_BACKOFF`]; the
/// actual pause is drawn uniformly below it so that colliding writers spread out.
pub(crate) fn backoff_delay(base: Duration, attempt: u32) -> Duration {
    let exponent = attempt.saturating_sub(1).min(16);
    let ceiling = base
        .saturating_mul(1_u32 << exponent)
        .min(MAX_RETRY_BACKOFF);
    let ceiling_ms = u64::try_from(ceiling.as_millis()).unwrap_or(u64::MAX);
    Duration::from_millis(rand::rng().random_range(0..=ceiling_ms))
}
