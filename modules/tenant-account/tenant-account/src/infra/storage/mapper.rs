use sea_orm::ActiveValue;
use serde::Serialize;
use serde::de::DeserializeOwned;
use tenant_account_sdk::{ApiKey, Branding, Integration, Tenant, TenantSettings, Webhook};

use crate::domain::error::DomainError;
use crate::domain::repo::VersionedTenant;

use super::document::{ApiKeyDoc, BrandingDoc, IntegrationDoc, SettingsDoc, WebhookDoc};
use super::entity;

/// Convert a stored row into the domain aggregate.
impl TryFrom<entity::Model> for VersionedTenant {
    type Error = DomainError;

    fn try_from(m: entity::Model) -> Result<Self, Self::Error> {
        let settings: SettingsDoc = decode("settings", m.settings)?;
        let branding: BrandingDoc = decode("branding", m.branding)?;
        let integrations: Vec<IntegrationDoc> = decode("integrations", m.integrations)?;
        let webhooks: Vec<WebhookDoc> = decode("webhooks", m.webhooks)?;
        let api_keys: Vec<ApiKeyDoc> = decode("api_keys", m.api_keys)?;

        let tenant = Tenant {
            id: m.id,
            name: m.name,
            settings: TenantSettings {
                timezone: settings.timezone,
                language: settings.language,
            },
            branding: Branding {
                primary_color: branding.primary_color,
                logo_url: branding.logo_url,
                login_message: branding.login_message,
            },
            integrations: integrations
                .into_iter()
                .map(|i| Integration {
                    provider: i.provider,
                    api_key: i.api_key,
                    active: i.active,
                })
                .collect(),
            webhooks: webhooks
                .into_iter()
                .map(|w| Webhook {
                    id: w.id,
                    url: w.url,
                    events: w.events,
                    active: w.active,
                    secret: w.secret,
                    created_at: w.created_at,
                })
                .collect(),
            api_keys: api_keys
                .into_iter()
                .map(|k| ApiKey {
                    key: Some(k.key),
                    name: k.name,
                    scopes: k.scopes,
                    created_at: k.created_at,
                })
                .collect(),
            created_at: m.created_at,
            updated_at: m.updated_at,
        };

        Ok(VersionedTenant {
            tenant,
            version: m.version,
        })
    }
}

/// Build the full-row active model for `tenant` stamped with `version`.
///
/// # Errors
/// Fails if an API key has no value: a redacted projection must never be persisted.
pub fn to_active_model(tenant: &Tenant, version: i64) -> Result<entity::ActiveModel, DomainError> {
    let settings = SettingsDoc {
        timezone: tenant.settings.timezone.clone(),
        language: tenant.settings.language.clone(),
    };
    let branding = BrandingDoc {
        primary_color: tenant.branding.primary_color.clone(),
        logo_url: tenant.branding.logo_url.clone(),
        login_message: tenant.branding.login_message.clone(),
    };
    let integrations: Vec<IntegrationDoc> = tenant
        .integrations
        .iter()
        .map(|i| IntegrationDoc {
            provider: i.provider.clone(),
            api_key: i.api_key.clone(),
            active: i.active,
        })
        .collect();
    let webhooks: Vec<WebhookDoc> = tenant
        .webhooks
        .iter()
        .map(|w| WebhookDoc {
            id: w.id,
            url: w.url.clone(),
            events: w.events.clone(),
            active: w.active,
            secret: w.secret.clone(),
            created_at: w.created_at,
        })
        .collect();
    let api_keys = tenant
        .api_keys
        .iter()
        .map(|k| {
            let key = k.key.clone().ok_or_else(|| {
                DomainError::malformed_document(format!(
                    "API key '{}' has no value; refusing to persist a redacted tenant",
                    k.name
                ))
            })?;
            Ok(ApiKeyDoc {
                key,
                name: k.name.clone(),
                scopes: k.scopes.clone(),
                created_at: k.created_at,
            })
        })
        .collect::<Result<Vec<_>, DomainError>>()?;

    Ok(entity::ActiveModel {
        id: ActiveValue::Set(tenant.id),
        name: ActiveValue::Set(tenant.name.clone()),
        settings: ActiveValue::Set(encode("settings", &settings)?),
        branding: ActiveValue::Set(encode("branding", &branding)?),
        integrations: ActiveValue::Set(encode("integrations", &integrations)?),
        webhooks: ActiveValue::Set(encode("webhooks", &webhooks)?),
        api_keys: ActiveValue::Set(encode("api_keys", &api_keys)?),
        version: ActiveValue::Set(version),
        created_at: ActiveValue::Set(tenant.created_at),
        updated_at: ActiveValue::Set(tenant.updated_at),
    })
}

fn decode<T: DeserializeOwned>(column: &str, value: serde_json::Value) -> Result<T, DomainError> {
    serde_json::from_value(value)
        .map_err(|e| DomainError::malformed_document(format!("column '{column}': {e}")))
}

fn encode<T: Serialize>(column: &str, value: &T) -> Result<serde_json::Value, DomainError> {
    serde_json::to_value(value)
        .map_err(|e| DomainError::malformed_document(format!("column '{column}': {e}")))
}
