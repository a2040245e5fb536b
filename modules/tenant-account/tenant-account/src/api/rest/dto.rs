use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};
use tenant_account_sdk::{
    ApiKey, Branding, BrandingPatch, Integration, IntegrationUpsert, NewApiKey, NewWebhook,
    SettingsPatch, Tenant, TenantSettings, TenantSettingsUpdate, Webhook,
};
use time::OffsetDateTime;
use utoipa::ToSchema;
use uuid::Uuid;

/// Tenant representation returned by the REST API.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct TenantDto {
    #[schema(value_type = String)]
    pub id: Uuid,
    pub name: String,
    pub settings: TenantSettingsDto,
    pub branding: BrandingDto,
    pub integrations: Vec<IntegrationDto>,
    pub webhooks: Vec<WebhookDto>,
    pub api_keys: Vec<ApiKeyDto>,
    #[serde(with = "time::serde::rfc3339")]
    #[schema(value_type = String, format = DateTime)]
    pub created_at: OffsetDateTime,
    #[serde(with = "time::serde::rfc3339")]
    #[schema(value_type = String, format = DateTime)]
    pub updated_at: OffsetDateTime,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct TenantSettingsDto {
    pub timezone: String,
    pub language: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct BrandingDto {
    pub primary_color: String,
    pub logo_url: String,
    pub login_message: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct IntegrationDto {
    pub provider: String,
    pub api_key: String,
    pub active: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct WebhookDto {
    #[schema(value_type = String)]
    pub id: Uuid,
    pub url: String,
    pub events: BTreeSet<String>,
    pub active: bool,
    pub secret: String,
    #[serde(with = "time::serde::rfc3339")]
    #[schema(value_type = String, format = DateTime)]
    pub created_at: OffsetDateTime,
}

/// API key entry. `key` is omitted when the tenant is read for display.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ApiKeyDto {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub key: Option<String>,
    pub name: String,
    pub scopes: BTreeSet<String>,
    #[serde(with = "time::serde::rfc3339")]
    #[schema(value_type = String, format = DateTime)]
    pub created_at: OffsetDateTime,
}

impl From<Tenant> for TenantDto {
    fn from(t: Tenant) -> Self {
        Self {
            id: t.id,
            name: t.name,
            settings: t.settings.into(),
            branding: t.branding.into(),
            integrations: t.integrations.into_iter().map(Into::into).collect(),
            webhooks: t.webhooks.into_iter().map(Into::into).collect(),
            api_keys: t.api_keys.into_iter().map(Into::into).collect(),
            created_at: t.created_at,
            updated_at: t.updated_at,
        }
    }
}

impl From<TenantSettings> for TenantSettingsDto {
    fn from(s: TenantSettings) -> Self {
        Self {
            timezone: s.timezone,
            language: s.language,
        }
    }
}

impl From<Branding> for BrandingDto {
    fn from(b: Branding) -> Self {
        Self {
            primary_color: b.primary_color,
            logo_url: b.logo_url,
            login_message: b.login_message,
        }
    }
}

impl From<Integration> for IntegrationDto {
    fn from(i: Integration) -> Self {
        Self {
            provider: i.provider,
            api_key: i.api_key,
            active: i.active,
        }
    }
}

impl From<Webhook> for WebhookDto {
    fn from(w: Webhook) -> Self {
        Self {
            id: w.id,
            url: w.url,
            events: w.events,
            active: w.active,
            secret: w.secret,
            created_at: w.created_at,
        }
    }
}

impl From<ApiKey> for ApiKeyDto {
    fn from(k: ApiKey) -> Self {
        Self {
            key: k.key,
            name: k.name,
            scopes: k.scopes,
            created_at: k.created_at,
        }
    }
}

/// Body of `PUT /tenant/settings`. Every leaf is optional; absent leaves keep their value.
#[derive(Debug, Default, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UpdateSettingsRequest {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub settings: Option<SettingsPatchDto>,
    #[serde(default)]
    pub branding: Option<BrandingPatchDto>,
}

#[derive(Debug, Default, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct SettingsPatchDto {
    #[serde(default)]
    pub timezone: Option<String>,
    #[serde(default)]
    pub language: Option<String>,
}

#[derive(Debug, Default, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct BrandingPatchDto {
    #[serde(default)]
    pub primary_color: Option<String>,
    #[serde(default)]
    pub logo_url: Option<String>,
    #[serde(default)]
    pub login_message: Option<String>,
}

impl From<UpdateSettingsRequest> for TenantSettingsUpdate {
    fn from(req: UpdateSettingsRequest) -> Self {
        Self {
            name: req.name,
            settings: req.settings.map(|s| SettingsPatch {
                timezone: s.timezone,
                language: s.language,
            }),
            branding: req.branding.map(|b| BrandingPatch {
                primary_color: b.primary_color,
                logo_url: b.logo_url,
                login_message: b.login_message,
            }),
        }
    }
}

#[derive(Debug, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UpsertIntegrationRequest {
    pub provider: String,
    pub api_key: String,
    pub active: bool,
}

impl From<UpsertIntegrationRequest> for IntegrationUpsert {
    fn from(req: UpsertIntegrationRequest) -> Self {
        Self {
            provider: req.provider,
            api_key: req.api_key,
            active: req.active,
        }
    }
}

#[derive(Debug, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct AddWebhookRequest {
    pub url: String,
    #[serde(default)]
    pub events: BTreeSet<String>,
}

impl From<AddWebhookRequest> for NewWebhook {
    fn from(req: AddWebhookRequest) -> Self {
        Self {
            url: req.url,
            events: req.events,
        }
    }
}

#[derive(Debug, Default, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct GenerateApiKeyRequest {
    #[serde(default)]
    pub name: Option<String>,
}

impl From<GenerateApiKeyRequest> for NewApiKey {
    fn from(req: GenerateApiKeyRequest) -> Self {
        Self { name: req.name }
    }
}
