//! Public models for the tenant-account module.
//!
//! These are transport-agnostic data structures that define the contract
//! between the tenant-account module and its consumers.

use std::collections::BTreeSet;

use time::OffsetDateTime;
use uuid::Uuid;

/// Scope granted to every generated API key.
pub const FULL_ACCESS_SCOPE: &str = "full_access";

/// Tenant aggregate: one per customer organization.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Tenant {
    pub id: Uuid,
    pub name: String,
    pub settings: TenantSettings,
    pub branding: Branding,
    pub integrations: Vec<Integration>,
    pub webhooks: Vec<Webhook>,
    pub api_keys: Vec<ApiKey>,
    pub created_at: OffsetDateTime,
    pub updated_at: OffsetDateTime,
}

impl Tenant {
    /// Display projection: drops the secret value of every API key.
    #[must_use]
    pub fn without_secrets(mut self) -> Self {
        for key in &mut self.api_keys {
            key.key = None;
        }
        self
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct TenantSettings {
    pub timezone: String,
    pub language: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Branding {
    pub primary_color: String,
    pub logo_url: String,
    pub login_message: String,
}

/// Third-party integration credentials, unique per `provider` within a tenant.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Integration {
    pub provider: String,
    pub api_key: String,
    pub active: bool,
}

/// Webhook subscription. `secret` is generated once at creation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Webhook {
    pub id: Uuid,
    pub url: String,
    pub events: BTreeSet<String>,
    pub active: bool,
    pub secret: String,
    pub created_at: OffsetDateTime,
}

/// API key entry.
///
/// `key` is `None` when the owning tenant was read for display.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiKey {
    pub key: Option<String>,
    pub name: String,
    pub scopes: BTreeSet<String>,
    pub created_at: OffsetDateTime,
}

/// Partial update of the tenant's display fields.
///
/// Only `Some` leaves are written; all other stored values are kept.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct TenantSettingsUpdate {
    pub name: Option<String>,
    pub settings: Option<SettingsPatch>,
    pub branding: Option<BrandingPatch>,
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct SettingsPatch {
    pub timezone: Option<String>,
    pub language: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct BrandingPatch {
    pub primary_color: Option<String>,
    pub logo_url: Option<String>,
    pub login_message: Option<String>,
}

/// Insert-or-update data for an integration, keyed by `provider`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IntegrationUpsert {
    pub provider: String,
    pub api_key: String,
    pub active: bool,
}

/// Data for a new webhook subscription.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct NewWebhook {
    pub url: String,
    pub events: BTreeSet<String>,
}

/// Data for a new API key. A missing name falls back to the configured default.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct NewApiKey {
    pub name: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn without_secrets_clears_every_api_key_value() {
        let now = OffsetDateTime::now_utc();
        let tenant = Tenant {
            id: Uuid::new_v4(),
            name: "Acme".to_owned(),
            settings: TenantSettings::default(),
            branding: Branding::default(),
            integrations: vec![Integration {
                provider: "slack".to_owned(),
                api_key: "xoxb".to_owned(),
                active: true,
            }],
            webhooks: Vec::new(),
            api_keys: vec![
                ApiKey {
                    key: Some("sk_one".to_owned()),
                    name: "one".to_owned(),
                    scopes: BTreeSet::from([FULL_ACCESS_SCOPE.to_owned()]),
                    created_at: now,
                },
                ApiKey {
                    key: Some("sk_two".to_owned()),
                    name: "two".to_owned(),
                    scopes: BTreeSet::from([FULL_ACCESS_SCOPE.to_owned()]),
                    created_at: now,
                },
            ],
            created_at: now,
            updated_at: now,
        };

        let redacted = tenant.without_secrets();

        assert!(redacted.api_keys.iter().all(|k| k.key.is_none()));
        assert_eq!(redacted.api_keys[1].name, "two");
        assert_eq!(redacted.integrations[0].api_key, "xoxb");
    }
}
