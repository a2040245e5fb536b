//! Serialized shape of the JSON columns in `tenant_accounts`.
//!
//! Kept separate from the SDK models so the stored layout can evolve without
//! touching the public contract. Unknown fields are ignored on read so newer
//! rows stay readable by older binaries.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};
use time::OffsetDateTime;
use uuid::Uuid;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SettingsDoc {
    #[serde(default)]
    pub timezone: String,
    #[serde(default)]
    pub language: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BrandingDoc {
    #[serde(default)]
    pub primary_color: String,
    #[serde(default)]
    pub logo_url: String,
    #[serde(default)]
    pub login_message: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IntegrationDoc {
    pub provider: String,
    pub api_key: String,
    pub active: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WebhookDoc {
    pub id: Uuid,
    pub url: String,
    #[serde(default)]
    pub events: BTreeSet<String>,
    pub active: bool,
    pub secret: String,
    #[serde(with = "time::serde::rfc3339")]
    pub created_at: OffsetDateTime,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApiKeyDoc {
    pub key: String,
    pub name: String,
    #[serde(default)]
    pub scopes: BTreeSet<String>,
    #[serde(with = "time::serde::rfc3339")]
    pub created_at: OffsetDateTime,
}
