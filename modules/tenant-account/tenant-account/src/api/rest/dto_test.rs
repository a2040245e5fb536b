#![allow(clippy::unwrap_used, clippy::expect_used)]

use std::collections::BTreeSet;

use serde_json::json;
use tenant_account_sdk::{
    ApiKey, Branding, FULL_ACCESS_SCOPE, Tenant, TenantSettings, TenantSettingsUpdate,
};
use time::macros::datetime;
use uuid::Uuid;

use super::dto;

fn tenant(key: Option<&str>) -> Tenant {
    let at = datetime!(2025-05-01 08:00 UTC);
    Tenant {
        id: Uuid::new_v4(),
        name: "Acme".to_owned(),
        settings: TenantSettings {
            timezone: "UTC".to_owned(),
            language: "en".to_owned(),
        },
        branding: Branding {
            primary_color: "#fff".to_owned(),
            logo_url: "https://x/y.png".to_owned(),
            login_message: "hi".to_owned(),
        },
        integrations: Vec::new(),
        webhooks: Vec::new(),
        api_keys: vec![ApiKey {
            key: key.map(str::to_owned),
            name: "ci".to_owned(),
            scopes: BTreeSet::from([FULL_ACCESS_SCOPE.to_owned()]),
            created_at: at,
        }],
        created_at: at,
        updated_at: at,
    }
}

#[test]
fn test_tenant_dto_uses_camel_case() {
    let dto: dto::TenantDto = tenant(Some("sk_1")).into();
    let json = serde_json::to_value(&dto).unwrap();

    assert_eq!(json["branding"]["primaryColor"], "#fff");
    assert_eq!(json["branding"]["loginMessage"], "hi");
    assert_eq!(json["apiKeys"][0]["key"], "sk_1");
    assert_eq!(json["apiKeys"][0]["scopes"], json!(["full_access"]));
    assert_eq!(json["createdAt"], "2025-05-01T08:00:00Z");
    assert!(json.get("version").is_none());
}

#[test]
fn test_redacted_api_key_has_no_key_field() {
    let dto: dto::TenantDto = tenant(None).into();
    let json = serde_json::to_value(&dto).unwrap();

    let entry = json["apiKeys"][0].as_object().unwrap();
    assert!(!entry.contains_key("key"));
    assert_eq!(entry["name"], "ci");
}

#[test]
fn test_update_request_to_typed_patch() {
    let req: dto::UpdateSettingsRequest = serde_json::from_value(json!({
        "name": "Acme Corp",
        "settings": { "timezone": "UTC", "language": "en" },
        "branding": { "primaryColor": "#fff", "logoUrl": "http://x/y.png", "loginMessage": "hi" }
    }))
    .unwrap();

    let update: TenantSettingsUpdate = req.into();

    assert_eq!(update.name.as_deref(), Some("Acme Corp"));
    let settings = update.settings.unwrap();
    assert_eq!(settings.timezone.as_deref(), Some("UTC"));
    let branding = update.branding.unwrap();
    assert_eq!(branding.logo_url.as_deref(), Some("http://x/y.png"));
}

#[test]
fn test_empty_update_request_touches_nothing() {
    let req: dto::UpdateSettingsRequest = serde_json::from_str("{}").unwrap();
    let update: TenantSettingsUpdate = req.into();
    assert_eq!(update, TenantSettingsUpdate::default());
}

#[test]
fn test_webhook_request_events_default_to_empty() {
    let req: dto::AddWebhookRequest =
        serde_json::from_value(json!({ "url": "https://hooks.example/in" })).unwrap();
    assert!(req.events.is_empty());
}

#[test]
fn test_integration_request_reads_camel_case_api_key() {
    let req: dto::UpsertIntegrationRequest = serde_json::from_value(json!({
        "provider": "slack",
        "apiKey": "xoxb",
        "active": true
    }))
    .unwrap();
    assert_eq!(req.api_key, "xoxb");
}
