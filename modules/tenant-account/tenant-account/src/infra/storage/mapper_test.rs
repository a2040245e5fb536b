#![allow(clippy::unwrap_used, clippy::expect_used)]

use std::collections::BTreeSet;

use serde_json::json;
use tenant_account_sdk::{ApiKey, Branding, Tenant, TenantSettings, Webhook};
use time::OffsetDateTime;
use time::macros::datetime;
use uuid::Uuid;

use super::entity;
use super::mapper::to_active_model;
use crate::domain::error::DomainError;
use crate::domain::repo::VersionedTenant;

fn row(api_keys: serde_json::Value) -> entity::Model {
    entity::Model {
        id: Uuid::new_v4(),
        name: "Acme".to_owned(),
        settings: json!({ "timezone": "UTC", "language": "en" }),
        branding: json!({
            "primary_color": "#123456",
            "logo_url": "https://acme.example/logo.png",
            "login_message": "Hi"
        }),
        integrations: json!([
            { "provider": "slack", "api_key": "xoxb", "active": true }
        ]),
        webhooks: json!([{
            "id": "0b7d4a5e-6c1f-4a3b-9e8d-2f1c0a9b8e7d",
            "url": "https://hooks.example/in",
            "events": ["user.created", "invoice.paid"],
            "active": true,
            "secret": "whsec_abc",
            "created_at": "2025-03-01T10:00:00Z"
        }]),
        api_keys,
        version: 7,
        created_at: datetime!(2025-01-01 00:00 UTC),
        updated_at: datetime!(2025-03-01 10:00 UTC),
    }
}

#[test]
fn test_row_to_tenant_conversion() {
    let model = row(json!([{
        "key": "sk_abc",
        "name": "ci",
        "scopes": ["full_access"],
        "created_at": "2025-02-01T00:00:00Z"
    }]));
    let id = model.id;

    let VersionedTenant { tenant, version } = model.try_into().unwrap();

    assert_eq!(version, 7);
    assert_eq!(tenant.id, id);
    assert_eq!(tenant.settings.timezone, "UTC");
    assert_eq!(tenant.branding.primary_color, "#123456");
    assert_eq!(tenant.integrations[0].provider, "slack");
    assert_eq!(
        tenant.webhooks[0].events,
        BTreeSet::from(["invoice.paid".to_owned(), "user.created".to_owned()])
    );
    assert_eq!(
        tenant.webhooks[0].created_at,
        datetime!(2025-03-01 10:00 UTC)
    );
    assert_eq!(tenant.api_keys[0].key.as_deref(), Some("sk_abc"));
}

#[test]
fn test_malformed_column_is_reported_with_column_name() {
    let model = row(json!({ "not": "a list" }));

    let err = VersionedTenant::try_from(model).unwrap_err();

    assert!(matches!(err, DomainError::MalformedDocument { .. }));
    assert!(err.to_string().contains("api_keys"));
}

#[test]
fn test_redacted_tenant_cannot_be_persisted() {
    let now = OffsetDateTime::now_utc();
    let tenant = Tenant {
        id: Uuid::new_v4(),
        name: "Acme".to_owned(),
        settings: TenantSettings::default(),
        branding: Branding::default(),
        integrations: Vec::new(),
        webhooks: Vec::new(),
        api_keys: vec![ApiKey {
            key: None,
            name: "ci".to_owned(),
            scopes: BTreeSet::new(),
            created_at: now,
        }],
        created_at: now,
        updated_at: now,
    };

    let err = to_active_model(&tenant, 2).unwrap_err();
    assert!(matches!(err, DomainError::MalformedDocument { .. }));
}

#[test]
fn test_active_model_holds_whole_document() {
    let now = datetime!(2025-04-01 12:30 UTC);
    let tenant = Tenant {
        id: Uuid::new_v4(),
        name: "Acme".to_owned(),
        settings: TenantSettings {
            timezone: "UTC".to_owned(),
            language: "en".to_owned(),
        },
        branding: Branding::default(),
        integrations: Vec::new(),
        webhooks: vec![Webhook {
            id: Uuid::new_v4(),
            url: "https://hooks.example/in".to_owned(),
            events: BTreeSet::from(["a".to_owned()]),
            active: true,
            secret: "whsec_x".to_owned(),
            created_at: now,
        }],
        api_keys: Vec::new(),
        created_at: now,
        updated_at: now,
    };

    let am = to_active_model(&tenant, 4).unwrap();

    assert_eq!(am.version.as_ref(), &4);
    let webhooks = am.webhooks.as_ref();
    assert_eq!(webhooks[0]["secret"], "whsec_x");
    assert_eq!(webhooks[0]["created_at"], "2025-04-01T12:30:00Z");
    assert_eq!(am.api_keys.as_ref(), &json!([]));
}
