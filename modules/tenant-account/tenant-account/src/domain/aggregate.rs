//! In-memory mutations of the tenant aggregate.
//!
//! These functions never touch storage; the service applies one of them to a
//! freshly loaded document and then writes the whole document back.

use tenant_account_sdk::{Integration, IntegrationUpsert, Tenant, TenantSettingsUpdate, Webhook};

/// Result of an integration upsert.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UpsertOutcome {
    Inserted,
    Updated,
}

/// Overwrite only the leaves present in `update`.
pub fn apply_settings_update(tenant: &mut Tenant, update: &TenantSettingsUpdate) {
    if let Some(name) = &update.name {
        tenant.name.clone_from(name);
    }

    if let Some(settings) = &update.settings {
        if let Some(timezone) = &settings.timezone {
            tenant.settings.timezone.clone_from(timezone);
        }
        if let Some(language) = &settings.language {
            tenant.settings.language.clone_from(language);
        }
    }

    if let Some(branding) = &update.branding {
        if let Some(primary_color) = &branding.primary_color {
            tenant.branding.primary_color.clone_from(primary_color);
        }
        if let Some(logo_url) = &branding.logo_url {
            tenant.branding.logo_url.clone_from(logo_url);
        }
        if let Some(login_message) = &branding.login_message {
            tenant.branding.login_message.clone_from(login_message);
        }
    }
}

/// Update the first integration with a matching provider in place, or append a new one.
pub fn upsert_integration(
    integrations: &mut Vec<Integration>,
    upsert: &IntegrationUpsert,
) -> UpsertOutcome {
    if let Some(existing) = integrations
        .iter_mut()
        .find(|i| i.provider == upsert.provider)
    {
        existing.api_key.clone_from(&upsert.api_key);
        existing.active = upsert.active;
        return UpsertOutcome::Updated;
    }

    integrations.push(Integration {
        provider: upsert.provider.clone(),
        api_key: upsert.api_key.clone(),
        active: upsert.active,
    });
    UpsertOutcome::Inserted
}

/// Drop every webhook whose id renders as `webhook_id`. Returns how many were removed.
pub fn remove_webhook(webhooks: &mut Vec<Webhook>, webhook_id: &str) -> usize {
    let before = webhooks.len();
    webhooks.retain(|w| w.id.to_string() != webhook_id);
    before - webhooks.len()
}
