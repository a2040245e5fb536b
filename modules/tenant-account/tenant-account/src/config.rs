use std::time::Duration;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::domain::service::ServiceConfig;

/// Configuration for the tenant-account module (`modules.tenant_account`).
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct TenantAccountConfig {
    #[serde(default = "default_api_key_name")]
    pub default_api_key_name: String,

    #[serde(default = "default_max_write_attempts")]
    pub max_write_attempts: u32,

    /// Base pause in milliseconds between write attempts after a lost race.
    #[serde(default = "default_retry_backoff_ms")]
    pub retry_backoff_ms: u64,

    /// Tenants created at startup when they do not exist yet.
    #[serde(default)]
    pub bootstrap_tenants: Vec<BootstrapTenant>,
}

/// Seed entry for a tenant provisioned at startup.
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct BootstrapTenant {
    pub id: Uuid,
    pub name: String,
}

impl Default for TenantAccountConfig {
    fn default() -> Self {
        Self {
            default_api_key_name: default_api_key_name(),
            max_write_attempts: default_max_write_attempts(),
            retry_backoff_ms: default_retry_backoff_ms(),
            bootstrap_tenants: Vec::new(),
        }
    }
}

impl TenantAccountConfig {
    #[must_use]
    pub fn service_config(&self) -> ServiceConfig {
        ServiceConfig {
            default_api_key_name: self.default_api_key_name.clone(),
            max_write_attempts: self.max_write_attempts,
            retry_backoff: Duration::from_millis(self.retry_backoff_ms),
        }
    }
}

fn default_api_key_name() -> String {
    "Default Key".to_owned()
}

fn default_max_write_attempts() -> u32 {
    10
}

fn default_retry_backoff_ms() -> u64 {
    10
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_section_uses_defaults() {
        let cfg: TenantAccountConfig = serde_json::from_str("{}").unwrap();
        assert_eq!(cfg.default_api_key_name, "Default Key");
        assert_eq!(cfg.max_write_attempts, 10);
        assert_eq!(
            cfg.service_config().retry_backoff,
            Duration::from_millis(10)
        );
        assert!(cfg.bootstrap_tenants.is_empty());
    }

    #[test]
    fn bootstrap_tenants_are_parsed() {
        let cfg: TenantAccountConfig = serde_json::from_value(serde_json::json!({
            "max_write_attempts": 5,
            "bootstrap_tenants": [
                { "id": "7f9c0b8e-3c1a-4f55-9b1e-2d6f8a0c4e11", "name": "Acme" }
            ]
        }))
        .unwrap();

        assert_eq!(cfg.max_write_attempts, 5);
        assert_eq!(cfg.bootstrap_tenants.len(), 1);
        assert_eq!(cfg.bootstrap_tenants[0].name, "Acme");
    }

    #[test]
    fn unknown_keys_are_rejected() {
        let res: Result<TenantAccountConfig, _> = serde_json::from_str(r#"{ "max_attempts": 5 }"#);
        assert!(res.is_err());
    }
}
