use std::net::SocketAddr;
use std::path::Path;

use anyhow::{Context as _, Result};
use axum::http::HeaderName;
use figment::Figment;
use figment::providers::{Env, Format as _, Serialized, Yaml};
use serde::{Deserialize, Serialize};
use tenant_account::config::TenantAccountConfig;

/// DSN used by `--mock`: a private in-memory `SQLite` database.
pub const MOCK_DSN: &str = "sqlite::memory:";

/// Environment variable prefix; nested keys are separated by `__`.
const ENV_PREFIX: &str = "APP__";

/// Effective server configuration.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct AppConfig {
    #[serde(default)]
    pub server: ServerConfig,
    #[serde(default)]
    pub database: DatabaseConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
    #[serde(default)]
    pub modules: ModulesConfig,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct ServerConfig {
    pub bind_addr: SocketAddr,
    pub request_timeout_secs: u64,
    pub body_limit_bytes: usize,
    /// Header carrying the caller's tenant id, set by the upstream auth layer.
    pub tenant_header: String,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind_addr: SocketAddr::from(([127, 0, 0, 1], 8087)),
            request_timeout_secs: 30,
            body_limit_bytes: 1024 * 1024,
            tenant_header: tenant_account::api::rest::caller::DEFAULT_TENANT_HEADER.to_owned(),
        }
    }
}

#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct DatabaseConfig {
    pub dsn: String,
    pub max_conns: u32,
}

impl Default for DatabaseConfig {
    fn default() -> Self {
        Self {
            dsn: "sqlite://tenant_account.db?mode=rwc".to_owned(),
            max_conns: 10,
        }
    }
}

#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct LoggingConfig {
    /// `EnvFilter` directive; `RUST_LOG` takes precedence when set.
    pub level: String,
    pub format: LogFormat,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_owned(),
            format: LogFormat::Text,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    Text,
    Json,
}

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct ModulesConfig {
    #[serde(default)]
    pub tenant_account: TenantAccountConfig,
}

/// Command-line values that take precedence over every other layer.
#[derive(Debug, Clone, Copy, Default)]
pub struct CliOverrides {
    pub port: Option<u16>,
    pub verbose: u8,
    pub mock: bool,
}

impl AppConfig {
    /// Load configuration in layers: defaults, then the YAML file (if any),
    /// then `APP__*` environment variables.
    ///
    /// # Errors
    /// Fails when a layer cannot be parsed or the merged result is invalid.
    pub fn load(config_path: Option<&Path>) -> Result<Self> {
        Self::figment(config_path)
            .extract::<Self>()
            .context("failed to load configuration")?
            .validated()
    }

    fn figment(config_path: Option<&Path>) -> Figment {
        let mut figment = Figment::new().merge(Serialized::defaults(Self::default()));
        if let Some(path) = config_path {
            figment = figment.merge(Yaml::file(path));
        }
        figment.merge(Env::prefixed(ENV_PREFIX).split("__"))
    }

    fn validated(self) -> Result<Self> {
        self.tenant_header()?;
        anyhow::ensure!(
            self.modules.tenant_account.max_write_attempts > 0,
            "modules.tenant_account.max_write_attempts must be at least 1"
        );
        anyhow::ensure!(
            self.server.request_timeout_secs > 0,
            "server.request_timeout_secs must be at least 1"
        );
        anyhow::ensure!(
            self.database.max_conns > 0,
            "database.max_conns must be at least 1"
        );
        Ok(self)
    }

    pub fn apply_cli_overrides(&mut self, cli: CliOverrides) {
        if let Some(port) = cli.port {
            self.server.bind_addr.set_port(port);
        }

        match cli.verbose {
            0 => {}
            1 => "info".clone_into(&mut self.logging.level),
            2 => "debug".clone_into(&mut self.logging.level),
            _ => "trace".clone_into(&mut self.logging.level),
        }

        if cli.mock {
            // Every pooled connection to `sqlite::memory:` opens its own empty database.
            MOCK_DSN.clone_into(&mut self.database.dsn);
            self.database.max_conns = 1;
        }
    }

    /// Parsed caller-identity header name.
    ///
    /// # Errors
    /// Fails when `server.tenant_header` is not a valid HTTP header name.
    pub fn tenant_header(&self) -> Result<HeaderName> {
        let name = self.server.tenant_header.as_str();
        HeaderName::try_from(name)
            .with_context(|| format!("invalid server.tenant_header: {name:?}"))
    }

    /// Pretty JSON rendering for `--print-config` and `check`.
    ///
    /// # Errors
    /// Fails only if serialization fails.
    pub fn to_pretty_json(&self) -> Result<String> {
        serde_json::to_string_pretty(self).context("failed to serialize configuration")
    }
}
