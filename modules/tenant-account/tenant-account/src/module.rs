use std::sync::Arc;

use anyhow::Context as _;
use axum::Router;
use axum::http::HeaderName;
use sea_orm::DatabaseConnection;
use sea_orm_migration::MigratorTrait;
use tenant_account_sdk::TenantAccountApi;
use tracing::info;
use utoipa::OpenApi as _;

use crate::api::rest::openapi::{self, TenantAccountApiDoc};
use crate::api::rest::routes;
use crate::config::TenantAccountConfig;
use crate::domain::service::Service;
use crate::infra::storage::SeaOrmTenantRepository;
use crate::infra::storage::migrations::Migrator;
use crate::local_client::TenantAccountLocalClient;

/// Composition root of the tenant-account module.
///
/// Wires configuration, storage and the domain service, and hands out the
/// REST router and the in-process client built on top of them.
pub struct TenantAccountModule {
    service: Arc<Service>,
}

impl TenantAccountModule {
    /// Run migrations, build the service and provision configured bootstrap tenants.
    ///
    /// # Errors
    /// Fails if migrations fail or a bootstrap tenant cannot be written.
    pub async fn init(
        db: DatabaseConnection,
        config: &TenantAccountConfig,
    ) -> anyhow::Result<Self> {
        info!("Initializing tenant-account module");

        Self::migrate(&db).await?;

        let repo = Arc::new(SeaOrmTenantRepository::new(db));
        let service = Arc::new(Service::new(repo, config.service_config()));

        for seed in &config.bootstrap_tenants {
            service
                .provision(seed.id, &seed.name)
                .await
                .with_context(|| format!("failed to provision bootstrap tenant {}", seed.id))?;
        }

        info!(
            bootstrap_tenants = config.bootstrap_tenants.len(),
            "Tenant-account module initialized"
        );
        Ok(Self { service })
    }

    /// Apply all pending schema migrations.
    ///
    /// # Errors
    /// Propagates migration failures from the database.
    pub async fn migrate(db: &DatabaseConnection) -> anyhow::Result<()> {
        info!("Running tenant-account database migrations");
        Migrator::up(db, None)
            .await
            .context("tenant-account migrations failed")?;
        info!("Tenant-account database migrations completed successfully");
        Ok(())
    }

    /// Mount the REST routes on `router`.
    pub fn register_rest(&self, router: Router, tenant_header: HeaderName) -> Router {
        info!(%tenant_header, "Registering tenant-account REST routes");
        routes::register_routes(router, self.service.clone(), tenant_header)
    }

    /// OpenAPI document for the routes mounted by [`Self::register_rest`], with the
    /// caller identity scheme naming `tenant_header`.
    #[must_use]
    pub fn openapi(tenant_header: &HeaderName) -> utoipa::openapi::OpenApi {
        let mut doc = TenantAccountApiDoc::openapi();
        openapi::set_tenant_header(&mut doc, tenant_header.as_str());
        doc
    }

    /// In-process client for other components of the same binary.
    #[must_use]
    pub fn client(&self) -> Arc<dyn TenantAccountApi> {
        Arc::new(TenantAccountLocalClient::new(self.service.clone()))
    }
}
