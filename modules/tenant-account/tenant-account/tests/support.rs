#![allow(clippy::unwrap_used, clippy::expect_used)]

//! Test support utilities for `tenant_account` integration tests.

#![allow(dead_code)] // Not every test binary uses every helper

use std::sync::Arc;

use sea_orm::{ConnectOptions, Database, DatabaseConnection};
use sea_orm_migration::MigratorTrait;
use uuid::Uuid;

use tenant_account::domain::service::{Service, ServiceConfig};
use tenant_account::infra::storage::SeaOrmTenantRepository;
use tenant_account::infra::storage::migrations::Migrator;

/// Create a fresh in-memory `SQLite` database with migrations applied.
///
/// The pool is pinned to one connection: every `:memory:` connection is its
/// own database.
pub async fn inmem_db() -> DatabaseConnection {
    let mut opts = ConnectOptions::new("sqlite::memory:");
    opts.max_connections(1)
        .min_connections(1)
        .sqlx_logging(false);

    let db = Database::connect(opts)
        .await
        .expect("Failed to connect to in-memory database");

    Migrator::up(&db, None)
        .await
        .expect("Failed to run migrations");

    db
}

/// Service wired to a fresh database.
pub struct TestContext {
    pub db: DatabaseConnection,
    pub repo: Arc<SeaOrmTenantRepository>,
    pub service: Arc<Service>,
}

impl TestContext {
    pub async fn new() -> Self {
        Self::with_config(ServiceConfig::default()).await
    }

    pub async fn with_config(config: ServiceConfig) -> Self {
        let db = inmem_db().await;
        let repo = Arc::new(SeaOrmTenantRepository::new(db.clone()));
        let service = Arc::new(Service::new(repo.clone(), config));
        Self { db, repo, service }
    }

    /// Provision a tenant named `name` and return its id.
    pub async fn seed_tenant(&self, name: &str) -> Uuid {
        let id = Uuid::new_v4();
        assert!(self.service.provision(id, name).await.unwrap());
        id
    }
}
