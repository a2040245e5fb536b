use async_trait::async_trait;
use sea_orm::{ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter};
use tenant_account_sdk::Tenant;
use uuid::Uuid;

use crate::domain::error::DomainError;
use crate::domain::repo::{TenantRepository, VersionedTenant};

use super::entity::{self, Entity as TenantEntity};
use super::mapper;

/// Revision assigned to a freshly inserted tenant row.
const INITIAL_VERSION: i64 = 1;

pub struct SeaOrmTenantRepository {
    db: DatabaseConnection,
}

impl SeaOrmTenantRepository {
    #[must_use]
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

#[async_trait]
impl TenantRepository for SeaOrmTenantRepository {
    async fn find(&self, id: Uuid) -> Result<Option<VersionedTenant>, DomainError> {
        let row = TenantEntity::find_by_id(id).one(&self.db).await?;
        row.map(VersionedTenant::try_from).transpose()
    }

    async fn save(&self, tenant: &Tenant, expected_version: i64) -> Result<bool, DomainError> {
        let active_model = mapper::to_active_model(tenant, expected_version + 1)?;

        let result = TenantEntity::update_many()
            .set(active_model)
            .filter(entity::Column::Id.eq(tenant.id))
            .filter(entity::Column::Version.eq(expected_version))
            .exec(&self.db)
            .await?;

        Ok(result.rows_affected == 1)
    }

    async fn create(&self, tenant: &Tenant) -> Result<(), DomainError> {
        let active_model = mapper::to_active_model(tenant, INITIAL_VERSION)?;
        TenantEntity::insert(active_model).exec(&self.db).await?;
        Ok(())
    }
}
