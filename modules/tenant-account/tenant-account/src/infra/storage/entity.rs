use sea_orm::entity::prelude::*;
use time::OffsetDateTime;
use uuid::Uuid;

/// One row per tenant; the JSON columns hold the nested parts of the document.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "tenant_accounts")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    pub name: String,
    pub settings: Json,
    pub branding: Json,
    pub integrations: Json,
    pub webhooks: Json,
    pub api_keys: Json,
    pub version: i64,
    pub created_at: OffsetDateTime,
    pub updated_at: OffsetDateTime,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
