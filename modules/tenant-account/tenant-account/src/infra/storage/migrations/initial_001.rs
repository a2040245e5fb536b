use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(TenantAccounts::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(TenantAccounts::Id)
                            .uuid()
                            .not_null()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(TenantAccounts::Name).string().not_null())
                    .col(ColumnDef::new(TenantAccounts::Settings).json().not_null())
                    .col(ColumnDef::new(TenantAccounts::Branding).json().not_null())
                    .col(
                        ColumnDef::new(TenantAccounts::Integrations)
                            .json()
                            .not_null(),
                    )
                    .col(ColumnDef::new(TenantAccounts::Webhooks).json().not_null())
                    .col(ColumnDef::new(TenantAccounts::ApiKeys).json().not_null())
                    .col(
                        ColumnDef::new(TenantAccounts::Version)
                            .big_integer()
                            .not_null()
                            .default(1),
                    )
                    .col(
                        ColumnDef::new(TenantAccounts::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(TenantAccounts::UpdatedAt)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(TenantAccounts::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum TenantAccounts {
    Table,
    Id,
    Name,
    Settings,
    Branding,
    Integrations,
    Webhooks,
    ApiKeys,
    Version,
    CreatedAt,
    UpdatedAt,
}
