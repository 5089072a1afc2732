use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(ResourceType::Table)
                    .if_not_exists()
                    .col(pk_auto(ResourceType::Id))
                    .col(string(ResourceType::Name))
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(ResourceType::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum ResourceType {
    #[sea_orm(iden = "resource_types")]
    Table,
    Id,
    Name,
}
