use sea_orm_migration::{prelude::*, schema::*};

use super::m20250302_000006_create_resource_type_table::ResourceType;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Resource::Table)
                    .if_not_exists()
                    .col(pk_auto(Resource::Id))
                    .col(integer(Resource::ResourceTypeId))
                    .col(text(Resource::Description))
                    .col(string_len(Resource::Status, 16))
                    .col(json(Resource::Characteristics))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_resource_resource_type_id")
                            .from(Resource::Table, Resource::ResourceTypeId)
                            .to(ResourceType::Table, ResourceType::Id)
                            .on_delete(ForeignKeyAction::Restrict)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Resource::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Resource {
    #[sea_orm(iden = "resources")]
    Table,
    Id,
    ResourceTypeId,
    Description,
    Status,
    Characteristics,
}
