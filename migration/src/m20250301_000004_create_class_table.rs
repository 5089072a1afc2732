use sea_orm_migration::{prelude::*, schema::*};

use super::m20250301_000003_create_discipline_table::Discipline;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Class::Table)
                    .if_not_exists()
                    .col(pk_auto(Class::Id))
                    .col(integer(Class::DisciplineId))
                    .col(string(Class::Name))
                    .col(text(Class::Description))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_class_discipline_id")
                            .from(Class::Table, Class::DisciplineId)
                            .to(Discipline::Table, Discipline::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Class::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Class {
    #[sea_orm(iden = "classes")]
    Table,
    Id,
    DisciplineId,
    Name,
    Description,
}
