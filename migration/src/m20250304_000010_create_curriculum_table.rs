use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Curriculum::Table)
                    .if_not_exists()
                    .col(pk_auto(Curriculum::Id))
                    .col(string(Curriculum::CourseName))
                    .col(date(Curriculum::StartDate))
                    .col(date(Curriculum::EndDate))
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Curriculum::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Curriculum {
    #[sea_orm(iden = "curriculums")]
    Table,
    Id,
    CourseName,
    StartDate,
    EndDate,
}
