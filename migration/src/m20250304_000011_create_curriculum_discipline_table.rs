use sea_orm_migration::{prelude::*, schema::*};

use super::{
    m20250301_000003_create_discipline_table::Discipline,
    m20250304_000010_create_curriculum_table::Curriculum,
};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(CurriculumDiscipline::Table)
                    .if_not_exists()
                    .col(integer(CurriculumDiscipline::CurriculumId))
                    .col(integer(CurriculumDiscipline::DisciplineId))
                    .primary_key(
                        Index::create()
                            .name("pk_curriculum_disciplines")
                            .col(CurriculumDiscipline::CurriculumId)
                            .col(CurriculumDiscipline::DisciplineId),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_curriculum_discipline_curriculum_id")
                            .from(
                                CurriculumDiscipline::Table,
                                CurriculumDiscipline::CurriculumId,
                            )
                            .to(Curriculum::Table, Curriculum::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_curriculum_discipline_discipline_id")
                            .from(
                                CurriculumDiscipline::Table,
                                CurriculumDiscipline::DisciplineId,
                            )
                            .to(Discipline::Table, Discipline::Id)
                            .on_delete(ForeignKeyAction::Restrict)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(CurriculumDiscipline::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum CurriculumDiscipline {
    #[sea_orm(iden = "curriculum_disciplines")]
    Table,
    CurriculumId,
    DisciplineId,
}
