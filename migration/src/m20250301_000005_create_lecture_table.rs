use sea_orm_migration::{prelude::*, schema::*};

use super::{
    m20250301_000002_create_room_table::Room, m20250301_000004_create_class_table::Class,
};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Lecture::Table)
                    .if_not_exists()
                    .col(pk_auto(Lecture::Id))
                    .col(integer(Lecture::ClassId))
                    .col(integer(Lecture::RoomId))
                    .col(date(Lecture::Date))
                    .col(json(Lecture::Content))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_lecture_class_id")
                            .from(Lecture::Table, Lecture::ClassId)
                            .to(Class::Table, Class::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_lecture_room_id")
                            .from(Lecture::Table, Lecture::RoomId)
                            .to(Room::Table, Room::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Lecture::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Lecture {
    #[sea_orm(iden = "lectures")]
    Table,
    Id,
    ClassId,
    RoomId,
    Date,
    Content,
}
