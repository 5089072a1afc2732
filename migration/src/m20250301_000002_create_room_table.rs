use sea_orm_migration::{prelude::*, schema::*};

use super::m20250301_000001_create_building_table::Building;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Room::Table)
                    .if_not_exists()
                    .col(pk_auto(Room::Id))
                    .col(integer(Room::BuildingId))
                    .col(string(Room::RoomNumber))
                    .col(integer(Room::Capacity))
                    .col(integer(Room::Floor))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_room_building_id")
                            .from(Room::Table, Room::BuildingId)
                            .to(Building::Table, Building::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        // A room number may repeat across buildings but not within one
        manager
            .create_index(
                Index::create()
                    .name("idx_room_building_room_number")
                    .table(Room::Table)
                    .col(Room::BuildingId)
                    .col(Room::RoomNumber)
                    .unique()
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Room::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Room {
    #[sea_orm(iden = "rooms")]
    Table,
    Id,
    BuildingId,
    RoomNumber,
    Capacity,
    Floor,
}
