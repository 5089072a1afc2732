use sea_orm_migration::{prelude::*, schema::*};

use super::{
    m20250302_000007_create_resource_table::Resource,
    m20250303_000008_create_reservation_table::Reservation,
};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(ReservationResource::Table)
                    .if_not_exists()
                    .col(integer(ReservationResource::ReservationId))
                    .col(integer(ReservationResource::ResourceId))
                    .primary_key(
                        Index::create()
                            .name("pk_reservation_resources")
                            .col(ReservationResource::ReservationId)
                            .col(ReservationResource::ResourceId),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_reservation_resource_reservation_id")
                            .from(
                                ReservationResource::Table,
                                ReservationResource::ReservationId,
                            )
                            .to(Reservation::Table, Reservation::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_reservation_resource_resource_id")
                            .from(ReservationResource::Table, ReservationResource::ResourceId)
                            .to(Resource::Table, Resource::Id)
                            .on_delete(ForeignKeyAction::Restrict)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(ReservationResource::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum ReservationResource {
    #[sea_orm(iden = "reservation_resources")]
    Table,
    ReservationId,
    ResourceId,
}
