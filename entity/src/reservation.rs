use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "reservations")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub lecture_id: i32,
    pub observation: String,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::lecture::Entity",
        from = "Column::LectureId",
        to = "super::lecture::Column::Id",
        on_update = "Cascade",
        on_delete = "Restrict"
    )]
    Lecture,
    #[sea_orm(has_many = "super::reservation_resource::Entity")]
    ReservationResource,
}

impl Related<super::lecture::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Lecture.def()
    }
}

impl Related<super::reservation_resource::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::ReservationResource.def()
    }
}

/// Resources reached through the `reservation_resources` join table.
impl Related<super::resource::Entity> for Entity {
    fn to() -> RelationDef {
        super::reservation_resource::Relation::Resource.def()
    }

    fn via() -> Option<RelationDef> {
        Some(super::reservation_resource::Relation::Reservation.def().rev())
    }
}

impl ActiveModelBehavior for ActiveModel {}
