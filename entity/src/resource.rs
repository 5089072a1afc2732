use sea_orm::entity::prelude::*;

use crate::text_list::TextList;

/// Availability of a resource, stored as its lowercase name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, EnumIter, DeriveActiveEnum)]
#[sea_orm(rs_type = "String", db_type = "String(StringLen::N(16))")]
pub enum ResourceStatus {
    #[sea_orm(string_value = "available")]
    Available,
    #[sea_orm(string_value = "unavailable")]
    Unavailable,
    #[sea_orm(string_value = "reserved")]
    Reserved,
}

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "resources")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub resource_type_id: i32,
    pub description: String,
    pub status: ResourceStatus,
    #[sea_orm(column_type = "Json")]
    pub characteristics: TextList,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::resource_type::Entity",
        from = "Column::ResourceTypeId",
        to = "super::resource_type::Column::Id",
        on_update = "Cascade",
        on_delete = "Restrict"
    )]
    ResourceType,
    #[sea_orm(has_many = "super::reservation_resource::Entity")]
    ReservationResource,
}

impl Related<super::resource_type::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::ResourceType.def()
    }
}

impl Related<super::reservation::Entity> for Entity {
    fn to() -> RelationDef {
        super::reservation_resource::Relation::Reservation.def()
    }

    fn via() -> Option<RelationDef> {
        Some(super::reservation_resource::Relation::Resource.def().rev())
    }
}

impl ActiveModelBehavior for ActiveModel {}
