use sea_orm::entity::prelude::*;

/// Join table for the many-to-many relationship between curriculums and disciplines.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "curriculum_disciplines")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub curriculum_id: i32,
    #[sea_orm(primary_key, auto_increment = false)]
    pub discipline_id: i32,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::curriculum::Entity",
        from = "Column::CurriculumId",
        to = "super::curriculum::Column::Id",
        on_update = "Cascade",
        on_delete = "Cascade"
    )]
    Curriculum,
    #[sea_orm(
        belongs_to = "super::discipline::Entity",
        from = "Column::DisciplineId",
        to = "super::discipline::Column::Id",
        on_update = "Cascade",
        on_delete = "Restrict"
    )]
    Discipline,
}

impl Related<super::curriculum::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Curriculum.def()
    }
}

impl Related<super::discipline::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Discipline.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
