use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "curriculums")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub course_name: String,
    pub start_date: Date,
    pub end_date: Date,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::curriculum_discipline::Entity")]
    CurriculumDiscipline,
}

impl Related<super::curriculum_discipline::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::CurriculumDiscipline.def()
    }
}

/// Disciplines reached through the `curriculum_disciplines` join table.
impl Related<super::discipline::Entity> for Entity {
    fn to() -> RelationDef {
        super::curriculum_discipline::Relation::Discipline.def()
    }

    fn via() -> Option<RelationDef> {
        Some(super::curriculum_discipline::Relation::Curriculum.def().rev())
    }
}

impl ActiveModelBehavior for ActiveModel {}
