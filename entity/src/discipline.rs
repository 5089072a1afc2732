use sea_orm::entity::prelude::*;

use crate::text_list::TextList;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "disciplines")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub name: String,
    pub credits: i32,
    pub program: String,
    #[sea_orm(column_type = "Json")]
    pub bibliography: TextList,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::class::Entity")]
    Class,
    #[sea_orm(has_many = "super::curriculum_discipline::Entity")]
    CurriculumDiscipline,
}

impl Related<super::class::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Class.def()
    }
}

impl Related<super::curriculum::Entity> for Entity {
    fn to() -> RelationDef {
        super::curriculum_discipline::Relation::Curriculum.def()
    }

    fn via() -> Option<RelationDef> {
        Some(super::curriculum_discipline::Relation::Discipline.def().rev())
    }
}

impl ActiveModelBehavior for ActiveModel {}
