//! Discipline domain model.

use crate::model::discipline::DisciplineDto;

/// Course subject that curricula are composed of.
#[derive(Debug, Clone, PartialEq)]
pub struct Discipline {
    pub id: i32,
    pub name: String,
    pub credits: i32,
    pub program: String,
    pub bibliography: Vec<String>,
}

impl Discipline {
    pub fn from_entity(entity: entity::discipline::Model) -> Self {
        Self {
            id: entity.id,
            name: entity.name,
            credits: entity.credits,
            program: entity.program,
            bibliography: entity.bibliography.into(),
        }
    }

    pub fn into_dto(self) -> DisciplineDto {
        DisciplineDto {
            id: self.id,
            name: self.name,
            credits: self.credits,
            program: self.program,
            bibliography: self.bibliography,
        }
    }
}
