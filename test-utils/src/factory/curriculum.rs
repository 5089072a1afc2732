//! Curriculum factory for creating test curriculums and their discipline links.
//!
//! Default values are sourced from the curriculum fixture.

use crate::factory::helpers::next_id;
use crate::fixture;
use chrono::NaiveDate;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test curriculums with customizable fields.
pub struct CurriculumFactory<'a> {
    db: &'a DatabaseConnection,
    entity: entity::curriculum::Model,
}

impl<'a> CurriculumFactory<'a> {
    /// Creates a new CurriculumFactory with fixture defaults and a unique course name.
    pub fn new(db: &'a DatabaseConnection) -> Self {
        let entity = fixture::curriculum::entity_builder()
            .course_name(format!("Course {}", next_id()))
            .build();

        Self { db, entity }
    }

    pub fn course_name(mut self, course_name: impl Into<String>) -> Self {
        self.entity.course_name = course_name.into();
        self
    }

    pub fn start_date(mut self, start_date: NaiveDate) -> Self {
        self.entity.start_date = start_date;
        self
    }

    pub fn end_date(mut self, end_date: NaiveDate) -> Self {
        self.entity.end_date = end_date;
        self
    }

    /// Builds and inserts the curriculum entity into the database.
    pub async fn build(self) -> Result<entity::curriculum::Model, DbErr> {
        entity::curriculum::ActiveModel {
            id: ActiveValue::NotSet,
            course_name: ActiveValue::Set(self.entity.course_name),
            start_date: ActiveValue::Set(self.entity.start_date),
            end_date: ActiveValue::Set(self.entity.end_date),
        }
        .insert(self.db)
        .await
    }
}

/// Creates a curriculum with default values.
pub async fn create_curriculum(
    db: &DatabaseConnection,
) -> Result<entity::curriculum::Model, DbErr> {
    CurriculumFactory::new(db).build().await
}

/// Inserts a `curriculum_disciplines` row linking a curriculum to a discipline.
pub async fn link_discipline(
    db: &DatabaseConnection,
    curriculum_id: i32,
    discipline_id: i32,
) -> Result<entity::curriculum_discipline::Model, DbErr> {
    entity::curriculum_discipline::ActiveModel {
        curriculum_id: ActiveValue::Set(curriculum_id),
        discipline_id: ActiveValue::Set(discipline_id),
    }
    .insert(db)
    .await
}
