//! Curriculum domain models and parameters.
//!
//! A curriculum groups disciplines for a course over a date range. Membership is
//! recorded in the `curriculum_disciplines` join table.

use chrono::NaiveDate;

use crate::{
    model::curriculum::{CreateCurriculumDto, CurriculumDto, UpdateCurriculumDto},
    server::model::discipline::Discipline,
};

/// Curriculum with its full discipline set.
#[derive(Debug, Clone, PartialEq)]
pub struct Curriculum {
    pub id: i32,
    pub course_name: String,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub disciplines: Vec<Discipline>,
}

impl Curriculum {
    /// Converts entity models to a domain model at the repository boundary.
    pub fn from_entity(
        entity: entity::curriculum::Model,
        disciplines: Vec<entity::discipline::Model>,
    ) -> Self {
        Self {
            id: entity.id,
            course_name: entity.course_name,
            start_date: entity.start_date,
            end_date: entity.end_date,
            disciplines: disciplines
                .into_iter()
                .map(Discipline::from_entity)
                .collect(),
        }
    }

    pub fn into_dto(self) -> CurriculumDto {
        CurriculumDto {
            id: self.id,
            course_name: self.course_name,
            start_date: self.start_date,
            end_date: self.end_date,
            disciplines: self
                .disciplines
                .into_iter()
                .map(Discipline::into_dto)
                .collect(),
        }
    }
}

/// Parameters for creating a curriculum and its initial discipline set.
#[derive(Debug, Clone)]
pub struct CreateCurriculumParams {
    pub course_name: String,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub discipline_ids: Vec<i32>,
}

impl CreateCurriculumParams {
    pub fn from_dto(dto: CreateCurriculumDto) -> Self {
        Self {
            course_name: dto.course_name,
            start_date: dto.start_date,
            end_date: dto.end_date,
            discipline_ids: dto.disciplines.into_iter().map(|d| d.id).collect(),
        }
    }
}

/// Parameters for a partial curriculum update; `None` leaves the field unchanged.
#[derive(Debug, Clone, Default)]
pub struct UpdateCurriculumParams {
    pub course_name: Option<String>,
    pub start_date: Option<NaiveDate>,
    pub end_date: Option<NaiveDate>,
}

impl UpdateCurriculumParams {
    pub fn from_dto(dto: UpdateCurriculumDto) -> Self {
        Self {
            course_name: dto.course_name,
            start_date: dto.start_date,
            end_date: dto.end_date,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.course_name.is_none() && self.start_date.is_none() && self.end_date.is_none()
    }
}
