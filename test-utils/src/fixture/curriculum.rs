//! Curriculum fixtures for creating in-memory test data.

use chrono::NaiveDate;
use entity::curriculum;

/// Default test course name.
pub const DEFAULT_COURSE_NAME: &str = "Computer Science";

/// Default curriculum start date (2024-02-01).
pub fn default_start_date() -> NaiveDate {
    NaiveDate::from_ymd_opt(2024, 2, 1).unwrap_or_default()
}

/// Default curriculum end date (2028-12-15).
pub fn default_end_date() -> NaiveDate {
    NaiveDate::from_ymd_opt(2028, 12, 15).unwrap_or_default()
}

/// Creates a curriculum entity model with default values.
///
/// # Returns
/// - `curriculum::Model` - In-memory curriculum entity
pub fn entity() -> curriculum::Model {
    entity_builder().build()
}

/// Creates a curriculum entity builder for customization.
pub fn entity_builder() -> CurriculumEntityBuilder {
    CurriculumEntityBuilder::default()
}

/// Builder for creating customized curriculum entity models.
pub struct CurriculumEntityBuilder {
    id: i32,
    course_name: String,
    start_date: NaiveDate,
    end_date: NaiveDate,
}

impl Default for CurriculumEntityBuilder {
    fn default() -> Self {
        Self {
            id: 1,
            course_name: DEFAULT_COURSE_NAME.to_string(),
            start_date: default_start_date(),
            end_date: default_end_date(),
        }
    }
}

impl CurriculumEntityBuilder {
    pub fn id(mut self, id: i32) -> Self {
        self.id = id;
        self
    }

    pub fn course_name(mut self, course_name: impl Into<String>) -> Self {
        self.course_name = course_name.into();
        self
    }

    pub fn start_date(mut self, start_date: NaiveDate) -> Self {
        self.start_date = start_date;
        self
    }

    pub fn end_date(mut self, end_date: NaiveDate) -> Self {
        self.end_date = end_date;
        self
    }

    pub fn build(self) -> curriculum::Model {
        curriculum::Model {
            id: self.id,
            course_name: self.course_name,
            start_date: self.start_date,
            end_date: self.end_date,
        }
    }
}
