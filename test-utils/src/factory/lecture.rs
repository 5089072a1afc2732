//! Lecture factory for creating test lecture entities.

use chrono::NaiveDate;
use entity::text_list::TextList;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test lectures bound to a class and a room.
pub struct LectureFactory<'a> {
    db: &'a DatabaseConnection,
    class_id: i32,
    room_id: i32,
    date: NaiveDate,
    content: Vec<String>,
}

impl<'a> LectureFactory<'a> {
    /// Creates a new LectureFactory with default values.
    ///
    /// Defaults:
    /// - date: `2024-03-04`
    /// - content: `["Introduction"]`
    pub fn new(db: &'a DatabaseConnection, class_id: i32, room_id: i32) -> Self {
        Self {
            db,
            class_id,
            room_id,
            date: NaiveDate::from_ymd_opt(2024, 3, 4).unwrap_or_default(),
            content: vec!["Introduction".to_string()],
        }
    }

    pub fn date(mut self, date: NaiveDate) -> Self {
        self.date = date;
        self
    }

    pub fn content(mut self, content: Vec<String>) -> Self {
        self.content = content;
        self
    }

    /// Builds and inserts the lecture entity into the database.
    pub async fn build(self) -> Result<entity::lecture::Model, DbErr> {
        entity::lecture::ActiveModel {
            class_id: ActiveValue::Set(self.class_id),
            room_id: ActiveValue::Set(self.room_id),
            date: ActiveValue::Set(self.date),
            content: ActiveValue::Set(TextList(self.content)),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

/// Creates a lecture with default values.
pub async fn create_lecture(
    db: &DatabaseConnection,
    class_id: i32,
    room_id: i32,
) -> Result<entity::lecture::Model, DbErr> {
    LectureFactory::new(db, class_id, room_id).build().await
}
