//! Room factory for creating test room entities.

use crate::factory::helpers::next_id;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test rooms inside an existing building.
pub struct RoomFactory<'a> {
    db: &'a DatabaseConnection,
    building_id: i32,
    room_number: String,
    capacity: i32,
    floor: i32,
}

impl<'a> RoomFactory<'a> {
    /// Creates a new RoomFactory with default values.
    ///
    /// Defaults:
    /// - room_number: `"R{id}"` where id is auto-incremented
    /// - capacity: `40`
    /// - floor: `1`
    ///
    /// # Arguments
    /// - `db` - Database connection for inserting the entity
    /// - `building_id` - Building the room belongs to
    pub fn new(db: &'a DatabaseConnection, building_id: i32) -> Self {
        Self {
            db,
            building_id,
            room_number: format!("R{}", next_id()),
            capacity: 40,
            floor: 1,
        }
    }

    pub fn room_number(mut self, room_number: impl Into<String>) -> Self {
        self.room_number = room_number.into();
        self
    }

    pub fn capacity(mut self, capacity: i32) -> Self {
        self.capacity = capacity;
        self
    }

    pub fn floor(mut self, floor: i32) -> Self {
        self.floor = floor;
        self
    }

    /// Builds and inserts the room entity into the database.
    pub async fn build(self) -> Result<entity::room::Model, DbErr> {
        entity::room::ActiveModel {
            building_id: ActiveValue::Set(self.building_id),
            room_number: ActiveValue::Set(self.room_number),
            capacity: ActiveValue::Set(self.capacity),
            floor: ActiveValue::Set(self.floor),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

/// Creates a room with default values in the given building.
pub async fn create_room(
    db: &DatabaseConnection,
    building_id: i32,
) -> Result<entity::room::Model, DbErr> {
    RoomFactory::new(db, building_id).build().await
}
