//! Building factory for creating test building entities.

use crate::factory::helpers::next_id;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test buildings with customizable fields.
pub struct BuildingFactory<'a> {
    db: &'a DatabaseConnection,
    name: String,
    address: String,
}

impl<'a> BuildingFactory<'a> {
    /// Creates a new BuildingFactory with default values.
    ///
    /// Defaults:
    /// - name: `"Building {id}"` where id is auto-incremented
    /// - address: `"{id} Campus Road"`
    pub fn new(db: &'a DatabaseConnection) -> Self {
        let id = next_id();
        Self {
            db,
            name: format!("Building {}", id),
            address: format!("{} Campus Road", id),
        }
    }

    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    pub fn address(mut self, address: impl Into<String>) -> Self {
        self.address = address.into();
        self
    }

    /// Builds and inserts the building entity into the database.
    ///
    /// # Returns
    /// - `Ok(entity::building::Model)` - Created building entity
    /// - `Err(DbErr)` - Database error during insert
    pub async fn build(self) -> Result<entity::building::Model, DbErr> {
        entity::building::ActiveModel {
            name: ActiveValue::Set(self.name),
            address: ActiveValue::Set(self.address),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

/// Creates a building with default values.
pub async fn create_building(db: &DatabaseConnection) -> Result<entity::building::Model, DbErr> {
    BuildingFactory::new(db).build().await
}
