//! Class factory for creating test class entities.

use crate::factory::helpers::next_id;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Creates a class for the given discipline with default values.
///
/// # Arguments
/// - `db` - Database connection
/// - `discipline_id` - Discipline the class teaches
///
/// # Returns
/// - `Ok(entity::class::Model)` - Created class entity
/// - `Err(DbErr)` - Database error during insert
pub async fn create_class(
    db: &DatabaseConnection,
    discipline_id: i32,
) -> Result<entity::class::Model, DbErr> {
    let id = next_id();
    entity::class::ActiveModel {
        discipline_id: ActiveValue::Set(discipline_id),
        name: ActiveValue::Set(format!("Class {}", id)),
        description: ActiveValue::Set(format!("Class {} description", id)),
        ..Default::default()
    }
    .insert(db)
    .await
}
