//! Resource type factory.

use crate::factory::helpers::next_id;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Creates a resource type named `"Type {id}"`.
pub async fn create_resource_type(
    db: &DatabaseConnection,
) -> Result<entity::resource_type::Model, DbErr> {
    entity::resource_type::ActiveModel {
        name: ActiveValue::Set(format!("Type {}", next_id())),
        ..Default::default()
    }
    .insert(db)
    .await
}
