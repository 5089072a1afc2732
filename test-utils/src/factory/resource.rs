//! Resource factory for creating test resource entities.
//!
//! Default values are sourced from the resource fixture.

use crate::factory::helpers::next_id;
use crate::fixture;
use entity::resource::ResourceStatus;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test resources with customizable fields.
///
/// # Example
///
/// ```rust,ignore
/// let resource = ResourceFactory::new(&db, resource_type.id)
///     .description("Microscope")
///     .characteristics(vec!["40x".to_string()])
///     .build()
///     .await?;
/// ```
pub struct ResourceFactory<'a> {
    db: &'a DatabaseConnection,
    entity: entity::resource::Model,
}

impl<'a> ResourceFactory<'a> {
    /// Creates a new ResourceFactory with fixture defaults and a unique description.
    ///
    /// # Arguments
    /// - `db` - Database connection for inserting the entity
    /// - `resource_type_id` - Resource type the resource belongs to
    pub fn new(db: &'a DatabaseConnection, resource_type_id: i32) -> Self {
        let entity = fixture::resource::entity_builder()
            .resource_type_id(resource_type_id)
            .description(format!("Resource {}", next_id()))
            .build();

        Self { db, entity }
    }

    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.entity.description = description.into();
        self
    }

    pub fn status(mut self, status: ResourceStatus) -> Self {
        self.entity.status = status;
        self
    }

    pub fn characteristics(mut self, characteristics: Vec<String>) -> Self {
        self.entity.characteristics = characteristics.into();
        self
    }

    /// Builds and inserts the resource entity into the database.
    ///
    /// # Returns
    /// - `Ok(entity::resource::Model)` - Created resource entity
    /// - `Err(DbErr)` - Database error during insert
    pub async fn build(self) -> Result<entity::resource::Model, DbErr> {
        entity::resource::ActiveModel {
            id: ActiveValue::NotSet,
            resource_type_id: ActiveValue::Set(self.entity.resource_type_id),
            description: ActiveValue::Set(self.entity.description),
            status: ActiveValue::Set(self.entity.status),
            characteristics: ActiveValue::Set(self.entity.characteristics),
        }
        .insert(self.db)
        .await
    }
}

/// Creates a resource with default values for the given resource type.
pub async fn create_resource(
    db: &DatabaseConnection,
    resource_type_id: i32,
) -> Result<entity::resource::Model, DbErr> {
    ResourceFactory::new(db, resource_type_id).build().await
}
