use sea_orm::{ActiveModelTrait, ActiveValue, ConnectionTrait, DbErr, EntityTrait, QueryOrder};

use crate::server::model::resource::{CreateResourceParams, Resource, UpdateResourceParams};

/// Data access for the `resources` table.
pub struct ResourceRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> ResourceRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Inserts a resource and returns it with its generated id.
    ///
    /// Fails with a foreign key violation if the resource type does not exist.
    pub async fn create(&self, params: CreateResourceParams) -> Result<Resource, DbErr> {
        let resource = entity::resource::ActiveModel {
            resource_type_id: ActiveValue::Set(params.resource_type_id),
            description: ActiveValue::Set(params.description),
            status: ActiveValue::Set(params.status),
            characteristics: ActiveValue::Set(params.characteristics.into()),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Ok(Resource::from_entity(resource))
    }

    /// Gets a resource by ID.
    ///
    /// # Returns
    /// - `Ok(Some(Resource))` - Resource found
    /// - `Ok(None)` - No resource with that id
    /// - `Err(DbErr)` - Database error
    pub async fn find_by_id(&self, id: i32) -> Result<Option<Resource>, DbErr> {
        let resource = entity::prelude::Resource::find_by_id(id)
            .one(self.db)
            .await?;

        Ok(resource.map(Resource::from_entity))
    }

    /// Gets all resources ordered by id.
    pub async fn find_all(&self) -> Result<Vec<Resource>, DbErr> {
        let resources = entity::prelude::Resource::find()
            .order_by_asc(entity::resource::Column::Id)
            .all(self.db)
            .await?;

        Ok(resources.into_iter().map(Resource::from_entity).collect())
    }

    /// Overwrites the supplied fields and returns the fresh record.
    ///
    /// # Returns
    /// - `Ok(Some(Resource))` - Updated resource
    /// - `Ok(None)` - No resource with that id
    /// - `Err(DbErr)` - Database error
    pub async fn update(
        &self,
        id: i32,
        params: UpdateResourceParams,
    ) -> Result<Option<Resource>, DbErr> {
        let Some(resource) = entity::prelude::Resource::find_by_id(id)
            .one(self.db)
            .await?
        else {
            return Ok(None);
        };

        if params.is_empty() {
            return Ok(Some(Resource::from_entity(resource)));
        }

        let mut active: entity::resource::ActiveModel = resource.into();

        if let Some(description) = params.description {
            active.description = ActiveValue::Set(description);
        }
        if let Some(status) = params.status {
            active.status = ActiveValue::Set(status);
        }
        if let Some(characteristics) = params.characteristics {
            active.characteristics = ActiveValue::Set(characteristics.into());
        }
        if let Some(resource_type_id) = params.resource_type_id {
            active.resource_type_id = ActiveValue::Set(resource_type_id);
        }

        let updated = active.update(self.db).await?;

        Ok(Some(Resource::from_entity(updated)))
    }

    /// Deletes a resource, returning the number of rows removed.
    ///
    /// Fails with a foreign key violation while any reservation still links it.
    pub async fn delete(&self, id: i32) -> Result<u64, DbErr> {
        let result = entity::prelude::Resource::delete_by_id(id)
            .exec(self.db)
            .await?;

        Ok(result.rows_affected)
    }
}
