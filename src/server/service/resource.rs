use sea_orm::{DatabaseConnection, DbErr, SqlErr};

use crate::server::{
    data::resource::ResourceRepository,
    error::{reference::ReferenceError, AppError, EntityKind},
    model::resource::{CreateResourceParams, Resource, UpdateResourceParams},
};

pub struct ResourceService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> ResourceService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Creates a resource.
    ///
    /// # Returns
    /// - `Ok(Resource)` - Created resource with its generated id
    /// - `Err(AppError::ReferenceErr)` - Unknown resource type
    /// - `Err(AppError::DbErr)` - Database error
    pub async fn create(&self, params: CreateResourceParams) -> Result<Resource, AppError> {
        let repo = ResourceRepository::new(self.db);
        let resource_type_id = params.resource_type_id;

        repo.create(params)
            .await
            .map_err(|e| resource_type_reference(resource_type_id, e))
    }

    /// Gets all resources
    pub async fn get_all(&self) -> Result<Vec<Resource>, AppError> {
        let repo = ResourceRepository::new(self.db);

        Ok(repo.find_all().await?)
    }

    /// Gets a resource by ID, translating absence into `NotFound`
    pub async fn get_by_id(&self, id: i32) -> Result<Resource, AppError> {
        let repo = ResourceRepository::new(self.db);

        repo.find_by_id(id).await?.ok_or(AppError::NotFound {
            entity: EntityKind::Resource,
            id,
        })
    }

    /// Applies a partial update and returns the fresh record
    pub async fn update(&self, id: i32, params: UpdateResourceParams) -> Result<Resource, AppError> {
        let repo = ResourceRepository::new(self.db);
        let resource_type_id = params.resource_type_id;

        let updated = repo
            .update(id, params)
            .await
            .map_err(|e| match resource_type_id {
                Some(resource_type_id) => resource_type_reference(resource_type_id, e),
                None => AppError::DbErr(e),
            })?;

        updated.ok_or(AppError::NotFound {
            entity: EntityKind::Resource,
            id,
        })
    }

    /// Deletes a resource.
    ///
    /// # Returns
    /// - `Ok(())` - Resource removed
    /// - `Err(AppError::NotFound)` - Resource does not exist
    /// - `Err(AppError::ReferenceErr)` - Resource is still linked to a reservation
    /// - `Err(AppError::DbErr)` - Database error
    pub async fn delete(&self, id: i32) -> Result<(), AppError> {
        let repo = ResourceRepository::new(self.db);

        let rows = repo.delete(id).await.map_err(|e| match e.sql_err() {
            Some(SqlErr::ForeignKeyConstraintViolation(_)) => ReferenceError::InUse {
                entity: EntityKind::Resource,
                id,
            }
            .into(),
            _ => AppError::DbErr(e),
        })?;

        if rows == 0 {
            return Err(AppError::NotFound {
                entity: EntityKind::Resource,
                id,
            });
        }

        Ok(())
    }
}

/// Maps a foreign key violation on the resource row to an unknown resource type.
fn resource_type_reference(resource_type_id: i32, err: DbErr) -> AppError {
    match err.sql_err() {
        Some(SqlErr::ForeignKeyConstraintViolation(_)) => ReferenceError::Missing {
            entity: EntityKind::ResourceType,
            id: resource_type_id,
        }
        .into(),
        _ => AppError::DbErr(err),
    }
}
