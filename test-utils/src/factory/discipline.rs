//! Discipline factory for creating test discipline entities.
//!
//! Default values are sourced from the discipline fixture.

use crate::factory::helpers::next_id;
use crate::fixture;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test disciplines with customizable fields.
///
/// # Example
///
/// ```rust,ignore
/// let discipline = DisciplineFactory::new(&db)
///     .name("Compilers")
///     .credits(6)
///     .build()
///     .await?;
/// ```
pub struct DisciplineFactory<'a> {
    db: &'a DatabaseConnection,
    entity: entity::discipline::Model,
}

impl<'a> DisciplineFactory<'a> {
    /// Creates a new DisciplineFactory with fixture defaults and a unique name.
    pub fn new(db: &'a DatabaseConnection) -> Self {
        let entity = fixture::discipline::entity_builder()
            .name(format!("Discipline {}", next_id()))
            .build();

        Self { db, entity }
    }

    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.entity.name = name.into();
        self
    }

    pub fn credits(mut self, credits: i32) -> Self {
        self.entity.credits = credits;
        self
    }

    pub fn program(mut self, program: impl Into<String>) -> Self {
        self.entity.program = program.into();
        self
    }

    pub fn bibliography(mut self, bibliography: Vec<String>) -> Self {
        self.entity.bibliography = bibliography.into();
        self
    }

    /// Builds and inserts the discipline entity into the database.
    ///
    /// # Returns
    /// - `Ok(entity::discipline::Model)` - Created discipline entity
    /// - `Err(DbErr)` - Database error during insert
    pub async fn build(self) -> Result<entity::discipline::Model, DbErr> {
        entity::discipline::ActiveModel {
            id: ActiveValue::NotSet,
            name: ActiveValue::Set(self.entity.name),
            credits: ActiveValue::Set(self.entity.credits),
            program: ActiveValue::Set(self.entity.program),
            bibliography: ActiveValue::Set(self.entity.bibliography),
        }
        .insert(self.db)
        .await
    }
}

/// Creates a discipline with default values.
pub async fn create_discipline(
    db: &DatabaseConnection,
) -> Result<entity::discipline::Model, DbErr> {
    DisciplineFactory::new(db).build().await
}
