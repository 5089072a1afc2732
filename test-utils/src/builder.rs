use entity::prelude::*;
use sea_orm::{sea_query::TableCreateStatement, EntityTrait, Schema};

use crate::{context::TestContext, error::TestError};

/// Builder for creating test contexts with customizable database schemas.
///
/// Provides a fluent interface for configuring test environments with in-memory SQLite
/// databases. Use the builder pattern to add entity tables, then call `build()` to
/// create the configured test context.
///
/// # Example
///
/// ```rust,ignore
/// use test_utils::builder::TestBuilder;
/// use entity::prelude::{Curriculum, Discipline, CurriculumDiscipline};
///
/// let test = TestBuilder::new()
///     .with_table(Discipline)
///     .with_table(Curriculum)
///     .with_table(CurriculumDiscipline)
///     .build()
///     .await?;
/// ```
pub struct TestBuilder {
    /// CREATE TABLE statements executed in insertion order during `build()`.
    tables: Vec<TableCreateStatement>,
}

impl TestBuilder {
    /// Creates a new test builder with no tables configured.
    ///
    /// # Returns
    /// - New `TestBuilder` instance with empty table configuration
    pub fn new() -> Self {
        Self { tables: Vec::new() }
    }

    /// Adds an entity table to the test database schema.
    ///
    /// Generates a CREATE TABLE statement from the provided SeaORM entity using SQLite
    /// backend syntax, including the foreign keys declared by its `belongs_to` relations.
    /// Tables should be added in dependency order.
    ///
    /// # Arguments
    /// - `entity` - SeaORM entity implementing `EntityTrait` to create a table for
    ///
    /// # Returns
    /// - `Self` - Builder instance for method chaining
    pub fn with_table<E: EntityTrait>(mut self, entity: E) -> Self {
        let schema = Schema::new(sea_orm::DbBackend::Sqlite);
        self.tables.push(schema.create_table_from_entity(entity));
        self
    }

    /// Adds all tables required for lecture operations.
    ///
    /// Adds, in dependency order: Building, Room, Discipline, Class, Lecture.
    ///
    /// # Returns
    /// - `Self` - Builder instance for method chaining
    pub fn with_lecture_tables(self) -> Self {
        self.with_table(Building)
            .with_table(Room)
            .with_table(Discipline)
            .with_table(Class)
            .with_table(Lecture)
    }

    /// Adds the ResourceType and Resource tables.
    ///
    /// # Returns
    /// - `Self` - Builder instance for method chaining
    pub fn with_resource_tables(self) -> Self {
        self.with_table(ResourceType).with_table(Resource)
    }

    /// Adds all tables required for reservation operations.
    ///
    /// Adds the lecture tables and the resource tables followed by Reservation and the
    /// ReservationResource join table.
    ///
    /// # Returns
    /// - `Self` - Builder instance for method chaining
    ///
    /// # Example
    ///
    /// ```rust,ignore
    /// let test = TestBuilder::new()
    ///     .with_reservation_tables()
    ///     .build()
    ///     .await?;
    /// ```
    pub fn with_reservation_tables(self) -> Self {
        self.with_lecture_tables()
            .with_resource_tables()
            .with_table(Reservation)
            .with_table(ReservationResource)
    }

    /// Adds all tables required for curriculum operations.
    ///
    /// Adds Discipline, Curriculum and the CurriculumDiscipline join table.
    ///
    /// # Returns
    /// - `Self` - Builder instance for method chaining
    pub fn with_curriculum_tables(self) -> Self {
        self.with_table(Discipline)
            .with_table(Curriculum)
            .with_table(CurriculumDiscipline)
    }

    /// Adds every table in the schema.
    ///
    /// Used by HTTP-level tests that exercise both the reservation and the curriculum
    /// routes against one database.
    ///
    /// # Returns
    /// - `Self` - Builder instance for method chaining
    pub fn with_all_tables(self) -> Self {
        self.with_reservation_tables()
            .with_table(Curriculum)
            .with_table(CurriculumDiscipline)
    }

    /// Builds and initializes the test context with configured tables.
    ///
    /// # Returns
    /// - `Ok(TestContext)` - Fully initialized test context with database and tables ready
    /// - `Err(TestError::Database)` - Failed to connect to database or create tables
    pub async fn build(self) -> Result<TestContext, TestError> {
        let mut setup = TestContext::new();

        setup.with_tables(self.tables).await?;

        Ok(setup)
    }
}

impl Default for TestBuilder {
    fn default() -> Self {
        Self::new()
    }
}
