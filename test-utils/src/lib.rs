//! Test utilities for the facility-scheduling backend.
//!
//! Provides shared testing utilities for building integration and unit tests. This crate
//! offers a builder pattern for creating test contexts with in-memory SQLite databases
//! whose tables are generated straight from the SeaORM entities.
//!
//! # Overview
//!
//! - **TestBuilder**: Fluent builder for configuring test environments
//! - **TestContext**: Test environment containing the database connection
//! - **TestError**: Error types that can occur during test setup
//! - **fixture**: In-memory entity models with sensible defaults (no database)
//! - **factory**: Inserted entity rows with unique defaults and dependency helpers
//!
//! # Usage
//!
//! ```rust,ignore
//! use test_utils::{builder::TestBuilder, factory};
//!
//! #[tokio::test]
//! async fn reservation_operations() -> Result<(), sea_orm::DbErr> {
//!     let test = TestBuilder::new()
//!         .with_reservation_tables()
//!         .build()
//!         .await
//!         .unwrap();
//!     let db = test.db.as_ref().unwrap();
//!
//!     let (_, _, _, _, lecture) = factory::helpers::create_lecture_with_dependencies(db).await?;
//!     // Perform database operations...
//!
//!     Ok(())
//! }
//! ```

pub mod builder;
pub mod context;
pub mod error;
pub mod factory;
pub mod fixture;
