//! Test fixtures providing reusable test data without database insertion.
//!
//! Fixture functions create in-memory entity models for use in unit tests and as
//! default values for factories. Unlike factories, fixtures do NOT insert data into
//! the database.
//!
//! # Example
//!
//! ```rust,ignore
//! use test_utils::fixture;
//!
//! // Create in-memory entity model (no DB)
//! let resource = fixture::resource::entity();
//!
//! // Create with custom fields
//! let projector = fixture::resource::entity_builder()
//!     .description("Projector")
//!     .build();
//! ```

pub mod curriculum;
pub mod discipline;
pub mod resource;

pub use curriculum::{entity as curriculum_entity, entity_builder as curriculum_entity_builder};
pub use discipline::{entity as discipline_entity, entity_builder as discipline_entity_builder};
pub use resource::{entity as resource_entity, entity_builder as resource_entity_builder};
