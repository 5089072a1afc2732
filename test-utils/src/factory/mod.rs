//! Factory methods for creating test data.
//!
//! Factories insert entities with sensible defaults, reducing boilerplate in tests.
//! Each entity has its own factory module with a `Factory` struct for customization
//! and a `create_*` convenience function for quick default creation.
//!
//! # Basic Usage
//!
//! ```rust,ignore
//! use test_utils::factory;
//!
//! // Create with defaults
//! let discipline = factory::discipline::create_discipline(&db).await?;
//!
//! // Create with all dependencies
//! let (building, room, discipline, class, lecture) =
//!     factory::helpers::create_lecture_with_dependencies(&db).await?;
//! ```
//!
//! # Customization
//!
//! ```rust,ignore
//! let resource = factory::resource::ResourceFactory::new(&db, resource_type.id)
//!     .description("Microscope")
//!     .status(ResourceStatus::Unavailable)
//!     .build()
//!     .await?;
//! ```

pub mod building;
pub mod class;
pub mod curriculum;
pub mod discipline;
pub mod helpers;
pub mod lecture;
pub mod reservation;
pub mod resource;
pub mod resource_type;
pub mod room;

// Re-export commonly used factory functions for concise usage
pub use building::create_building;
pub use class::create_class;
pub use curriculum::{create_curriculum, link_discipline};
pub use discipline::create_discipline;
pub use lecture::create_lecture;
pub use reservation::{create_reservation, link_resource};
pub use resource::create_resource;
pub use resource_type::create_resource_type;
pub use room::create_room;
