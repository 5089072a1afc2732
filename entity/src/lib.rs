//! SeaORM entity definitions for the facility-scheduling store.
//!
//! Each module mirrors one table. The two join tables (`reservation_resources`,
//! `curriculum_disciplines`) carry composite primary keys and are wired into the
//! parent entities through `Related::via` so the repositories can fetch a parent's
//! children with a single joined query.

pub mod prelude;

pub mod building;
pub mod class;
pub mod curriculum;
pub mod curriculum_discipline;
pub mod discipline;
pub mod lecture;
pub mod reservation;
pub mod reservation_resource;
pub mod resource;
pub mod resource_type;
pub mod room;
pub mod text_list;
