//! Domain models and operation parameters.
//!
//! Domain structs are built from entity models at the repository boundary and
//! converted into DTOs at the controller boundary. Parameter structs carry the
//! inputs of create and update operations.

pub mod curriculum;
pub mod discipline;
pub mod reservation;
pub mod resource;
