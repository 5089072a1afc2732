//! Service layer for business logic and orchestration.
//!
//! Services sit between the controller layer and the repositories. They translate
//! a repository's "absent" result into `AppError::NotFound`, wrap the
//! parent-plus-associations writes in a transaction, and classify key constraint
//! violations on join rows.

pub mod curriculum;
pub mod reservation;
pub mod resource;
