//! Database repository layer.
//!
//! Repositories own all query construction, including every read and write of the
//! join tables. They work with SeaORM entity models internally and return domain
//! models, passing raw `DbErr` values upward unmodified.

pub mod curriculum;
pub mod reservation;
pub mod resource;

#[cfg(test)]
mod test;
