//! Shared helper utilities for factory methods.
//!
//! Provides ID generation and convenience methods for creating entities together
//! with the rows their foreign keys point at.

use sea_orm::{DatabaseConnection, DbErr};

/// Counter for generating unique values in tests.
static COUNTER: std::sync::atomic::AtomicU64 = std::sync::atomic::AtomicU64::new(1);

/// Gets the next unique counter value for test data.
///
/// # Returns
/// - `u64` - Next unique counter value
pub fn next_id() -> u64 {
    COUNTER.fetch_add(1, std::sync::atomic::Ordering::SeqCst)
}

/// Creates a lecture together with every row it depends on.
///
/// This is a convenience method that creates:
/// 1. Building
/// 2. Room in that building
/// 3. Discipline
/// 4. Class for that discipline
/// 5. Lecture for the class, held in the room
///
/// # Arguments
/// - `db` - Database connection
///
/// # Returns
/// - `Ok((building, room, discipline, class, lecture))` - Tuple of all created entities
/// - `Err(DbErr)` - Database error during creation
pub async fn create_lecture_with_dependencies(
    db: &DatabaseConnection,
) -> Result<
    (
        entity::building::Model,
        entity::room::Model,
        entity::discipline::Model,
        entity::class::Model,
        entity::lecture::Model,
    ),
    DbErr,
> {
    let building = crate::factory::building::create_building(db).await?;
    let room = crate::factory::room::create_room(db, building.id).await?;
    let discipline = crate::factory::discipline::create_discipline(db).await?;
    let class = crate::factory::class::create_class(db, discipline.id).await?;
    let lecture = crate::factory::lecture::create_lecture(db, class.id, room.id).await?;

    Ok((building, room, discipline, class, lecture))
}

/// Creates `count` resources sharing one freshly created resource type.
///
/// # Arguments
/// - `db` - Database connection
/// - `count` - Number of resources to create
///
/// # Returns
/// - `Ok((resource_type, resources))` - The type and the resources in creation order
/// - `Err(DbErr)` - Database error during creation
pub async fn create_resources(
    db: &DatabaseConnection,
    count: usize,
) -> Result<(entity::resource_type::Model, Vec<entity::resource::Model>), DbErr> {
    let resource_type = crate::factory::resource_type::create_resource_type(db).await?;

    let mut resources = Vec::with_capacity(count);
    for _ in 0..count {
        resources.push(crate::factory::resource::create_resource(db, resource_type.id).await?);
    }

    Ok((resource_type, resources))
}

/// Creates a reservation for a new lecture, with all lecture dependencies.
///
/// # Returns
/// - `Ok((lecture, reservation))` - The lecture and the reservation bound to it
/// - `Err(DbErr)` - Database error during creation
pub async fn create_reservation_with_dependencies(
    db: &DatabaseConnection,
) -> Result<(entity::lecture::Model, entity::reservation::Model), DbErr> {
    let (_, _, _, _, lecture) = create_lecture_with_dependencies(db).await?;
    let reservation = crate::factory::reservation::create_reservation(db, lecture.id).await?;

    Ok((lecture, reservation))
}
