//! Reservation factory for creating test reservations and their resource links.

use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test reservations bound to an existing lecture.
pub struct ReservationFactory<'a> {
    db: &'a DatabaseConnection,
    lecture_id: i32,
    observation: String,
}

impl<'a> ReservationFactory<'a> {
    /// Creates a new ReservationFactory with an empty observation.
    pub fn new(db: &'a DatabaseConnection, lecture_id: i32) -> Self {
        Self {
            db,
            lecture_id,
            observation: String::new(),
        }
    }

    pub fn observation(mut self, observation: impl Into<String>) -> Self {
        self.observation = observation.into();
        self
    }

    /// Builds and inserts the reservation entity into the database.
    pub async fn build(self) -> Result<entity::reservation::Model, DbErr> {
        entity::reservation::ActiveModel {
            lecture_id: ActiveValue::Set(self.lecture_id),
            observation: ActiveValue::Set(self.observation),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

/// Creates a reservation with default values for the given lecture.
pub async fn create_reservation(
    db: &DatabaseConnection,
    lecture_id: i32,
) -> Result<entity::reservation::Model, DbErr> {
    ReservationFactory::new(db, lecture_id).build().await
}

/// Inserts a `reservation_resources` row linking a reservation to a resource.
///
/// # Returns
/// - `Ok(entity::reservation_resource::Model)` - Created join row
/// - `Err(DbErr)` - Duplicate pair or unknown identity
pub async fn link_resource(
    db: &DatabaseConnection,
    reservation_id: i32,
    resource_id: i32,
) -> Result<entity::reservation_resource::Model, DbErr> {
    entity::reservation_resource::ActiveModel {
        reservation_id: ActiveValue::Set(reservation_id),
        resource_id: ActiveValue::Set(resource_id),
    }
    .insert(db)
    .await
}
