use sea_orm::{DatabaseConnection, DbErr, SqlErr, TransactionTrait};

use crate::server::{
    data::reservation::ReservationRepository,
    error::{
        reference::{Association, ReferenceError},
        AppError, EntityKind,
    },
    model::reservation::{CreateReservationParams, Reservation, UpdateReservationParams},
};

pub struct ReservationService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> ReservationService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Creates a reservation and links each supplied resource in order.
    ///
    /// Runs in a single transaction. The first failing link aborts the whole
    /// operation and nothing is persisted.
    ///
    /// # Returns
    /// - `Ok(Reservation)` - Freshly read reservation with its resources
    /// - `Err(AppError::ReferenceErr)` - Unknown lecture or resource, or a resource listed twice
    /// - `Err(AppError::DbErr)` - Database error
    pub async fn create(&self, params: CreateReservationParams) -> Result<Reservation, AppError> {
        let txn = self.db.begin().await?;
        let repo = ReservationRepository::new(&txn);

        let reservation = repo
            .create(&params)
            .await
            .map_err(|e| lecture_reference(params.lecture_id, e))?;

        for resource_id in &params.resource_ids {
            repo.add_resource(reservation.id, *resource_id)
                .await
                .map_err(|e| resource_link(reservation.id, *resource_id).classify(e))?;
        }

        txn.commit().await?;

        ReservationRepository::new(self.db)
            .find_by_id(reservation.id)
            .await?
            .ok_or(AppError::NotFound {
                entity: EntityKind::Reservation,
                id: reservation.id,
            })
    }

    /// Gets all reservations with their resources
    pub async fn get_all(&self) -> Result<Vec<Reservation>, AppError> {
        let repo = ReservationRepository::new(self.db);

        Ok(repo.find_all().await?)
    }

    /// Gets a reservation by ID, translating absence into `NotFound`
    pub async fn get_by_id(&self, id: i32) -> Result<Reservation, AppError> {
        let repo = ReservationRepository::new(self.db);

        repo.find_by_id(id).await?.ok_or(AppError::NotFound {
            entity: EntityKind::Reservation,
            id,
        })
    }

    /// Applies a partial update and returns the fresh record
    pub async fn update(
        &self,
        id: i32,
        params: UpdateReservationParams,
    ) -> Result<Reservation, AppError> {
        let repo = ReservationRepository::new(self.db);
        let lecture_id = params.lecture_id;

        let updated = repo.update(id, params).await.map_err(|e| match lecture_id {
            Some(lecture_id) => lecture_reference(lecture_id, e),
            None => AppError::DbErr(e),
        })?;

        updated.ok_or(AppError::NotFound {
            entity: EntityKind::Reservation,
            id,
        })
    }

    /// Deletes a reservation; its resource links are removed with it
    pub async fn delete(&self, id: i32) -> Result<(), AppError> {
        let repo = ReservationRepository::new(self.db);

        let rows = repo.delete(id).await?;
        if rows == 0 {
            return Err(AppError::NotFound {
                entity: EntityKind::Reservation,
                id,
            });
        }

        Ok(())
    }

    /// Links one resource to an existing reservation.
    ///
    /// # Returns
    /// - `Ok(())` - Resource linked
    /// - `Err(AppError::NotFound)` - Reservation does not exist
    /// - `Err(AppError::ReferenceErr)` - Resource does not exist or is already linked
    /// - `Err(AppError::DbErr)` - Database error
    pub async fn add_resource(&self, reservation_id: i32, resource_id: i32) -> Result<(), AppError> {
        let txn = self.db.begin().await?;
        let repo = ReservationRepository::new(&txn);

        if !repo.exists(reservation_id).await? {
            return Err(AppError::NotFound {
                entity: EntityKind::Reservation,
                id: reservation_id,
            });
        }

        repo.add_resource(reservation_id, resource_id)
            .await
            .map_err(|e| resource_link(reservation_id, resource_id).classify(e))?;

        txn.commit().await?;

        Ok(())
    }
}

fn resource_link(reservation_id: i32, resource_id: i32) -> Association {
    Association {
        parent: EntityKind::Reservation,
        parent_id: reservation_id,
        child: EntityKind::Resource,
        child_id: resource_id,
    }
}

/// Maps a foreign key violation on the reservation row to an unknown lecture.
fn lecture_reference(lecture_id: i32, err: DbErr) -> AppError {
    match err.sql_err() {
        Some(SqlErr::ForeignKeyConstraintViolation(_)) => ReferenceError::Missing {
            entity: EntityKind::Lecture,
            id: lecture_id,
        }
        .into(),
        _ => AppError::DbErr(err),
    }
}
