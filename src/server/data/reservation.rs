use sea_orm::{
    ActiveModelTrait, ActiveValue, ConnectionTrait, DbErr, EntityTrait, ModelTrait,
    PaginatorTrait, QueryOrder,
};

use crate::server::model::reservation::{
    CreateReservationParams, Reservation, UpdateReservationParams,
};

/// Data access for reservations and the `reservation_resources` join table.
///
/// Generic over the connection so the same queries run against the pool or
/// inside an open transaction.
pub struct ReservationRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> ReservationRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Inserts the reservation row and returns it with its generated id.
    ///
    /// Only the scalar fields are written; `params.resource_ids` is left to the
    /// caller, which links each one through `add_resource`.
    pub async fn create(&self, params: &CreateReservationParams) -> Result<Reservation, DbErr> {
        let reservation = entity::reservation::ActiveModel {
            lecture_id: ActiveValue::Set(params.lecture_id),
            observation: ActiveValue::Set(params.observation.clone()),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Ok(Reservation::from_entity(reservation, Vec::new()))
    }

    /// Gets a reservation by ID together with every resource linked to it.
    ///
    /// # Returns
    /// - `Ok(Some(Reservation))` - Reservation found
    /// - `Ok(None)` - No reservation with that id
    /// - `Err(DbErr)` - Database error
    pub async fn find_by_id(&self, id: i32) -> Result<Option<Reservation>, DbErr> {
        let Some(reservation) = entity::prelude::Reservation::find_by_id(id)
            .one(self.db)
            .await?
        else {
            return Ok(None);
        };

        let resources = reservation
            .find_related(entity::prelude::Resource)
            .all(self.db)
            .await?;

        Ok(Some(Reservation::from_entity(reservation, resources)))
    }

    /// Gets all reservations ordered by id, each with its resources.
    ///
    /// Issues one resource query per reservation.
    pub async fn find_all(&self) -> Result<Vec<Reservation>, DbErr> {
        let reservations = entity::prelude::Reservation::find()
            .order_by_asc(entity::reservation::Column::Id)
            .all(self.db)
            .await?;

        let mut result = Vec::with_capacity(reservations.len());
        for reservation in reservations {
            let resources = reservation
                .find_related(entity::prelude::Resource)
                .all(self.db)
                .await?;
            result.push(Reservation::from_entity(reservation, resources));
        }

        Ok(result)
    }

    /// Overwrites the supplied scalar fields and returns the fresh record.
    ///
    /// Resource links are never modified.
    ///
    /// # Returns
    /// - `Ok(Some(Reservation))` - Updated reservation
    /// - `Ok(None)` - No reservation with that id
    /// - `Err(DbErr)` - Database error
    pub async fn update(
        &self,
        id: i32,
        params: UpdateReservationParams,
    ) -> Result<Option<Reservation>, DbErr> {
        let Some(reservation) = entity::prelude::Reservation::find_by_id(id)
            .one(self.db)
            .await?
        else {
            return Ok(None);
        };

        if !params.is_empty() {
            let mut active: entity::reservation::ActiveModel = reservation.into();

            if let Some(lecture_id) = params.lecture_id {
                active.lecture_id = ActiveValue::Set(lecture_id);
            }
            if let Some(observation) = params.observation {
                active.observation = ActiveValue::Set(observation);
            }

            active.update(self.db).await?;
        }

        self.find_by_id(id).await
    }

    /// Deletes a reservation, returning the number of rows removed.
    ///
    /// Its `reservation_resources` rows go with it through the cascading foreign key.
    pub async fn delete(&self, id: i32) -> Result<u64, DbErr> {
        let result = entity::prelude::Reservation::delete_by_id(id)
            .exec(self.db)
            .await?;

        Ok(result.rows_affected)
    }

    /// Links a resource to a reservation.
    ///
    /// Fails with a unique constraint violation if the pair is already linked, or a
    /// foreign key violation if either id does not exist. The join table is unchanged
    /// on failure.
    pub async fn add_resource(&self, reservation_id: i32, resource_id: i32) -> Result<(), DbErr> {
        let link = entity::reservation_resource::ActiveModel {
            reservation_id: ActiveValue::Set(reservation_id),
            resource_id: ActiveValue::Set(resource_id),
        };

        entity::prelude::ReservationResource::insert(link)
            .exec_without_returning(self.db)
            .await?;

        Ok(())
    }

    /// Checks whether a reservation with the given id exists.
    pub async fn exists(&self, id: i32) -> Result<bool, DbErr> {
        let count = entity::prelude::Reservation::find_by_id(id)
            .count(self.db)
            .await?;

        Ok(count > 0)
    }
}
