//! Reservation domain models and parameters.
//!
//! A reservation binds exactly one lecture to a set of resources. The resources are
//! not owned by the reservation; membership is recorded in the
//! `reservation_resources` join table and is always read fresh from the store.

use crate::{
    model::reservation::{CreateReservationDto, ReservationDto, UpdateReservationDto},
    server::model::resource::Resource,
};

/// Reservation with its full resource set.
#[derive(Debug, Clone, PartialEq)]
pub struct Reservation {
    pub id: i32,
    pub lecture_id: i32,
    pub observation: String,
    /// Associated resources, in no guaranteed order.
    pub resources: Vec<Resource>,
}

impl Reservation {
    /// Converts entity models to a domain model at the repository boundary.
    ///
    /// # Arguments
    /// - `entity` - The reservation row
    /// - `resources` - Resource rows reached through the join table
    pub fn from_entity(
        entity: entity::reservation::Model,
        resources: Vec<entity::resource::Model>,
    ) -> Self {
        Self {
            id: entity.id,
            lecture_id: entity.lecture_id,
            observation: entity.observation,
            resources: resources.into_iter().map(Resource::from_entity).collect(),
        }
    }

    /// Converts the reservation domain model to a DTO for API responses.
    pub fn into_dto(self) -> ReservationDto {
        ReservationDto {
            reservation_id: self.id,
            lecture_id: self.lecture_id,
            observation: self.observation,
            resources: self.resources.into_iter().map(Resource::into_dto).collect(),
        }
    }
}

/// Parameters for creating a reservation and its initial resource set.
#[derive(Debug, Clone)]
pub struct CreateReservationParams {
    pub lecture_id: i32,
    pub observation: String,
    /// Resource identities to associate, in the order they are linked.
    pub resource_ids: Vec<i32>,
}

impl CreateReservationParams {
    /// Converts a request DTO, keeping only the identity of each supplied resource.
    pub fn from_dto(dto: CreateReservationDto) -> Self {
        Self {
            lecture_id: dto.lecture_id,
            observation: dto.observation,
            resource_ids: dto.resources.into_iter().map(|r| r.resource_id).collect(),
        }
    }
}

/// Parameters for a partial reservation update.
///
/// `None` leaves the stored value unchanged. Associations are never touched.
#[derive(Debug, Clone, Default)]
pub struct UpdateReservationParams {
    pub lecture_id: Option<i32>,
    pub observation: Option<String>,
}

impl UpdateReservationParams {
    pub fn from_dto(dto: UpdateReservationDto) -> Self {
        Self {
            lecture_id: dto.lecture_id,
            observation: dto.observation,
        }
    }

    /// Returns true when no field would be written.
    pub fn is_empty(&self) -> bool {
        self.lecture_id.is_none() && self.observation.is_none()
    }
}
