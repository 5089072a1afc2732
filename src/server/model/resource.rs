//! Resource domain model and parameters.
//!
//! Resources are managed through their own CRUD surface and are read as members
//! of a reservation's resource set.

use entity::resource::ResourceStatus;

use crate::model::resource::{
    CreateResourceDto, ResourceDto, ResourceStatusDto, UpdateResourceDto,
};

/// Bookable item such as a projector, with its availability and free-form traits.
#[derive(Debug, Clone, PartialEq)]
pub struct Resource {
    pub id: i32,
    pub description: String,
    pub status: ResourceStatus,
    /// Ordered characteristics, e.g. `["HDMI", "1080p"]`.
    pub characteristics: Vec<String>,
    pub resource_type_id: i32,
}

impl Resource {
    /// Converts an entity model to a resource domain model at the repository boundary.
    pub fn from_entity(entity: entity::resource::Model) -> Self {
        Self {
            id: entity.id,
            description: entity.description,
            status: entity.status,
            characteristics: entity.characteristics.into(),
            resource_type_id: entity.resource_type_id,
        }
    }

    /// Converts the resource domain model to a DTO for API responses.
    pub fn into_dto(self) -> ResourceDto {
        ResourceDto {
            resource_id: self.id,
            description: self.description,
            status: status_to_dto(self.status),
            characteristics: self.characteristics,
            resource_type_id: self.resource_type_id,
        }
    }
}

/// Parameters for creating a resource.
#[derive(Debug, Clone)]
pub struct CreateResourceParams {
    pub description: String,
    pub status: ResourceStatus,
    pub characteristics: Vec<String>,
    pub resource_type_id: i32,
}

impl CreateResourceParams {
    pub fn from_dto(dto: CreateResourceDto) -> Self {
        Self {
            description: dto.description,
            status: status_from_dto(dto.status),
            characteristics: dto.characteristics,
            resource_type_id: dto.resource_type_id,
        }
    }
}

/// Parameters for a partial resource update.
///
/// `None` leaves the stored value unchanged. A supplied characteristics list
/// replaces the stored one as a whole.
#[derive(Debug, Clone, Default)]
pub struct UpdateResourceParams {
    pub description: Option<String>,
    pub status: Option<ResourceStatus>,
    pub characteristics: Option<Vec<String>>,
    pub resource_type_id: Option<i32>,
}

impl UpdateResourceParams {
    pub fn from_dto(dto: UpdateResourceDto) -> Self {
        Self {
            description: dto.description,
            status: dto.status.map(status_from_dto),
            characteristics: dto.characteristics,
            resource_type_id: dto.resource_type_id,
        }
    }

    /// Returns true when no field would be written.
    pub fn is_empty(&self) -> bool {
        self.description.is_none()
            && self.status.is_none()
            && self.characteristics.is_none()
            && self.resource_type_id.is_none()
    }
}

fn status_to_dto(status: ResourceStatus) -> ResourceStatusDto {
    match status {
        ResourceStatus::Available => ResourceStatusDto::Available,
        ResourceStatus::Unavailable => ResourceStatusDto::Unavailable,
        ResourceStatus::Reserved => ResourceStatusDto::Reserved,
    }
}

fn status_from_dto(status: ResourceStatusDto) -> ResourceStatus {
    match status {
        ResourceStatusDto::Available => ResourceStatus::Available,
        ResourceStatusDto::Unavailable => ResourceStatus::Unavailable,
        ResourceStatusDto::Reserved => ResourceStatus::Reserved,
    }
}
