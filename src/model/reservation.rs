use serde::{Deserialize, Serialize};

use crate::model::resource::{ResourceDto, ResourceRefDto};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReservationDto {
    pub reservation_id: i32,
    pub lecture_id: i32,
    pub observation: String,
    pub resources: Vec<ResourceDto>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateReservationDto {
    pub lecture_id: i32,
    #[serde(default)]
    pub observation: String,
    #[serde(default)]
    pub resources: Vec<ResourceRefDto>,
}

/// Partial update; absent fields are left unchanged.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateReservationDto {
    #[serde(default)]
    pub lecture_id: Option<i32>,
    #[serde(default)]
    pub observation: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AddResourceDto {
    pub resource_id: i32,
}
