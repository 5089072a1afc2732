use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ResourceStatusDto {
    #[default]
    Available,
    Unavailable,
    Reserved,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResourceDto {
    pub resource_id: i32,
    pub description: String,
    pub status: ResourceStatusDto,
    pub characteristics: Vec<String>,
    pub resource_type_id: i32,
}

/// Resource reference inside a reservation write.
///
/// Only the identity is consumed; any other resource fields sent by the client
/// are ignored.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResourceRefDto {
    pub resource_id: i32,
}

/// Body of `POST /resources`.
///
/// A `resourceId` sent by the client is ignored; the store assigns the identity.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateResourceDto {
    pub description: String,
    #[serde(default)]
    pub status: ResourceStatusDto,
    #[serde(default)]
    pub characteristics: Vec<String>,
    pub resource_type_id: i32,
}

/// Partial update; absent fields are left unchanged.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateResourceDto {
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub status: Option<ResourceStatusDto>,
    #[serde(default)]
    pub characteristics: Option<Vec<String>>,
    #[serde(default)]
    pub resource_type_id: Option<i32>,
}
