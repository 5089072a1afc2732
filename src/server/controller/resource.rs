use axum::{
    extract::{
        rejection::{JsonRejection, PathRejection},
        Path, State,
    },
    http::StatusCode,
    response::IntoResponse,
    Json,
};

use crate::{
    model::resource::{CreateResourceDto, ResourceDto, UpdateResourceDto},
    server::{
        error::AppError,
        model::resource::{CreateResourceParams, Resource, UpdateResourceParams},
        service::resource::ResourceService,
        state::AppState,
    },
};

/// Create a resource.
///
/// # Returns
/// - `201 Created` - Created resource
/// - `400 Bad Request` - Malformed body or unknown resource type
/// - `500 Internal Server Error` - Database error
pub async fn create_resource(
    State(state): State<AppState>,
    payload: Result<Json<CreateResourceDto>, JsonRejection>,
) -> Result<impl IntoResponse, AppError> {
    let Json(payload) = payload?;

    let service = ResourceService::new(&state.db);
    let resource = service
        .create(CreateResourceParams::from_dto(payload))
        .await?;

    Ok((StatusCode::CREATED, Json(resource.into_dto())))
}

/// List all resources.
///
/// # Returns
/// - `200 OK` - Every resource, ordered by id
/// - `500 Internal Server Error` - Database error
pub async fn get_resources(State(state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    let service = ResourceService::new(&state.db);

    let resources: Vec<ResourceDto> = service
        .get_all()
        .await?
        .into_iter()
        .map(Resource::into_dto)
        .collect();

    Ok((StatusCode::OK, Json(resources)))
}

/// Get a resource by ID.
///
/// # Returns
/// - `200 OK` - Resource
/// - `400 Bad Request` - Non-numeric id
/// - `404 Not Found` - No resource with that id
/// - `500 Internal Server Error` - Database error
pub async fn get_resource_by_id(
    State(state): State<AppState>,
    path: Result<Path<i32>, PathRejection>,
) -> Result<impl IntoResponse, AppError> {
    let Path(id) = path?;

    let service = ResourceService::new(&state.db);
    let resource = service.get_by_id(id).await?;

    Ok((StatusCode::OK, Json(resource.into_dto())))
}

/// Update a resource.
///
/// Only fields present in the body are written.
///
/// # Returns
/// - `200 OK` - Updated resource
/// - `400 Bad Request` - Non-numeric id, malformed body or unknown resource type
/// - `404 Not Found` - No resource with that id
/// - `500 Internal Server Error` - Database error
pub async fn update_resource(
    State(state): State<AppState>,
    path: Result<Path<i32>, PathRejection>,
    payload: Result<Json<UpdateResourceDto>, JsonRejection>,
) -> Result<impl IntoResponse, AppError> {
    let Path(id) = path?;
    let Json(payload) = payload?;

    let service = ResourceService::new(&state.db);
    let resource = service
        .update(id, UpdateResourceParams::from_dto(payload))
        .await?;

    Ok((StatusCode::OK, Json(resource.into_dto())))
}

/// Delete a resource.
///
/// # Returns
/// - `204 No Content` - Resource removed
/// - `400 Bad Request` - Non-numeric id
/// - `404 Not Found` - No resource with that id
/// - `409 Conflict` - Resource still linked to a reservation
/// - `500 Internal Server Error` - Database error
pub async fn delete_resource(
    State(state): State<AppState>,
    path: Result<Path<i32>, PathRejection>,
) -> Result<impl IntoResponse, AppError> {
    let Path(id) = path?;

    let service = ResourceService::new(&state.db);
    service.delete(id).await?;

    Ok(StatusCode::NO_CONTENT)
}
