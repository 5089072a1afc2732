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
    model::reservation::{AddResourceDto, CreateReservationDto, ReservationDto, UpdateReservationDto},
    server::{
        error::AppError,
        model::reservation::{CreateReservationParams, Reservation, UpdateReservationParams},
        service::reservation::ReservationService,
        state::AppState,
    },
};

/// Create a reservation.
///
/// Creates the reservation for the given lecture and links every resource listed in
/// `resources`. Only `resourceId` of each element is read. The whole operation is
/// atomic: if any resource cannot be linked, no reservation is created.
///
/// # Arguments
/// - `state` - Application state containing the database connection
/// - `payload` - Lecture, observation and initial resources
///
/// # Returns
/// - `201 Created` - Created reservation with its resources
/// - `400 Bad Request` - Malformed body, or unknown lecture or resource
/// - `409 Conflict` - The same resource listed more than once
/// - `500 Internal Server Error` - Database error
pub async fn create_reservation(
    State(state): State<AppState>,
    payload: Result<Json<CreateReservationDto>, JsonRejection>,
) -> Result<impl IntoResponse, AppError> {
    let Json(payload) = payload?;

    let service = ReservationService::new(&state.db);

    let params = CreateReservationParams::from_dto(payload);
    let reservation = service.create(params).await?;

    Ok((StatusCode::CREATED, Json(reservation.into_dto())))
}

/// List all reservations with their resources.
///
/// # Returns
/// - `200 OK` - Every reservation, ordered by id
/// - `500 Internal Server Error` - Database error
pub async fn get_reservations(State(state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    let service = ReservationService::new(&state.db);

    let reservations: Vec<ReservationDto> = service
        .get_all()
        .await?
        .into_iter()
        .map(Reservation::into_dto)
        .collect();

    Ok((StatusCode::OK, Json(reservations)))
}

/// Get a reservation by ID.
///
/// # Returns
/// - `200 OK` - Reservation with its resources
/// - `400 Bad Request` - Non-numeric id
/// - `404 Not Found` - No reservation with that id
/// - `500 Internal Server Error` - Database error
pub async fn get_reservation_by_id(
    State(state): State<AppState>,
    path: Result<Path<i32>, PathRejection>,
) -> Result<impl IntoResponse, AppError> {
    let Path(id) = path?;

    let service = ReservationService::new(&state.db);
    let reservation = service.get_by_id(id).await?;

    Ok((StatusCode::OK, Json(reservation.into_dto())))
}

/// Update a reservation.
///
/// Only fields present in the body are written; resources are not affected.
///
/// # Returns
/// - `200 OK` - Updated reservation
/// - `400 Bad Request` - Non-numeric id, malformed body or unknown lecture
/// - `404 Not Found` - No reservation with that id
/// - `500 Internal Server Error` - Database error
pub async fn update_reservation(
    State(state): State<AppState>,
    path: Result<Path<i32>, PathRejection>,
    payload: Result<Json<UpdateReservationDto>, JsonRejection>,
) -> Result<impl IntoResponse, AppError> {
    let Path(id) = path?;
    let Json(payload) = payload?;

    let service = ReservationService::new(&state.db);
    let reservation = service
        .update(id, UpdateReservationParams::from_dto(payload))
        .await?;

    Ok((StatusCode::OK, Json(reservation.into_dto())))
}

/// Delete a reservation.
///
/// # Returns
/// - `204 No Content` - Reservation and its resource links removed
/// - `400 Bad Request` - Non-numeric id
/// - `404 Not Found` - No reservation with that id
/// - `500 Internal Server Error` - Database error
pub async fn delete_reservation(
    State(state): State<AppState>,
    path: Result<Path<i32>, PathRejection>,
) -> Result<impl IntoResponse, AppError> {
    let Path(id) = path?;

    let service = ReservationService::new(&state.db);
    service.delete(id).await?;

    Ok(StatusCode::NO_CONTENT)
}

/// Add a resource to an existing reservation.
///
/// # Returns
/// - `204 No Content` - Resource linked
/// - `400 Bad Request` - Non-numeric id, malformed body or unknown resource
/// - `404 Not Found` - No reservation with that id
/// - `409 Conflict` - Resource already linked to the reservation
/// - `500 Internal Server Error` - Database error
pub async fn add_resource(
    State(state): State<AppState>,
    path: Result<Path<i32>, PathRejection>,
    payload: Result<Json<AddResourceDto>, JsonRejection>,
) -> Result<impl IntoResponse, AppError> {
    let Path(id) = path?;
    let Json(payload) = payload?;

    let service = ReservationService::new(&state.db);
    service.add_resource(id, payload.resource_id).await?;

    Ok(StatusCode::NO_CONTENT)
}
