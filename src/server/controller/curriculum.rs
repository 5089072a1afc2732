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
    model::curriculum::{AddDisciplineDto, CreateCurriculumDto, CurriculumDto, UpdateCurriculumDto},
    server::{
        error::AppError,
        model::curriculum::{CreateCurriculumParams, Curriculum, UpdateCurriculumParams},
        service::curriculum::CurriculumService,
        state::AppState,
    },
};

/// Create a curriculum.
///
/// Links every discipline listed in `disciplines` (only `id` is read). If any
/// discipline cannot be linked, no curriculum is created.
///
/// # Returns
/// - `201 Created` - Created curriculum with its disciplines
/// - `400 Bad Request` - Malformed body or unknown discipline
/// - `409 Conflict` - The same discipline listed more than once
/// - `500 Internal Server Error` - Database error
pub async fn create_curriculum(
    State(state): State<AppState>,
    payload: Result<Json<CreateCurriculumDto>, JsonRejection>,
) -> Result<impl IntoResponse, AppError> {
    let Json(payload) = payload?;

    let service = CurriculumService::new(&state.db);
    let curriculum = service
        .create(CreateCurriculumParams::from_dto(payload))
        .await?;

    Ok((StatusCode::CREATED, Json(curriculum.into_dto())))
}

/// List all curriculums with their disciplines.
pub async fn get_curriculums(State(state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    let service = CurriculumService::new(&state.db);

    let curriculums: Vec<CurriculumDto> = service
        .get_all()
        .await?
        .into_iter()
        .map(Curriculum::into_dto)
        .collect();

    Ok((StatusCode::OK, Json(curriculums)))
}

/// Get a curriculum by ID.
///
/// # Returns
/// - `200 OK` - Curriculum with its disciplines
/// - `400 Bad Request` - Non-numeric id
/// - `404 Not Found` - No curriculum with that id
pub async fn get_curriculum_by_id(
    State(state): State<AppState>,
    path: Result<Path<i32>, PathRejection>,
) -> Result<impl IntoResponse, AppError> {
    let Path(id) = path?;

    let service = CurriculumService::new(&state.db);
    let curriculum = service.get_by_id(id).await?;

    Ok((StatusCode::OK, Json(curriculum.into_dto())))
}

/// Update a curriculum; absent fields are left unchanged.
pub async fn update_curriculum(
    State(state): State<AppState>,
    path: Result<Path<i32>, PathRejection>,
    payload: Result<Json<UpdateCurriculumDto>, JsonRejection>,
) -> Result<impl IntoResponse, AppError> {
    let Path(id) = path?;
    let Json(payload) = payload?;

    let service = CurriculumService::new(&state.db);
    let curriculum = service
        .update(id, UpdateCurriculumParams::from_dto(payload))
        .await?;

    Ok((StatusCode::OK, Json(curriculum.into_dto())))
}

/// Delete a curriculum.
///
/// # Returns
/// - `204 No Content` - Curriculum and its discipline links removed
/// - `404 Not Found` - No curriculum with that id
pub async fn delete_curriculum(
    State(state): State<AppState>,
    path: Result<Path<i32>, PathRejection>,
) -> Result<impl IntoResponse, AppError> {
    let Path(id) = path?;

    let service = CurriculumService::new(&state.db);
    service.delete(id).await?;

    Ok(StatusCode::NO_CONTENT)
}

/// Add a discipline to an existing curriculum.
///
/// # Returns
/// - `204 No Content` - Discipline linked
/// - `400 Bad Request` - Non-numeric id, malformed body or unknown discipline
/// - `404 Not Found` - No curriculum with that id
/// - `409 Conflict` - Discipline already linked to the curriculum
pub async fn add_discipline(
    State(state): State<AppState>,
    path: Result<Path<i32>, PathRejection>,
    payload: Result<Json<AddDisciplineDto>, JsonRejection>,
) -> Result<impl IntoResponse, AppError> {
    let Path(id) = path?;
    let Json(payload) = payload?;

    let service = CurriculumService::new(&state.db);
    service.add_discipline(id, payload.discipline_id).await?;

    Ok(StatusCode::NO_CONTENT)
}
