use axum::{
    routing::{get, post},
    Router,
};

use crate::server::{
    controller::{
        curriculum::{
            add_discipline, create_curriculum, delete_curriculum, get_curriculum_by_id,
            get_curriculums, update_curriculum,
        },
        health::health,
        reservation::{
            add_resource, create_reservation, delete_reservation, get_reservation_by_id,
            get_reservations, update_reservation,
        },
        resource::{
            create_resource, delete_resource, get_resource_by_id, get_resources, update_resource,
        },
    },
    state::AppState,
};

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/health", get(health))
        .route(
            "/reservations",
            get(get_reservations).post(create_reservation),
        )
        .route(
            "/reservations/{id}",
            get(get_reservation_by_id)
                .put(update_reservation)
                .delete(delete_reservation),
        )
        .route("/reservations/{id}/resources", post(add_resource))
        .route("/resources", get(get_resources).post(create_resource))
        .route(
            "/resources/{id}",
            get(get_resource_by_id)
                .put(update_resource)
                .delete(delete_resource),
        )
        .route(
            "/curriculums",
            get(get_curriculums).post(create_curriculum),
        )
        .route(
            "/curriculums/{id}",
            get(get_curriculum_by_id)
                .put(update_curriculum)
                .delete(delete_curriculum),
        )
        .route("/curriculums/{id}/disciplines", post(add_discipline))
}
