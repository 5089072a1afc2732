use crate::server::{
    error::{reference::ReferenceError, AppError, EntityKind},
    model::resource::{CreateResourceParams, UpdateResourceParams},
    service::resource::ResourceService,
};
use entity::resource::ResourceStatus;
use sea_orm::{EntityTrait, PaginatorTrait};
use test_utils::{builder::TestBuilder, factory};

mod get_by_id;

fn create_params(resource_type_id: i32) -> CreateResourceParams {
    CreateResourceParams {
        description: "Microscope".to_string(),
        status: ResourceStatus::Available,
        characteristics: vec!["40x".to_string()],
        resource_type_id,
    }
}
