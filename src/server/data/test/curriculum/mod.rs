use crate::server::{
    data::curriculum::CurriculumRepository,
    model::curriculum::{CreateCurriculumParams, UpdateCurriculumParams},
};
use chrono::NaiveDate;
use sea_orm::{DbErr, EntityTrait, PaginatorTrait};
use test_utils::{builder::TestBuilder, factory, fixture};

mod add_discipline;
mod create;
mod find_all;

fn create_params() -> CreateCurriculumParams {
    CreateCurriculumParams {
        course_name: "Computer Engineering".to_string(),
        start_date: fixture::curriculum::default_start_date(),
        end_date: fixture::curriculum::default_end_date(),
        discipline_ids: vec![],
    }
}
