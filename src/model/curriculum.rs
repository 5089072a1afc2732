use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::model::discipline::{DisciplineDto, DisciplineRefDto};

/// Curriculum as returned by the API.
///
/// The validity dates keep their established wire names, `dataInicio` and `dataFim`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CurriculumDto {
    pub id: i32,
    pub course_name: String,
    #[serde(rename = "dataInicio")]
    pub start_date: NaiveDate,
    #[serde(rename = "dataFim")]
    pub end_date: NaiveDate,
    pub disciplines: Vec<DisciplineDto>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateCurriculumDto {
    pub course_name: String,
    #[serde(rename = "dataInicio", alias = "startDate")]
    pub start_date: NaiveDate,
    #[serde(rename = "dataFim", alias = "endDate")]
    pub end_date: NaiveDate,
    #[serde(default)]
    pub disciplines: Vec<DisciplineRefDto>,
}

/// Partial update; absent fields are left unchanged.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateCurriculumDto {
    #[serde(default)]
    pub course_name: Option<String>,
    #[serde(default, rename = "dataInicio", alias = "startDate")]
    pub start_date: Option<NaiveDate>,
    #[serde(default, rename = "dataFim", alias = "endDate")]
    pub end_date: Option<NaiveDate>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AddDisciplineDto {
    pub discipline_id: i32,
}
