use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DisciplineDto {
    pub id: i32,
    pub name: String,
    pub credits: i32,
    pub program: String,
    pub bibliography: Vec<String>,
}

/// Discipline reference inside a curriculum write; only `id` is consumed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DisciplineRefDto {
    pub id: i32,
}
