use sea_orm::FromJsonQueryResult;
use serde::{Deserialize, Serialize};

/// Ordered list of free-form strings stored as a JSON column.
///
/// Used for resource characteristics, discipline bibliography and lecture content.
/// A JSON column keeps the schema portable between PostgreSQL and SQLite.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize, FromJsonQueryResult)]
pub struct TextList(pub Vec<String>);

impl From<Vec<String>> for TextList {
    fn from(values: Vec<String>) -> Self {
        Self(values)
    }
}

impl From<TextList> for Vec<String> {
    fn from(list: TextList) -> Self {
        list.0
    }
}
