//! Association write failures.
//!
//! Join rows are keyed by (parent id, child id) and reference both sides through
//! foreign keys. A rejected insert is reported either as a duplicate pair or as a
//! reference to a record that does not exist. A child that is still linked cannot
//! be deleted.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use sea_orm::{DbErr, SqlErr};
use thiserror::Error;

use crate::{
    model::api::ErrorDto,
    server::error::{AppError, EntityKind},
};

#[derive(Error, Debug)]
pub enum ReferenceError {
    /// The (parent, child) pair is already associated.
    ///
    /// Results in 409 Conflict.
    #[error("{child} {child_id} is already associated with {parent} {parent_id}")]
    Duplicate {
        parent: EntityKind,
        parent_id: i32,
        child: EntityKind,
        child_id: i32,
    },

    /// The association references a record that does not exist.
    ///
    /// Results in 400 Bad Request.
    #[error("{entity} with id {id} does not exist")]
    Missing { entity: EntityKind, id: i32 },

    /// The record is still referenced and cannot be deleted.
    ///
    /// Results in 409 Conflict.
    #[error("{entity} with id {id} is still in use")]
    InUse { entity: EntityKind, id: i32 },
}

impl IntoResponse for ReferenceError {
    fn into_response(self) -> Response {
        let status = match self {
            Self::Duplicate { .. } | Self::InUse { .. } => StatusCode::CONFLICT,
            Self::Missing { .. } => StatusCode::BAD_REQUEST,
        };

        (
            status,
            Json(ErrorDto {
                error: self.to_string(),
            }),
        )
            .into_response()
    }
}

/// Identities involved in a single join-row insert.
#[derive(Debug, Clone, Copy)]
pub struct Association {
    pub parent: EntityKind,
    pub parent_id: i32,
    pub child: EntityKind,
    pub child_id: i32,
}

impl Association {
    /// Classifies a failed join-row insert.
    ///
    /// The parent is checked before the insert, so a foreign key violation is
    /// attributed to the child. Errors that are not key violations pass through
    /// as database errors.
    pub fn classify(self, err: DbErr) -> AppError {
        match err.sql_err() {
            Some(SqlErr::UniqueConstraintViolation(_)) => ReferenceError::Duplicate {
                parent: self.parent,
                parent_id: self.parent_id,
                child: self.child,
                child_id: self.child_id,
            }
            .into(),
            Some(SqlErr::ForeignKeyConstraintViolation(_)) => ReferenceError::Missing {
                entity: self.child,
                id: self.child_id,
            }
            .into(),
            _ => AppError::DbErr(err),
        }
    }
}
