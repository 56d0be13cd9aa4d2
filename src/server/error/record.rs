use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use dioxus_logger::tracing;
use thiserror::Error;

use crate::model::api::ErrorDto;

/// A lookup by ID found no row.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("{resource} with ID {id} not found")]
pub struct NotFoundError {
    pub resource: &'static str,
    pub id: i32,
}

impl NotFoundError {
    pub fn client(id: i32) -> Self {
        Self {
            resource: "Client",
            id,
        }
    }

    pub fn attorney(id: i32) -> Self {
        Self {
            resource: "Attorney",
            id,
        }
    }

    pub fn affair(id: i32) -> Self {
        Self {
            resource: "Affair",
            id,
        }
    }

    pub fn assignment(id: i32) -> Self {
        Self {
            resource: "Assignment",
            id,
        }
    }
}

impl IntoResponse for NotFoundError {
    fn into_response(self) -> Response {
        tracing::debug!(resource = %self.resource, id = %self.id, "{}", self);

        (
            StatusCode::NOT_FOUND,
            Json(ErrorDto {
                error: format!("{} not found", self.resource),
            }),
        )
            .into_response()
    }
}
