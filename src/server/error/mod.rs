//! Error types for the Bufete server application.
//!
//! Each concern (configuration, record lookup, field validation) has its own error type;
//! they are aggregated into [`Error`] with `thiserror`'s `#[from]` so services can use `?`
//! freely. Every error implements `IntoResponse` for Axum handlers.

pub mod config;
pub mod record;
pub mod validation;

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use dioxus_logger::tracing;
use thiserror::Error;

use crate::{
    model::api::ErrorDto,
    server::error::{config::ConfigError, record::NotFoundError, validation::ValidationErrors},
};

/// Main error type for the Bufete server application.
///
/// # Error Categories
/// - Configuration errors (missing/invalid environment variables)
/// - Validation errors (presence, length, uniqueness and reference rules)
/// - Not found errors (lookup by ID for show/edit/update/destroy)
/// - External library errors (database, I/O)
#[derive(Error, Debug)]
pub enum Error {
    /// Configuration error (missing or invalid environment variables).
    #[error(transparent)]
    ConfigError(#[from] ConfigError),
    /// One or more fields of a write were rejected; nothing was persisted.
    #[error(transparent)]
    ValidationError(#[from] ValidationErrors),
    /// The requested record does not exist.
    #[error(transparent)]
    NotFound(#[from] NotFoundError),
    /// Database error (query failures, connection issues, constraint violations).
    #[error(transparent)]
    DbErr(#[from] sea_orm::DbErr),
    /// I/O error (binding the listener, serving connections).
    #[error(transparent)]
    IoError(#[from] std::io::Error),
}

/// Converts application errors into HTTP responses.
///
/// # Returns
/// - 404 Not Found - For lookups of records that don't exist
/// - 422 Unprocessable Entity - For writes rejected by validation
/// - 500 Internal Server Error - For all other errors (with error logging)
impl IntoResponse for Error {
    fn into_response(self) -> Response {
        match self {
            Self::ConfigError(err) => err.into_response(),
            Self::ValidationError(err) => err.into_response(),
            Self::NotFound(err) => err.into_response(),
            err => InternalServerError(err).into_response(),
        }
    }
}

/// Wrapper type for converting any displayable error into a 500 Internal Server Error response.
///
/// This struct logs the error message and returns a generic "Internal server error" message
/// to the client to avoid leaking implementation details.
pub struct InternalServerError<E>(pub E);

impl<E: std::fmt::Display> IntoResponse for InternalServerError<E> {
    fn into_response(self) -> Response {
        tracing::error!("{}", self.0);

        (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(ErrorDto {
                error: "Internal server error".to_string(),
            }),
        )
            .into_response()
    }
}
