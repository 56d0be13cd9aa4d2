use std::{collections::BTreeMap, fmt};

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use dioxus_logger::tracing;
use sea_orm::{DbErr, SqlErr};
use thiserror::Error;

use crate::{model::api::ValidationErrorDto, server::error::Error as AppError};

/// A single rule violated by a field.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldError {
    #[error("can't be blank")]
    Blank,
    #[error("is too short (minimum is {0} characters)")]
    TooShort(usize),
    #[error("is too long (maximum is {0} characters)")]
    TooLong(usize),
    #[error("is the wrong length (should be {0} characters)")]
    WrongLength(usize),
    #[error("has already been taken")]
    Taken,
    #[error("must exist")]
    MustExist,
}

impl From<&validator::ValidationError> for FieldError {
    /// Map a field rule reported by `validator`: `blank` codes and `length` bounds.
    fn from(error: &validator::ValidationError) -> Self {
        let bound = |name: &str| {
            error
                .params
                .get(name)
                .and_then(|value| value.as_u64())
                .map(|value| value as usize)
        };
        let len = error
            .params
            .get("value")
            .and_then(|value| value.as_str())
            .map(|value| value.chars().count())
            .unwrap_or_default();

        match (&*error.code, bound("equal"), bound("min"), bound("max")) {
            ("length", Some(equal), _, _) => Self::WrongLength(equal),
            ("length", None, Some(min), _) if len < min => Self::TooShort(min),
            ("length", None, _, Some(max)) => Self::TooLong(max),
            ("length", None, Some(min), None) => Self::TooShort(min),
            _ => Self::Blank,
        }
    }
}

/// Every field error collected for a single write attempt.
///
/// Keys are field names; errors of nested assignment rows are keyed
/// `assignments[<index>].<field>`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ValidationErrors {
    fields: BTreeMap<String, Vec<FieldError>>,
}

impl ValidationErrors {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record `error` against `field`.
    pub fn add(&mut self, field: impl Into<String>, error: FieldError) {
        self.fields.entry(field.into()).or_default().push(error);
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Errors recorded against `field`, empty when the field is valid.
    pub fn get(&self, field: &str) -> &[FieldError] {
        self.fields.get(field).map(Vec::as_slice).unwrap_or_default()
    }

    pub fn contains(&self, field: &str, error: FieldError) -> bool {
        self.get(field).contains(&error)
    }

    /// Names of the fields that have errors, in sorted order.
    pub fn fields(&self) -> impl Iterator<Item = &str> {
        self.fields.keys().map(String::as_str)
    }

    /// Move the errors of one nested assignment row under `assignments[<index>]`.
    pub fn extend_nested(&mut self, index: usize, nested: ValidationErrors) {
        for (field, errors) in nested.fields {
            let key = format!("assignments[{}].{}", index, field);
            self.fields.entry(key).or_default().extend(errors);
        }
    }

    pub fn merge(&mut self, other: ValidationErrors) {
        for (field, errors) in other.fields {
            self.fields.entry(field).or_default().extend(errors);
        }
    }

    /// Collect the field rules `params` violates.
    pub fn check(params: &impl validator::Validate) -> Self {
        let mut errors = Self::new();

        if let Err(report) = params.validate() {
            for (field, field_errors) in report.field_errors() {
                for error in field_errors {
                    errors.add(field.to_string(), FieldError::from(error));
                }
            }
        }

        errors
    }

    /// Join the outcome of two validators run on the same write, keeping every error.
    pub fn combine<A, B>(
        first: Result<A, ValidationErrors>,
        second: Result<B, ValidationErrors>,
    ) -> Result<(A, B), ValidationErrors> {
        match (first, second) {
            (Ok(a), Ok(b)) => Ok((a, b)),
            (Err(errors), Ok(_)) | (Ok(_), Err(errors)) => Err(errors),
            (Err(mut errors), Err(other)) => {
                errors.merge(other);
                Err(errors)
            }
        }
    }

    pub fn to_dto(&self) -> ValidationErrorDto {
        ValidationErrorDto {
            errors: self
                .fields
                .iter()
                .map(|(field, errors)| {
                    (
                        field.clone(),
                        errors.iter().map(ToString::to_string).collect(),
                    )
                })
                .collect(),
        }
    }
}

impl fmt::Display for ValidationErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Validation failed:")?;

        let mut first = true;
        for (field, errors) in &self.fields {
            for error in errors {
                if !first {
                    write!(f, ",")?;
                }
                write!(f, " {} {}", field, error)?;
                first = false;
            }
        }

        Ok(())
    }
}

impl std::error::Error for ValidationErrors {}

impl IntoResponse for ValidationErrors {
    fn into_response(self) -> Response {
        tracing::debug!("{}", self);

        (StatusCode::UNPROCESSABLE_ENTITY, Json(self.to_dto())).into_response()
    }
}

/// A storage-level unique index and the field its violation is reported on.
#[derive(Debug, Clone, Copy)]
pub struct UniqueGuard {
    /// Column name appearing in the database's violation message
    pub column: &'static str,
    /// Field the violation is reported against
    pub field: &'static str,
}

/// Reclassify a unique-constraint violation raised by storage as a `Taken` field error.
///
/// The guard whose column appears in the database message decides the field; when none
/// matches the first guard is used. Any other database error is returned unchanged.
pub fn reclassify_unique_violation(err: DbErr, guards: &[UniqueGuard]) -> AppError {
    let Some(SqlErr::UniqueConstraintViolation(message)) = err.sql_err() else {
        return AppError::DbErr(err);
    };

    let field = guards
        .iter()
        .find(|guard| message.contains(guard.column))
        .or_else(|| guards.first())
        .map(|guard| guard.field)
        .unwrap_or("base");

    tracing::debug!(
        field = %field,
        "Unique constraint violation reported by database: {}",
        message
    );

    let mut errors = ValidationErrors::new();
    errors.add(field, FieldError::Taken);

    AppError::ValidationError(errors)
}
