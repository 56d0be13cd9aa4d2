use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};

use crate::{
    model::{
        api::{ErrorDto, PageDto, PageParams, ValidationErrorDto},
        assignment::{AssignmentDto, AssignmentParams},
    },
    server::{error::Error, model::app::AppState, service::assignment::AssignmentService},
};

pub static ASSIGNMENT_TAG: &str = "assignment";

/// List assignments ordered by ID, ten per page
#[utoipa::path(
    get,
    path = "/api/assignments",
    tag = ASSIGNMENT_TAG,
    params(PageParams),
    responses(
        (status = 200, description = "Success when retrieving a page of assignments", body = PageDto<AssignmentDto>),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_assignments(
    State(state): State<AppState>,
    Query(params): Query<PageParams>,
) -> Result<impl IntoResponse, Error> {
    let assignment_service = AssignmentService::new(&state.db);

    let assignments = assignment_service.get_page(params.page()).await?;

    Ok((StatusCode::OK, Json(assignments)))
}

/// Get an assignment by ID
#[utoipa::path(
    get,
    path = "/api/assignments/{assignment_id}",
    tag = ASSIGNMENT_TAG,
    params(("assignment_id" = i32, Path, description = "ID of the assignment")),
    responses(
        (status = 200, description = "Success when retrieving the assignment", body = AssignmentDto),
        (status = 404, description = "Assignment not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_assignment(
    State(state): State<AppState>,
    Path(assignment_id): Path<i32>,
) -> Result<impl IntoResponse, Error> {
    let assignment_service = AssignmentService::new(&state.db);

    let assignment = assignment_service.get(assignment_id).await?;

    Ok((StatusCode::OK, Json(assignment)))
}

/// Assign an attorney to an affair
#[utoipa::path(
    post,
    path = "/api/assignments",
    tag = ASSIGNMENT_TAG,
    request_body = AssignmentParams,
    responses(
        (status = 201, description = "Assignment created", body = AssignmentDto),
        (status = 422, description = "Assignment attributes are invalid", body = ValidationErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_assignment(
    State(state): State<AppState>,
    Json(params): Json<AssignmentParams>,
) -> Result<impl IntoResponse, Error> {
    let assignment_service = AssignmentService::new(&state.db);

    let assignment = assignment_service.create(params).await?;

    Ok((StatusCode::CREATED, Json(assignment)))
}

/// Update an assignment
#[utoipa::path(
    put,
    path = "/api/assignments/{assignment_id}",
    tag = ASSIGNMENT_TAG,
    params(("assignment_id" = i32, Path, description = "ID of the assignment")),
    request_body = AssignmentParams,
    responses(
        (status = 200, description = "Assignment updated", body = AssignmentDto),
        (status = 404, description = "Assignment not found", body = ErrorDto),
        (status = 422, description = "Assignment attributes are invalid", body = ValidationErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_assignment(
    State(state): State<AppState>,
    Path(assignment_id): Path<i32>,
    Json(params): Json<AssignmentParams>,
) -> Result<impl IntoResponse, Error> {
    let assignment_service = AssignmentService::new(&state.db);

    let assignment = assignment_service.update(assignment_id, params).await?;

    Ok((StatusCode::OK, Json(assignment)))
}

/// Delete an assignment
#[utoipa::path(
    delete,
    path = "/api/assignments/{assignment_id}",
    tag = ASSIGNMENT_TAG,
    params(("assignment_id" = i32, Path, description = "ID of the assignment")),
    responses(
        (status = 204, description = "Assignment deleted"),
        (status = 404, description = "Assignment not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_assignment(
    State(state): State<AppState>,
    Path(assignment_id): Path<i32>,
) -> Result<impl IntoResponse, Error> {
    let assignment_service = AssignmentService::new(&state.db);

    assignment_service.delete(assignment_id).await?;

    Ok(StatusCode::NO_CONTENT)
}
