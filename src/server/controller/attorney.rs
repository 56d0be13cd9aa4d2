use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};

use crate::{
    model::{
        api::{ErrorDto, PageDto, PageParams, ValidationErrorDto},
        attorney::{AttorneyDto, AttorneyParams},
    },
    server::{error::Error, model::app::AppState, service::attorney::AttorneyService},
};

pub static ATTORNEY_TAG: &str = "attorney";

/// List attorneys ordered by ID, ten per page, each with its assignments
#[utoipa::path(
    get,
    path = "/api/attorneys",
    tag = ATTORNEY_TAG,
    params(PageParams),
    responses(
        (status = 200, description = "Success when retrieving a page of attorneys", body = PageDto<AttorneyDto>),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_attorneys(
    State(state): State<AppState>,
    Query(params): Query<PageParams>,
) -> Result<impl IntoResponse, Error> {
    let attorney_service = AttorneyService::new(&state.db);

    let attorneys = attorney_service.get_page(params.page()).await?;

    Ok((StatusCode::OK, Json(attorneys)))
}

/// Get an attorney by ID
#[utoipa::path(
    get,
    path = "/api/attorneys/{attorney_id}",
    tag = ATTORNEY_TAG,
    params(("attorney_id" = i32, Path, description = "ID of the attorney")),
    responses(
        (status = 200, description = "Success when retrieving the attorney", body = AttorneyDto),
        (status = 404, description = "Attorney not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_attorney(
    State(state): State<AppState>,
    Path(attorney_id): Path<i32>,
) -> Result<impl IntoResponse, Error> {
    let attorney_service = AttorneyService::new(&state.db);

    let attorney = attorney_service.get(attorney_id).await?;

    Ok((StatusCode::OK, Json(attorney)))
}

/// Blank attorney form with one empty assignment row
#[utoipa::path(
    get,
    path = "/api/attorneys/new",
    tag = ATTORNEY_TAG,
    responses(
        (status = 200, description = "Blank attorney form", body = AttorneyParams)
    ),
)]
pub async fn new_attorney(State(state): State<AppState>) -> impl IntoResponse {
    let attorney_service = AttorneyService::new(&state.db);

    (StatusCode::OK, Json(attorney_service.new_form()))
}

/// Attorney form pre-populated with the attorney and its assignments
#[utoipa::path(
    get,
    path = "/api/attorneys/{attorney_id}/edit",
    tag = ATTORNEY_TAG,
    params(("attorney_id" = i32, Path, description = "ID of the attorney")),
    responses(
        (status = 200, description = "Attorney form", body = AttorneyParams),
        (status = 404, description = "Attorney not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn edit_attorney(
    State(state): State<AppState>,
    Path(attorney_id): Path<i32>,
) -> Result<impl IntoResponse, Error> {
    let attorney_service = AttorneyService::new(&state.db);

    let form = attorney_service.edit_form(attorney_id).await?;

    Ok((StatusCode::OK, Json(form)))
}

/// Create an attorney together with its assignment rows
#[utoipa::path(
    post,
    path = "/api/attorneys",
    tag = ATTORNEY_TAG,
    request_body = AttorneyParams,
    responses(
        (status = 201, description = "Attorney created", body = AttorneyDto),
        (status = 404, description = "An assignment row refers to an unknown assignment", body = ErrorDto),
        (status = 422, description = "Attorney or assignment attributes are invalid", body = ValidationErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_attorney(
    State(state): State<AppState>,
    Json(params): Json<AttorneyParams>,
) -> Result<impl IntoResponse, Error> {
    let attorney_service = AttorneyService::new(&state.db);

    let attorney = attorney_service.create(params).await?;

    Ok((StatusCode::CREATED, Json(attorney)))
}

/// Update an attorney and apply its assignment rows
#[utoipa::path(
    put,
    path = "/api/attorneys/{attorney_id}",
    tag = ATTORNEY_TAG,
    params(("attorney_id" = i32, Path, description = "ID of the attorney")),
    request_body = AttorneyParams,
    responses(
        (status = 200, description = "Attorney updated", body = AttorneyDto),
        (status = 404, description = "Attorney or referenced assignment not found", body = ErrorDto),
        (status = 422, description = "Attorney or assignment attributes are invalid", body = ValidationErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_attorney(
    State(state): State<AppState>,
    Path(attorney_id): Path<i32>,
    Json(params): Json<AttorneyParams>,
) -> Result<impl IntoResponse, Error> {
    let attorney_service = AttorneyService::new(&state.db);

    let attorney = attorney_service.update(attorney_id, params).await?;

    Ok((StatusCode::OK, Json(attorney)))
}

/// Delete an attorney together with its assignments
#[utoipa::path(
    delete,
    path = "/api/attorneys/{attorney_id}",
    tag = ATTORNEY_TAG,
    params(("attorney_id" = i32, Path, description = "ID of the attorney")),
    responses(
        (status = 204, description = "Attorney deleted"),
        (status = 404, description = "Attorney not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_attorney(
    State(state): State<AppState>,
    Path(attorney_id): Path<i32>,
) -> Result<impl IntoResponse, Error> {
    let attorney_service = AttorneyService::new(&state.db);

    attorney_service.delete(attorney_id).await?;

    Ok(StatusCode::NO_CONTENT)
}
