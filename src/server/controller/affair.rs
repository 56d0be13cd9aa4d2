use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};

use crate::{
    model::{
        api::{ErrorDto, PageDto, PageParams, ValidationErrorDto},
        affair::{AffairDto, AffairParams},
    },
    server::{error::Error, model::app::AppState, service::affair::AffairService},
};

pub static AFFAIR_TAG: &str = "affair";

/// List affairs ordered by ID, ten per page, each with its assignments
#[utoipa::path(
    get,
    path = "/api/affairs",
    tag = AFFAIR_TAG,
    params(PageParams),
    responses(
        (status = 200, description = "Success when retrieving a page of affairs", body = PageDto<AffairDto>),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_affairs(
    State(state): State<AppState>,
    Query(params): Query<PageParams>,
) -> Result<impl IntoResponse, Error> {
    let affair_service = AffairService::new(&state.db);

    let affairs = affair_service.get_page(params.page()).await?;

    Ok((StatusCode::OK, Json(affairs)))
}

/// Get an affair by ID
#[utoipa::path(
    get,
    path = "/api/affairs/{affair_id}",
    tag = AFFAIR_TAG,
    params(("affair_id" = i32, Path, description = "ID of the affair")),
    responses(
        (status = 200, description = "Success when retrieving the affair", body = AffairDto),
        (status = 404, description = "Affair not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_affair(
    State(state): State<AppState>,
    Path(affair_id): Path<i32>,
) -> Result<impl IntoResponse, Error> {
    let affair_service = AffairService::new(&state.db);

    let affair = affair_service.get(affair_id).await?;

    Ok((StatusCode::OK, Json(affair)))
}

/// Blank affair form with one empty assignment row
#[utoipa::path(
    get,
    path = "/api/affairs/new",
    tag = AFFAIR_TAG,
    responses(
        (status = 200, description = "Blank affair form", body = AffairParams)
    ),
)]
pub async fn new_affair(State(state): State<AppState>) -> impl IntoResponse {
    let affair_service = AffairService::new(&state.db);

    (StatusCode::OK, Json(affair_service.new_form()))
}

/// Affair form pre-populated with the affair and its assignments
#[utoipa::path(
    get,
    path = "/api/affairs/{affair_id}/edit",
    tag = AFFAIR_TAG,
    params(("affair_id" = i32, Path, description = "ID of the affair")),
    responses(
        (status = 200, description = "Affair form", body = AffairParams),
        (status = 404, description = "Affair not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn edit_affair(
    State(state): State<AppState>,
    Path(affair_id): Path<i32>,
) -> Result<impl IntoResponse, Error> {
    let affair_service = AffairService::new(&state.db);

    let form = affair_service.edit_form(affair_id).await?;

    Ok((StatusCode::OK, Json(form)))
}

/// Create an affair together with its assignment rows
#[utoipa::path(
    post,
    path = "/api/affairs",
    tag = AFFAIR_TAG,
    request_body = AffairParams,
    responses(
        (status = 201, description = "Affair created", body = AffairDto),
        (status = 404, description = "An assignment row refers to an unknown assignment", body = ErrorDto),
        (status = 422, description = "Affair or assignment attributes are invalid", body = ValidationErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_affair(
    State(state): State<AppState>,
    Json(params): Json<AffairParams>,
) -> Result<impl IntoResponse, Error> {
    let affair_service = AffairService::new(&state.db);

    let affair = affair_service.create(params).await?;

    Ok((StatusCode::CREATED, Json(affair)))
}

/// Update an affair and apply its assignment rows
#[utoipa::path(
    put,
    path = "/api/affairs/{affair_id}",
    tag = AFFAIR_TAG,
    params(("affair_id" = i32, Path, description = "ID of the affair")),
    request_body = AffairParams,
    responses(
        (status = 200, description = "Affair updated", body = AffairDto),
        (status = 404, description = "Affair or referenced assignment not found", body = ErrorDto),
        (status = 422, description = "Affair or assignment attributes are invalid", body = ValidationErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_affair(
    State(state): State<AppState>,
    Path(affair_id): Path<i32>,
    Json(params): Json<AffairParams>,
) -> Result<impl IntoResponse, Error> {
    let affair_service = AffairService::new(&state.db);

    let affair = affair_service.update(affair_id, params).await?;

    Ok((StatusCode::OK, Json(affair)))
}

/// Delete an affair together with its assignments
#[utoipa::path(
    delete,
    path = "/api/affairs/{affair_id}",
    tag = AFFAIR_TAG,
    params(("affair_id" = i32, Path, description = "ID of the affair")),
    responses(
        (status = 204, description = "Affair deleted"),
        (status = 404, description = "Affair not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_affair(
    State(state): State<AppState>,
    Path(affair_id): Path<i32>,
) -> Result<impl IntoResponse, Error> {
    let affair_service = AffairService::new(&state.db);

    affair_service.delete(affair_id).await?;

    Ok(StatusCode::NO_CONTENT)
}
