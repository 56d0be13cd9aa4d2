use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};

use crate::{
    model::{
        api::{ErrorDto, PageDto, PageParams, ValidationErrorDto},
        client::{ClientDto, ClientParams},
    },
    server::{error::Error, model::app::AppState, service::client::ClientService},
};

pub static CLIENT_TAG: &str = "client";

/// List clients ordered by ID, ten per page
#[utoipa::path(
    get,
    path = "/api/clients",
    tag = CLIENT_TAG,
    params(PageParams),
    responses(
        (status = 200, description = "Success when retrieving a page of clients", body = PageDto<ClientDto>),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_clients(
    State(state): State<AppState>,
    Query(params): Query<PageParams>,
) -> Result<impl IntoResponse, Error> {
    let client_service = ClientService::new(&state.db);

    let clients = client_service.get_page(params.page()).await?;

    Ok((StatusCode::OK, Json(clients)))
}

/// Get a client by ID
#[utoipa::path(
    get,
    path = "/api/clients/{client_id}",
    tag = CLIENT_TAG,
    params(("client_id" = i32, Path, description = "ID of the client")),
    responses(
        (status = 200, description = "Success when retrieving the client", body = ClientDto),
        (status = 404, description = "Client not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_client(
    State(state): State<AppState>,
    Path(client_id): Path<i32>,
) -> Result<impl IntoResponse, Error> {
    let client_service = ClientService::new(&state.db);

    let client = client_service.get(client_id).await?;

    Ok((StatusCode::OK, Json(client)))
}

/// Create a client
#[utoipa::path(
    post,
    path = "/api/clients",
    tag = CLIENT_TAG,
    request_body = ClientParams,
    responses(
        (status = 201, description = "Client created", body = ClientDto),
        (status = 422, description = "Client attributes are invalid", body = ValidationErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_client(
    State(state): State<AppState>,
    Json(params): Json<ClientParams>,
) -> Result<impl IntoResponse, Error> {
    let client_service = ClientService::new(&state.db);

    let client = client_service.create(params).await?;

    Ok((StatusCode::CREATED, Json(client)))
}

/// Update a client
#[utoipa::path(
    put,
    path = "/api/clients/{client_id}",
    tag = CLIENT_TAG,
    params(("client_id" = i32, Path, description = "ID of the client")),
    request_body = ClientParams,
    responses(
        (status = 200, description = "Client updated", body = ClientDto),
        (status = 404, description = "Client not found", body = ErrorDto),
        (status = 422, description = "Client attributes are invalid", body = ValidationErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_client(
    State(state): State<AppState>,
    Path(client_id): Path<i32>,
    Json(params): Json<ClientParams>,
) -> Result<impl IntoResponse, Error> {
    let client_service = ClientService::new(&state.db);

    let client = client_service.update(client_id, params).await?;

    Ok((StatusCode::OK, Json(client)))
}

/// Delete a client together with its affairs and their assignments
#[utoipa::path(
    delete,
    path = "/api/clients/{client_id}",
    tag = CLIENT_TAG,
    params(("client_id" = i32, Path, description = "ID of the client")),
    responses(
        (status = 204, description = "Client deleted"),
        (status = 404, description = "Client not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_client(
    State(state): State<AppState>,
    Path(client_id): Path<i32>,
) -> Result<impl IntoResponse, Error> {
    let client_service = ClientService::new(&state.db);

    client_service.delete(client_id).await?;

    Ok(StatusCode::NO_CONTENT)
}
