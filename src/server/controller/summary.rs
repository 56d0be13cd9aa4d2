use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};

use crate::{
    model::api::{ErrorDto, SummaryDto},
    server::{error::Error, model::app::AppState, service::summary::SummaryService},
};

pub static SUMMARY_TAG: &str = "summary";

/// Count the clients, attorneys, affairs and assignments on record
#[utoipa::path(
    get,
    path = "/api/summary",
    tag = SUMMARY_TAG,
    responses(
        (status = 200, description = "Success when counting records", body = SummaryDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_summary(State(state): State<AppState>) -> Result<impl IntoResponse, Error> {
    let summary_service = SummaryService::new(&state.db);

    let summary = summary_service.get().await?;

    Ok((StatusCode::OK, Json(summary)))
}
