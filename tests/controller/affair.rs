//! Tests for the affair endpoints.

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use bufete::{
    model::{affair::AffairParams, api::PageParams},
    server::controller::affair::{
        create_affair, delete_affair, edit_affair, get_affair, get_affairs, new_affair,
    },
};
use chrono::NaiveDate;

use super::*;

fn affair_params(file_number: &str, client_id: i32) -> AffairParams {
    AffairParams {
        file_number: Some(file_number.to_string()),
        client_id: Some(client_id),
        start_date: NaiveDate::from_ymd_opt(2024, 3, 1),
        finish_date: None,
        status: Some("abierto".to_string()),
        assignments_attributes: Vec::new(),
    }
}

#[tokio::test]
async fn index_returns_ok() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_record_tables()
        .with_mock_affair("123abc", "123456")
        .build()
        .await?;

    let result = get_affairs(State(test.to_app_state()), Query(PageParams::default())).await;

    assert!(result.is_ok());
    let resp = result.unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::OK);

    Ok(())
}

#[tokio::test]
async fn new_returns_ok() -> Result<(), TestError> {
    let test = TestBuilder::new().build().await?;

    let resp = new_affair(State(test.to_app_state())).await.into_response();

    assert_eq!(resp.status(), StatusCode::OK);

    Ok(())
}

#[tokio::test]
async fn create_returns_created() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_record_tables()
        .with_mock_client("123456")
        .build()
        .await?;
    let client = test.client().insert_mock_client("123456").await?;

    let result = create_affair(
        State(test.to_app_state()),
        Json(affair_params("123abc", client.id)),
    )
    .await;

    assert!(result.is_ok());
    let resp = result.unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::CREATED);

    Ok(())
}

/// Expect 422 Unprocessable Entity for a file number of the wrong length
#[tokio::test]
async fn create_rejects_short_file_number() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_record_tables()
        .with_mock_client("123456")
        .build()
        .await?;
    let client = test.client().insert_mock_client("123456").await?;

    let result = create_affair(
        State(test.to_app_state()),
        Json(affair_params("12a", client.id)),
    )
    .await;

    assert!(result.is_err());
    let resp = result.err().unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::UNPROCESSABLE_ENTITY);

    Ok(())
}

#[tokio::test]
async fn edit_returns_ok() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_record_tables()
        .with_mock_affair("123abc", "123456")
        .with_mock_assignment("123abc", "987654")
        .build()
        .await?;
    let (affair, _) = test
        .affair()
        .insert_affair_with_mock_client("123abc", "123456")
        .await?;

    let result = edit_affair(State(test.to_app_state()), Path(affair.id)).await;

    assert!(result.is_ok());
    let resp = result.unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::OK);

    Ok(())
}

/// Expect the affair to be gone after a 204 No Content
#[tokio::test]
async fn delete_returns_no_content() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_record_tables()
        .with_mock_affair("123abc", "123456")
        .with_mock_assignment("123abc", "987654")
        .build()
        .await?;
    let (affair, _) = test
        .affair()
        .insert_affair_with_mock_client("123abc", "123456")
        .await?;

    let result = delete_affair(State(test.to_app_state()), Path(affair.id)).await;

    assert!(result.is_ok());
    let resp = result.unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::NO_CONTENT);

    let result = get_affair(State(test.to_app_state()), Path(affair.id)).await;
    assert!(result.is_err());
    let resp = result.err().unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);

    Ok(())
}
