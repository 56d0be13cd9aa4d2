//! Tests for the client endpoints.

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use bufete::{
    model::{api::PageParams, client::ClientParams},
    server::controller::client::{
        create_client, delete_client, get_client, get_clients, update_client,
    },
};
use chrono::NaiveDate;

use super::*;

fn client_params(dni: &str) -> ClientParams {
    ClientParams {
        dni: Some(dni.to_string()),
        full_name: Some("Andres Felipe".to_string()),
        address: None,
        nacionality: Some("Colombia".to_string()),
        birthdate: NaiveDate::from_ymd_opt(1985, 6, 15),
    }
}

/// Expect 201 Created for a valid client
#[tokio::test]
async fn create_returns_created() -> Result<(), TestError> {
    let test = TestBuilder::new().with_record_tables().build().await?;

    let result = create_client(State(test.to_app_state()), Json(client_params("123456"))).await;

    assert!(result.is_ok());
    let resp = result.unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::CREATED);

    Ok(())
}

/// Expect 422 Unprocessable Entity for a duplicate dni
#[tokio::test]
async fn create_rejects_duplicate_dni() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_record_tables()
        .with_mock_client("123456")
        .build()
        .await?;

    let result = create_client(State(test.to_app_state()), Json(client_params("123456"))).await;

    assert!(result.is_err());
    let resp = result.err().unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::UNPROCESSABLE_ENTITY);

    Ok(())
}

#[tokio::test]
async fn index_returns_ok() -> Result<(), TestError> {
    let test = TestBuilder::new().with_record_tables().build().await?;
    test.client().insert_mock_clients(12).await?;

    let result = get_clients(
        State(test.to_app_state()),
        Query(PageParams { page: Some(2) }),
    )
    .await;

    assert!(result.is_ok());
    let resp = result.unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::OK);

    Ok(())
}

/// Expect 404 Not Found when showing a client that doesn't exist
#[tokio::test]
async fn show_returns_not_found() -> Result<(), TestError> {
    let test = TestBuilder::new().with_record_tables().build().await?;

    let result = get_client(State(test.to_app_state()), Path(1)).await;

    assert!(result.is_err());
    let resp = result.err().unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);

    Ok(())
}

#[tokio::test]
async fn update_returns_ok() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_record_tables()
        .with_mock_client("123456")
        .build()
        .await?;
    let client = test.client().insert_mock_client("123456").await?;

    let result = update_client(
        State(test.to_app_state()),
        Path(client.id),
        Json(client_params("123456")),
    )
    .await;

    assert!(result.is_ok());
    let resp = result.unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::OK);

    Ok(())
}

/// Expect 204 No Content when deleting a client with affairs
#[tokio::test]
async fn delete_returns_no_content() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_record_tables()
        .with_mock_affair("123abc", "123456")
        .with_mock_assignment("123abc", "987654")
        .build()
        .await?;
    let client = test.client().insert_mock_client("123456").await?;

    let result = delete_client(State(test.to_app_state()), Path(client.id)).await;

    assert!(result.is_ok());
    let resp = result.unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::NO_CONTENT);

    Ok(())
}
