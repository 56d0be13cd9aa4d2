//! Tests for the assignment endpoints.

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use bufete::{
    model::assignment::AssignmentParams,
    server::controller::assignment::{create_assignment, delete_assignment, get_assignment},
};

use super::*;

/// Expect 201 Created when linking an affair to an attorney
#[tokio::test]
async fn create_returns_created() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_record_tables()
        .with_mock_affair("123abc", "123456")
        .with_mock_attorney("987654")
        .build()
        .await?;
    let (affair, _) = test
        .affair()
        .insert_affair_with_mock_client("123abc", "123456")
        .await?;
    let attorney = test.attorney().insert_mock_attorney("987654").await?;

    let result = create_assignment(
        State(test.to_app_state()),
        Json(AssignmentParams {
            affair_id: Some(affair.id),
            attorney_id: Some(attorney.id),
        }),
    )
    .await;

    assert!(result.is_ok());
    let resp = result.unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::CREATED);

    Ok(())
}

/// Expect 422 Unprocessable Entity when the pair is already assigned
#[tokio::test]
async fn create_rejects_repeated_pair() -> Result<(), TestError> {
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
    let attorney = test.attorney().insert_mock_attorney("987654").await?;

    let result = create_assignment(
        State(test.to_app_state()),
        Json(AssignmentParams {
            affair_id: Some(affair.id),
            attorney_id: Some(attorney.id),
        }),
    )
    .await;

    assert!(result.is_err());
    let resp = result.err().unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::UNPROCESSABLE_ENTITY);

    Ok(())
}

#[tokio::test]
async fn show_returns_not_found() -> Result<(), TestError> {
    let test = TestBuilder::new().with_record_tables().build().await?;

    let result = get_assignment(State(test.to_app_state()), Path(1)).await;

    assert!(result.is_err());
    let resp = result.err().unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);

    Ok(())
}

#[tokio::test]
async fn delete_returns_not_found() -> Result<(), TestError> {
    let test = TestBuilder::new().with_record_tables().build().await?;

    let result = delete_assignment(State(test.to_app_state()), Path(1)).await;

    assert!(result.is_err());
    let resp = result.err().unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);

    Ok(())
}
