//! Tests for the attorney endpoints.

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use bufete::{
    model::{assignment::AssignmentAttributes, attorney::AttorneyParams},
    server::controller::attorney::{
        create_attorney, delete_attorney, edit_attorney, new_attorney, update_attorney,
    },
};

use super::*;

fn attorney_params(dni: &str) -> AttorneyParams {
    AttorneyParams {
        dni: Some(dni.to_string()),
        full_name: Some("Maria Gomez".to_string()),
        address: None,
        nacionality: Some("Argentina".to_string()),
        assignments_attributes: vec![AssignmentAttributes::default()],
    }
}

#[tokio::test]
async fn new_returns_ok() -> Result<(), TestError> {
    let test = TestBuilder::new().build().await?;

    let resp = new_attorney(State(test.to_app_state())).await.into_response();

    assert_eq!(resp.status(), StatusCode::OK);

    Ok(())
}

/// Expect 201 Created for an attorney submitted with the blank form row
#[tokio::test]
async fn create_returns_created() -> Result<(), TestError> {
    let test = TestBuilder::new().with_record_tables().build().await?;

    let result =
        create_attorney(State(test.to_app_state()), Json(attorney_params("987654"))).await;

    assert!(result.is_ok());
    let resp = result.unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::CREATED);

    Ok(())
}

/// Expect 422 Unprocessable Entity when a row refers to a missing affair
#[tokio::test]
async fn create_rejects_missing_affair() -> Result<(), TestError> {
    let test = TestBuilder::new().with_record_tables().build().await?;

    let mut params = attorney_params("987654");
    params.assignments_attributes = vec![AssignmentAttributes {
        affair_id: Some(5),
        ..Default::default()
    }];
    let result = create_attorney(State(test.to_app_state()), Json(params)).await;

    assert!(result.is_err());
    let resp = result.err().unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::UNPROCESSABLE_ENTITY);

    Ok(())
}

#[tokio::test]
async fn edit_returns_not_found() -> Result<(), TestError> {
    let test = TestBuilder::new().with_record_tables().build().await?;

    let result = edit_attorney(State(test.to_app_state()), Path(1)).await;

    assert!(result.is_err());
    let resp = result.err().unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);

    Ok(())
}

/// Expect 404 Not Found when a row targets an assignment of another attorney
#[tokio::test]
async fn update_rejects_foreign_assignment() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_record_tables()
        .with_mock_affair("123abc", "123456")
        .with_mock_assignment("123abc", "111111")
        .with_mock_attorney("987654")
        .build()
        .await?;
    let attorney = test.attorney().insert_mock_attorney("987654").await?;

    let mut params = attorney_params("987654");
    params.assignments_attributes = vec![AssignmentAttributes {
        id: Some(1),
        destroy: true,
        ..Default::default()
    }];
    let result = update_attorney(State(test.to_app_state()), Path(attorney.id), Json(params)).await;

    assert!(result.is_err());
    let resp = result.err().unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);

    Ok(())
}

#[tokio::test]
async fn delete_returns_no_content() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_record_tables()
        .with_mock_affair("123abc", "123456")
        .with_mock_assignment("123abc", "987654")
        .build()
        .await?;
    let attorney = test.attorney().insert_mock_attorney("987654").await?;

    let result = delete_attorney(State(test.to_app_state()), Path(attorney.id)).await;

    assert!(result.is_ok());
    let resp = result.unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::NO_CONTENT);

    Ok(())
}
