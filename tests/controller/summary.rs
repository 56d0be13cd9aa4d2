use axum::{extract::State, http::StatusCode, response::IntoResponse};
use bufete::server::controller::summary::get_summary;

use super::*;

#[tokio::test]
async fn summary_returns_ok() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_record_tables()
        .with_mock_affair("123abc", "123456")
        .build()
        .await?;

    let result = get_summary(State(test.to_app_state())).await;

    assert!(result.is_ok());
    let resp = result.unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::OK);

    Ok(())
}
