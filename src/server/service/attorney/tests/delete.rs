use sea_orm::{EntityTrait, PaginatorTrait};

use super::*;

#[tokio::test]
async fn deletes_attorney_and_assignments() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_record_tables()
        .with_mock_affair("aaa111", "123456")
        .with_mock_affair("bbb222", "123456")
        .with_mock_assignment("aaa111", "987654")
        .with_mock_assignment("bbb222", "987654")
        .build()
        .await?;
    let attorney_model = test.attorney().insert_mock_attorney("987654").await?;

    let attorney_service = AttorneyService::new(&test.db);
    let result = attorney_service.delete(attorney_model.id).await;

    assert!(result.is_ok());
    assert_eq!(entity::prelude::Attorney::find().count(&test.db).await?, 0);
    assert_eq!(entity::prelude::Assignment::find().count(&test.db).await?, 0);
    assert_eq!(entity::prelude::Affair::find().count(&test.db).await?, 2);

    Ok(())
}

#[tokio::test]
async fn not_found_for_nonexistent_attorney() -> Result<(), TestError> {
    let test = TestBuilder::new().with_record_tables().build().await?;

    let attorney_service = AttorneyService::new(&test.db);
    let result = attorney_service.delete(1).await;

    assert!(matches!(result, Err(Error::NotFound(_))));

    Ok(())
}
