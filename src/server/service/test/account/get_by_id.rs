use super::*;

/// Tests looking up an existing account.
///
/// Expected: Ok(Some(account))
#[tokio::test]
async fn returns_existing_account() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Account)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let created = factory::create_account(db).await?;

    let account = AccountService::new(db).get_by_id(created.id).await?;

    assert_eq!(account.map(|a| a.username), Some(created.username));

    Ok(())
}

/// Tests looking up an unknown account.
///
/// Expected: Ok(None)
#[tokio::test]
async fn returns_none_for_unknown_account() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Account)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let account = AccountService::new(db).get_by_id(42).await?;

    assert!(account.is_none());

    Ok(())
}
