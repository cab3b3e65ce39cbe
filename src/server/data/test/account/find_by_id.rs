use super::*;

/// Tests finding an existing account by id.
///
/// Expected: Ok(Some(account))
#[tokio::test]
async fn finds_existing_account() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Account)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let created = factory::create_account(db).await?;

    let repo = AccountRepository::new(db);
    let account = repo.find_by_id(created.id).await?;

    assert!(account.is_some());
    let account = account.unwrap();
    assert_eq!(account.id, created.id);
    assert_eq!(account.username, created.username);

    Ok(())
}

/// Tests finding an account that does not exist.
///
/// Expected: Ok(None)
#[tokio::test]
async fn returns_none_for_unknown_id() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Account)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = AccountRepository::new(db);
    let account = repo.find_by_id(999_999).await?;

    assert!(account.is_none());

    Ok(())
}
