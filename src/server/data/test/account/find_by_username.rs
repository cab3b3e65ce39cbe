use super::*;

/// Tests finding an account by its exact username.
///
/// Expected: Ok(Some(account))
#[tokio::test]
async fn finds_account_by_username() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Account)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let created = factory::account::AccountFactory::new(db)
        .username("bob")
        .build()
        .await?;
    factory::create_account(db).await?;

    let repo = AccountRepository::new(db);
    let account = repo.find_by_username("bob").await?;

    assert_eq!(account.map(|a| a.id), Some(created.id));

    Ok(())
}

/// Tests that username lookup is case-sensitive.
///
/// Expected: Ok(None) for a differently cased username
#[tokio::test]
async fn lookup_is_case_sensitive() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Account)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::account::AccountFactory::new(db)
        .username("bob")
        .build()
        .await?;

    let repo = AccountRepository::new(db);
    let account = repo.find_by_username("Bob").await?;

    assert!(account.is_none());

    Ok(())
}
