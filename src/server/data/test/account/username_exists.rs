use super::*;

/// Tests detecting a taken username.
///
/// Expected: Ok(true)
#[tokio::test]
async fn returns_true_when_username_taken() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Account)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::account::AccountFactory::new(db)
        .username("carol")
        .build()
        .await?;

    let repo = AccountRepository::new(db);

    assert!(repo.username_exists("carol").await?);

    Ok(())
}

/// Tests detecting a free username.
///
/// Expected: Ok(false)
#[tokio::test]
async fn returns_false_when_username_free() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Account)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::create_account(db).await?;

    let repo = AccountRepository::new(db);

    assert!(!repo.username_exists("carol").await?);

    Ok(())
}
