use super::*;

/// Tests creating a new account.
///
/// Verifies that the repository inserts the account and returns the domain model
/// with a generated id and the stored hash.
///
/// Expected: Ok with account matching the input
#[tokio::test]
async fn creates_account() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Account)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = AccountRepository::new(db);
    let account = repo
        .create(CreateAccountParam {
            username: "alice".to_string(),
            password_hash: "$argon2id$fake".to_string(),
        })
        .await?;

    assert!(account.id > 0);
    assert_eq!(account.username, "alice");
    assert_eq!(account.password_hash, "$argon2id$fake");

    Ok(())
}

/// Tests creating an account with a taken username.
///
/// Verifies that the unique constraint on the username column rejects the insert
/// with a unique constraint violation.
///
/// Expected: Err(DbErr) classified as a unique violation
#[tokio::test]
async fn rejects_duplicate_username() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Account)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::account::AccountFactory::new(db)
        .username("alice")
        .build()
        .await?;

    let repo = AccountRepository::new(db);
    let result = repo
        .create(CreateAccountParam {
            username: "alice".to_string(),
            password_hash: "hash".to_string(),
        })
        .await;

    let err = result.unwrap_err();
    assert!(matches!(
        err.sql_err(),
        Some(sea_orm::SqlErr::UniqueConstraintViolation(_))
    ));

    Ok(())
}
