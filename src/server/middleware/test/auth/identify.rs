use super::*;

/// Tests identifying a caller with a valid token.
///
/// Expected: Ok(Some(account))
#[tokio::test]
async fn identifies_authenticated_caller() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Account)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let account = factory::create_account(db).await?;
    let codec = TokenCodec::new(&SessionConfig::new("secret"));
    let token = codec.issue(account.id, TokenKind::Access)?;

    let caller = AuthGuard::new(db, &codec)
        .identify(Some(&token.token))
        .await?;

    assert_eq!(caller.map(|c| c.id), Some(account.id));

    Ok(())
}

/// Tests identifying a caller with a missing or garbage token.
///
/// Expected: Ok(None) in both cases
#[tokio::test]
async fn treats_missing_or_invalid_token_as_anonymous() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Account)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let codec = TokenCodec::new(&SessionConfig::new("secret"));
    let guard = AuthGuard::new(db, &codec);

    assert!(guard.identify(None).await?.is_none());
    assert!(guard.identify(Some("not.a.token")).await?.is_none());

    Ok(())
}
