use super::*;

/// Tests refreshing with a valid refresh token.
///
/// Verifies that a new access token is issued and, with rotation disabled, no new
/// refresh token.
///
/// Expected: Ok with access only
#[tokio::test]
async fn issues_new_access_token() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Account)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let account = factory::create_account(db).await?;
    let config = SessionConfig::new("secret");
    let codec = TokenCodec::new(&config);
    let refresh = codec.issue(account.id, TokenKind::Refresh)?;

    let tokens = AuthService::new(db, &codec, &config)
        .refresh(Some(&refresh.token))
        .await?;

    let claims = codec.verify(&tokens.access.token, TokenKind::Access)?;
    assert_eq!(claims.account_id(), Some(account.id));
    assert!(tokens.refresh.is_none());

    Ok(())
}

/// Tests refreshing with rotation enabled.
///
/// Expected: Ok with both a new access and a new refresh token
#[tokio::test]
async fn rotates_refresh_token_when_enabled() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Account)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let account = factory::create_account(db).await?;
    let mut config = SessionConfig::new("secret");
    config.rotate_refresh_tokens = true;
    let codec = TokenCodec::new(&config);
    let refresh = codec.issue(account.id, TokenKind::Refresh)?;

    let tokens = AuthService::new(db, &codec, &config)
        .refresh(Some(&refresh.token))
        .await?;

    let rotated = tokens.refresh.expect("rotation enabled");
    assert_ne!(rotated.token, refresh.token);
    codec.verify(&rotated.token, TokenKind::Refresh)?;

    Ok(())
}

/// Tests refreshing with an access token.
///
/// Expected: Err(AuthError::InvalidToken)
#[tokio::test]
async fn rejects_access_token() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Account)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let account = factory::create_account(db).await?;
    let config = SessionConfig::new("secret");
    let codec = TokenCodec::new(&config);
    let access = codec.issue(account.id, TokenKind::Access)?;

    let result = AuthService::new(db, &codec, &config)
        .refresh(Some(&access.token))
        .await;

    assert!(matches!(
        result,
        Err(AppError::AuthErr(AuthError::InvalidToken(_)))
    ));

    Ok(())
}

/// Tests refreshing without a token.
///
/// Expected: Err(AuthError::MissingRefreshToken)
#[tokio::test]
async fn rejects_missing_token() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Account)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let config = SessionConfig::new("secret");
    let codec = TokenCodec::new(&config);
    let service = AuthService::new(db, &codec, &config);

    assert!(matches!(
        service.refresh(None).await,
        Err(AppError::AuthErr(AuthError::MissingRefreshToken))
    ));
    assert!(matches!(
        service.refresh(Some("")).await,
        Err(AppError::AuthErr(AuthError::MissingRefreshToken))
    ));

    Ok(())
}

/// Tests refreshing for an account that no longer exists.
///
/// Expected: Err(AuthError::AccountNotFound)
#[tokio::test]
async fn rejects_deleted_subject() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Account)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let config = SessionConfig::new("secret");
    let codec = TokenCodec::new(&config);
    let refresh = codec.issue(999_999, TokenKind::Refresh)?;

    let result = AuthService::new(db, &codec, &config)
        .refresh(Some(&refresh.token))
        .await;

    assert!(matches!(
        result,
        Err(AppError::AuthErr(AuthError::AccountNotFound(999_999)))
    ));

    Ok(())
}
