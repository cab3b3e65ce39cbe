use super::*;

/// Tests logging in with valid credentials.
///
/// Verifies that both tokens are issued for the account and verify with their kind.
///
/// Expected: Ok(TokenPair)
#[tokio::test]
async fn issues_token_pair() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Account)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let account = factory::account::create_account_with_password(db, "alice", "hunter22").await?;
    let config = SessionConfig::new("secret");
    let codec = TokenCodec::new(&config);

    let pair = AuthService::new(db, &codec, &config)
        .login(login_param("alice", "hunter22"))
        .await?;

    assert_eq!(pair.account_id, account.id);
    let access = codec.verify(&pair.access.token, TokenKind::Access)?;
    let refresh = codec.verify(&pair.refresh.token, TokenKind::Refresh)?;
    assert_eq!(access.account_id(), Some(account.id));
    assert_eq!(refresh.account_id(), Some(account.id));
    assert!(pair.refresh.expires_at > pair.access.expires_at);

    Ok(())
}

/// Tests logging in with a wrong password.
///
/// Expected: Err(AuthError::InvalidCredentials)
#[tokio::test]
async fn rejects_wrong_password() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Account)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    factory::account::create_account_with_password(db, "alice", "hunter22").await?;
    let config = SessionConfig::new("secret");
    let codec = TokenCodec::new(&config);

    let result = AuthService::new(db, &codec, &config)
        .login(login_param("alice", "wrong"))
        .await;

    assert!(matches!(
        result,
        Err(AppError::AuthErr(AuthError::InvalidCredentials))
    ));

    Ok(())
}

/// Tests logging in with an unknown username.
///
/// Expected: Err(AuthError::InvalidCredentials), same as a wrong password
#[tokio::test]
async fn rejects_unknown_username() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Account)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let config = SessionConfig::new("secret");
    let codec = TokenCodec::new(&config);

    let result = AuthService::new(db, &codec, &config)
        .login(login_param("nobody", "pw"))
        .await;

    assert!(matches!(
        result,
        Err(AppError::AuthErr(AuthError::InvalidCredentials))
    ));

    Ok(())
}

/// Tests logging in with the padded username used at registration.
///
/// Registration stores the trimmed username, so the same padded input must log in.
///
/// Expected: Ok(TokenPair) for the registered account
#[tokio::test]
async fn accepts_username_padded_like_registration() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Account)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let config = SessionConfig::new("secret");
    let codec = TokenCodec::new(&config);
    let service = AuthService::new(db, &codec, &config);

    let account = service.register(register_param(" bob ", "hunter22")).await?;
    assert_eq!(account.username, "bob");

    let pair = service.login(login_param(" bob ", "hunter22")).await?;

    assert_eq!(pair.account_id, account.id);

    Ok(())
}
