//! Session manager: registration, login and token refresh.
//!
//! Logout has no server-side state to change and is handled entirely by clearing
//! cookies in the controller.

use sea_orm::{DatabaseConnection, SqlErr};

use crate::server::{
    config::SessionConfig,
    data::account::AccountRepository,
    error::{
        auth::AuthError,
        registration::RegistrationError,
        validation::{FieldErrorCode, NON_FIELD_ERRORS},
        AppError,
    },
    model::{
        account::{
            Account, CreateAccountParam, LoginParam, RegisterAccountParam, USERNAME_TAKEN_MESSAGE,
        },
        token::{RefreshedTokens, TokenKind, TokenPair},
    },
    service::token::TokenCodec,
    util::password::{hash_password, verify_password},
};

pub struct AuthService<'a> {
    db: &'a DatabaseConnection,
    codec: &'a TokenCodec,
    config: &'a SessionConfig,
}

impl<'a> AuthService<'a> {
    /// Creates a new AuthService instance.
    ///
    /// # Arguments
    /// - `db` - Reference to the database connection
    /// - `codec` - Token codec used to sign and verify tokens
    /// - `config` - Session settings (refresh rotation)
    pub fn new(db: &'a DatabaseConnection, codec: &'a TokenCodec, config: &'a SessionConfig) -> Self {
        Self { db, codec, config }
    }

    /// Registers a new account.
    ///
    /// Field validation runs first, including the uniqueness check against the store.
    /// A username uniqueness failure without any request-wide error is reported as a
    /// conflict; every other validation failure is returned field by field. Reserved
    /// usernames are rejected only once the input is otherwise valid.
    ///
    /// # Returns
    /// - `Ok(Account)` - The created account
    /// - `Err(AppError::RegistrationErr(UsernameTaken))` - Username already registered
    /// - `Err(AppError::RegistrationErr(ReservedUsername))` - Username is reserved
    /// - `Err(AppError::Validation)` - Missing, blank or malformed fields
    /// - `Err(AppError::DbErr)` - Database error
    pub async fn register(&self, param: RegisterAccountParam) -> Result<Account, AppError> {
        let repo = AccountRepository::new(self.db);

        let mut errors = param.validate();
        if let Some(username) = param.username.as_deref() {
            if !errors.contains_field("username") && repo.username_exists(username).await? {
                errors.add("username", FieldErrorCode::Unique, USERNAME_TAKEN_MESSAGE);
            }
        }

        if !errors.is_empty() {
            if errors.has("username", FieldErrorCode::Unique)
                && !errors.contains_field(NON_FIELD_ERRORS)
            {
                return Err(RegistrationError::UsernameTaken.into());
            }
            return Err(AppError::Validation(errors));
        }

        if param.is_reserved() {
            tracing::warn!("Rejected registration of reserved username {:?}", param.username);
            return Err(RegistrationError::ReservedUsername.into());
        }

        let (Some(username), Some(password)) = (param.username, param.password) else {
            return Err(AppError::InternalError(
                "Registration fields missing after validation".to_string(),
            ));
        };

        let password_hash = hash_password(&password)?;

        let account = repo
            .create(CreateAccountParam {
                username,
                password_hash,
            })
            .await
            .map_err(|err| match err.sql_err() {
                Some(SqlErr::UniqueConstraintViolation(_)) => {
                    AppError::from(RegistrationError::UsernameTaken)
                }
                _ => AppError::from(err),
            })?;

        tracing::info!("Registered account {} ({})", account.id, account.username);

        Ok(account)
    }

    /// Verifies credentials and issues an access and refresh token.
    ///
    /// Unknown usernames and wrong passwords fail identically.
    pub async fn login(&self, param: LoginParam) -> Result<TokenPair, AppError> {
        let repo = AccountRepository::new(self.db);

        let Some(account) = repo.find_by_username(&param.username).await? else {
            return Err(AuthError::InvalidCredentials.into());
        };

        if !verify_password(&param.password, &account.password_hash) {
            return Err(AuthError::InvalidCredentials.into());
        }

        let pair = TokenPair {
            account_id: account.id,
            access: self.codec.issue(account.id, TokenKind::Access)?,
            refresh: self.codec.issue(account.id, TokenKind::Refresh)?,
        };

        tracing::info!("Account {} logged in", account.id);

        Ok(pair)
    }

    /// Exchanges a refresh token for a new access token.
    ///
    /// A new refresh token is also issued when rotation is enabled.
    ///
    /// # Returns
    /// - `Ok(RefreshedTokens)` - Newly issued tokens
    /// - `Err(AuthError::MissingRefreshToken)` - No token provided
    /// - `Err(AuthError::InvalidToken)` - Bad signature, expired, or not a refresh token
    /// - `Err(AuthError::AccountNotFound)` - Token subject no longer exists
    pub async fn refresh(&self, refresh_token: Option<&str>) -> Result<RefreshedTokens, AppError> {
        let Some(refresh_token) = refresh_token.filter(|token| !token.is_empty()) else {
            return Err(AuthError::MissingRefreshToken.into());
        };

        let claims = self.codec.verify(refresh_token, TokenKind::Refresh)?;
        let Some(account_id) = claims.account_id() else {
            return Err(AuthError::InvalidToken(format!("invalid subject {}", claims.sub)).into());
        };

        let repo = AccountRepository::new(self.db);
        if repo.find_by_id(account_id).await?.is_none() {
            return Err(AuthError::AccountNotFound(account_id).into());
        }

        let refresh = if self.config.rotate_refresh_tokens {
            Some(self.codec.issue(account_id, TokenKind::Refresh)?)
        } else {
            None
        };

        Ok(RefreshedTokens {
            access: self.codec.issue(account_id, TokenKind::Access)?,
            refresh,
        })
    }
}
