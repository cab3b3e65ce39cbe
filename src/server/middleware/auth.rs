use sea_orm::DatabaseConnection;

use crate::server::{
    data::account::AccountRepository,
    error::{auth::AuthError, AppError},
    model::{account::Account, token::TokenKind},
    service::token::TokenCodec,
};

/// Resolves the caller of a request from its access token.
pub struct AuthGuard<'a> {
    db: &'a DatabaseConnection,
    codec: &'a TokenCodec,
}

impl<'a> AuthGuard<'a> {
    pub fn new(db: &'a DatabaseConnection, codec: &'a TokenCodec) -> Self {
        Self { db, codec }
    }

    /// Requires a valid access token for an existing account.
    ///
    /// # Returns
    /// - `Ok(Account)` - The authenticated caller
    /// - `Err(AuthError::NotAuthenticated)` - No token presented
    /// - `Err(AuthError::InvalidToken)` - Token failed verification
    /// - `Err(AuthError::AccountNotFound)` - Token subject no longer exists
    pub async fn require(&self, token: Option<&str>) -> Result<Account, AppError> {
        let Some(token) = token else {
            return Err(AuthError::NotAuthenticated.into());
        };

        let claims = self.codec.verify(token, TokenKind::Access)?;
        let Some(account_id) = claims.account_id() else {
            return Err(AuthError::InvalidToken(format!("invalid subject {}", claims.sub)).into());
        };

        let Some(account) = AccountRepository::new(self.db)
            .find_by_id(account_id)
            .await?
        else {
            return Err(AuthError::AccountNotFound(account_id).into());
        };

        Ok(account)
    }

    /// Resolves the caller if a valid token is presented.
    ///
    /// Missing or invalid tokens yield an anonymous caller; only database errors fail.
    pub async fn identify(&self, token: Option<&str>) -> Result<Option<Account>, AppError> {
        match self.require(token).await {
            Ok(account) => Ok(Some(account)),
            Err(AppError::AuthErr(err)) => {
                tracing::debug!("Treating caller as anonymous: {}", err);
                Ok(None)
            }
            Err(err) => Err(err),
        }
    }
}
