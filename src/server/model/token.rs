//! Token domain models.
//!
//! Claims carried by issued JWTs and the issued token values handed back to the
//! session manager and controllers.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::model::token::{RefreshedTokenDto, TokenPairDto};

/// Purpose of a token. Verification rejects a token presented for the other purpose.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TokenKind {
    Access,
    Refresh,
}

/// JWT claims.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Claims {
    /// Account id as a string.
    pub sub: String,
    pub iat: i64,
    pub exp: i64,
    /// Unique token id (uuid v4).
    pub jti: String,
    pub token_type: TokenKind,
}

impl Claims {
    /// Parses the subject back into an account id.
    pub fn account_id(&self) -> Option<i32> {
        self.sub.parse().ok()
    }
}

/// A signed token with its expiry.
#[derive(Debug, Clone, PartialEq)]
pub struct IssuedToken {
    pub token: String,
    pub expires_at: DateTime<Utc>,
}

/// Tokens issued by a login.
#[derive(Debug, Clone)]
pub struct TokenPair {
    pub account_id: i32,
    pub access: IssuedToken,
    pub refresh: IssuedToken,
}

impl TokenPair {
    pub fn into_dto(self) -> TokenPairDto {
        TokenPairDto {
            access: self.access.token,
            refresh: self.refresh.token,
            user_id: self.account_id,
        }
    }
}

/// Tokens issued by a refresh. `refresh` is only set when rotation is enabled.
#[derive(Debug, Clone)]
pub struct RefreshedTokens {
    pub access: IssuedToken,
    pub refresh: Option<IssuedToken>,
}

impl RefreshedTokens {
    pub fn into_dto(self) -> RefreshedTokenDto {
        RefreshedTokenDto {
            access: self.access.token,
            refresh: self.refresh.map(|refresh| refresh.token),
        }
    }
}
