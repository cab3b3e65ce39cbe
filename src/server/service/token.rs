//! JWT signing and verification.

use chrono::{Duration, Utc};
use jsonwebtoken::{decode, encode, Algorithm, DecodingKey, EncodingKey, Header, Validation};
use uuid::Uuid;

use crate::server::{
    config::SessionConfig,
    error::auth::AuthError,
    model::token::{Claims, IssuedToken, TokenKind},
};

/// Issues and verifies HS256 signed access and refresh tokens.
pub struct TokenCodec {
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
    validation: Validation,
    access_lifetime: Duration,
    refresh_lifetime: Duration,
}

impl TokenCodec {
    pub fn new(config: &SessionConfig) -> Self {
        let mut validation = Validation::new(Algorithm::HS256);
        validation.validate_exp = true;
        validation.leeway = 0;
        validation.set_required_spec_claims(&["exp", "sub"]);

        Self {
            encoding_key: EncodingKey::from_secret(config.signing_secret.as_bytes()),
            decoding_key: DecodingKey::from_secret(config.signing_secret.as_bytes()),
            validation,
            access_lifetime: config.access_token_lifetime,
            refresh_lifetime: config.refresh_token_lifetime,
        }
    }

    /// Signs a new token of `kind` for the account.
    ///
    /// The lifetime is the configured lifetime for `kind`.
    pub fn issue(&self, subject: i32, kind: TokenKind) -> Result<IssuedToken, AuthError> {
        let now = Utc::now();
        let expires_at = now + self.lifetime(kind);

        let claims = Claims {
            sub: subject.to_string(),
            iat: now.timestamp(),
            exp: expires_at.timestamp(),
            jti: Uuid::new_v4().to_string(),
            token_type: kind,
        };

        let token = encode(&Header::new(Algorithm::HS256), &claims, &self.encoding_key)?;

        Ok(IssuedToken { token, expires_at })
    }

    /// Verifies signature, expiry and token type.
    ///
    /// # Returns
    /// - `Ok(Claims)` - Token is valid and of the expected kind
    /// - `Err(AuthError::InvalidToken)` - Any verification failure
    pub fn verify(&self, token: &str, kind: TokenKind) -> Result<Claims, AuthError> {
        let claims = decode::<Claims>(token, &self.decoding_key, &self.validation)
            .map_err(|e| AuthError::InvalidToken(e.to_string()))?
            .claims;

        if claims.token_type != kind {
            return Err(AuthError::InvalidToken(format!(
                "expected {:?} token, got {:?}",
                kind, claims.token_type
            )));
        }

        Ok(claims)
    }

    pub fn lifetime(&self, kind: TokenKind) -> Duration {
        match kind {
            TokenKind::Access => self.access_lifetime,
            TokenKind::Refresh => self.refresh_lifetime,
        }
    }
}
