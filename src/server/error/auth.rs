use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::{model::api::ErrorDto, server::error::InternalServerError};

#[derive(Error, Debug)]
pub enum AuthError {
    /// Username unknown or password mismatch.
    ///
    /// Both cases share one variant so the response does not reveal which
    /// usernames exist. Results in a 401 Unauthorized response.
    #[error("No active account found with the given credentials")]
    InvalidCredentials,

    /// Token signature, expiry, structure or type check failed.
    ///
    /// The string carries the verification failure for debug logging only.
    #[error("Token is invalid or expired: {0}")]
    InvalidToken(String),

    /// Refresh requested without a token in the body or cookie.
    #[error("No refresh token provided")]
    MissingRefreshToken,

    /// No access token was presented on a route requiring authentication.
    #[error("Authentication credentials were not provided")]
    NotAuthenticated,

    /// Token subject refers to an account that no longer exists.
    #[error("Account {0} referenced by token does not exist")]
    AccountNotFound(i32),

    /// Failed to sign a token.
    ///
    /// Results in a 500 Internal Server Error response.
    #[error("Failed to encode token: {0}")]
    TokenEncoding(#[from] jsonwebtoken::errors::Error),

    /// Failed to hash or parse a stored password hash.
    ///
    /// Results in a 500 Internal Server Error response.
    #[error("Password hashing failed: {0}")]
    PasswordHash(String),
}

/// Converts authentication errors into HTTP responses.
///
/// Maps authentication errors to appropriate HTTP status codes and user-friendly error messages:
/// - `InvalidCredentials` → 401 with "No active account found with the given credentials"
/// - `InvalidToken` / `MissingRefreshToken` / `AccountNotFound` → 401 with "Token is invalid or expired"
/// - `NotAuthenticated` → 401 with "Authentication credentials were not provided."
/// - `TokenEncoding` / `PasswordHash` → 500 Internal Server Error with generic message
///
/// Token failures are logged at debug level for diagnostics while the client-facing message
/// stays generic.
impl IntoResponse for AuthError {
    fn into_response(self) -> Response {
        match self {
            Self::InvalidCredentials => unauthorized(self.to_string()),
            Self::NotAuthenticated => {
                unauthorized("Authentication credentials were not provided.".to_string())
            }
            Self::InvalidToken(_) | Self::MissingRefreshToken | Self::AccountNotFound(_) => {
                tracing::debug!("{}", self);
                unauthorized("Token is invalid or expired".to_string())
            }
            err @ (Self::TokenEncoding(_) | Self::PasswordHash(_)) => {
                InternalServerError(err).into_response()
            }
        }
    }
}

fn unauthorized(error: String) -> Response {
    (StatusCode::UNAUTHORIZED, Json(ErrorDto { error })).into_response()
}
