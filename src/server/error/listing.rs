use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::model::api::ErrorDto;

#[derive(Error, Debug)]
pub enum ListingError {
    /// An identity-scoped filter was requested by an anonymous caller.
    ///
    /// Carries the name of the filter that required authentication.
    #[error("Authentication credentials were not provided.")]
    AuthenticationRequired(&'static str),

    /// `by_serverid` named a server absent from the narrowed result set.
    #[error("Server with id {0} not found")]
    ServerNotFound(i32),

    /// `by_serverid` is not a valid server identifier.
    #[error("Server value error")]
    InvalidServerId(String),

    /// `qty` is not a non-negative integer.
    #[error("Invalid qty value '{0}'")]
    InvalidQuantity(String),
}

/// Converts listing errors into HTTP responses.
///
/// - `AuthenticationRequired` → 401 Unauthorized
/// - `ServerNotFound` / `InvalidServerId` / `InvalidQuantity` → 400 Bad Request
impl IntoResponse for ListingError {
    fn into_response(self) -> Response {
        let status = match self {
            Self::AuthenticationRequired(filter) => {
                tracing::debug!("Anonymous caller requested {} filter", filter);
                StatusCode::UNAUTHORIZED
            }
            Self::ServerNotFound(_) | Self::InvalidServerId(_) | Self::InvalidQuantity(_) => {
                StatusCode::BAD_REQUEST
            }
        };

        (
            status,
            Json(ErrorDto {
                error: self.to_string(),
            }),
        )
            .into_response()
    }
}
