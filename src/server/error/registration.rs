use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::model::api::ErrorDto;

#[derive(Error, Debug)]
pub enum RegistrationError {
    /// Username is one of the reserved names.
    #[error("Username not allowed")]
    ReservedUsername,

    /// An account with the username already exists.
    #[error("Username already exists")]
    UsernameTaken,
}

/// Both variants map to 409 Conflict with the error message as body.
impl IntoResponse for RegistrationError {
    fn into_response(self) -> Response {
        (
            StatusCode::CONFLICT,
            Json(ErrorDto {
                error: self.to_string(),
            }),
        )
            .into_response()
    }
}
