//! HTTP request handlers.
//!
//! Controllers identify the caller, convert DTOs into parameter models, call the
//! service layer, and convert the resulting domain models back into DTOs.

pub mod account;
pub mod auth;
pub mod server;


use axum::{extract::rejection::JsonRejection, Json};

use crate::server::error::{
    validation::{FieldErrorCode, FieldErrors, NON_FIELD_ERRORS},
    AppError,
};

/// Unwraps a JSON body, reporting a malformed body as a request-wide field error.
fn json_body<T>(payload: Result<Json<T>, JsonRejection>) -> Result<T, AppError> {
    payload
        .map(|Json(body)| body)
        .map_err(|rejection| {
            let mut errors = FieldErrors::new();
            errors.add(NON_FIELD_ERRORS, FieldErrorCode::Invalid, rejection.body_text());
            AppError::Validation(errors)
        })
}
