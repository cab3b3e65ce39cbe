//! Field-level validation errors.
//!
//! Validation collects every failure per field before responding, so a single 400
//! response lists all problems with the submitted body.

use std::collections::BTreeMap;

use crate::model::api::FieldErrorsDto;

/// Key used for errors not tied to a single field.
pub const NON_FIELD_ERRORS: &str = "non_field_errors";

/// Classification of a single field failure.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldErrorCode {
    Required,
    Blank,
    Invalid,
    MaxLength,
    Unique,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldError {
    pub code: FieldErrorCode,
    pub message: String,
}

/// Validation errors keyed by field name.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FieldErrors(BTreeMap<String, Vec<FieldError>>);

impl FieldErrors {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&mut self, field: &str, code: FieldErrorCode, message: impl Into<String>) {
        self.0
            .entry(field.to_string())
            .or_default()
            .push(FieldError {
                code,
                message: message.into(),
            });
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Whether `field` has an error with the given code.
    pub fn has(&self, field: &str, code: FieldErrorCode) -> bool {
        self.0
            .get(field)
            .is_some_and(|errors| errors.iter().any(|error| error.code == code))
    }

    /// Whether any error is keyed on `field`.
    pub fn contains_field(&self, field: &str) -> bool {
        self.0.contains_key(field)
    }

    pub fn into_dto(self) -> FieldErrorsDto {
        FieldErrorsDto(
            self.0
                .into_iter()
                .map(|(field, errors)| {
                    (
                        field,
                        errors.into_iter().map(|error| error.message).collect(),
                    )
                })
                .collect(),
        )
    }
}
