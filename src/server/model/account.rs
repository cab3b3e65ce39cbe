//! Account domain models and parameters.
//!
//! Provides the account domain model used as the authenticated identity, along with the
//! registration and login parameters and their field-level validation.

use chrono::{DateTime, Utc};

use crate::{
    model::{
        account::{AccountDto, RegisterDto},
        token::LoginDto,
    },
    server::error::validation::{FieldErrorCode, FieldErrors},
};

/// Usernames that can never be registered. Matching is exact and case-sensitive.
pub const RESERVED_USERNAMES: [&str; 3] = ["admin", "root", "superuser"];

pub const USERNAME_MAX_LENGTH: usize = 150;

const REQUIRED_MESSAGE: &str = "This field is required.";
const BLANK_MESSAGE: &str = "This field may not be blank.";
const INVALID_USERNAME_MESSAGE: &str = "Enter a valid username. This value may contain only letters, numbers, and @/./+/-/_ characters.";
pub const USERNAME_TAKEN_MESSAGE: &str = "A user with that username already exists.";

/// Registered account acting as the subject of issued tokens.
#[derive(Debug, Clone, PartialEq)]
pub struct Account {
    pub id: i32,
    pub username: String,
    /// Argon2 PHC string.
    pub password_hash: String,
    pub created_at: DateTime<Utc>,
}

impl Account {
    /// Converts an entity model to an account domain model at the repository boundary.
    pub fn from_entity(entity: entity::account::Model) -> Self {
        Self {
            id: entity.id,
            username: entity.username,
            password_hash: entity.password_hash,
            created_at: entity.created_at,
        }
    }

    /// Converts the account to its public DTO. The password hash is never exposed.
    pub fn into_dto(self) -> AccountDto {
        AccountDto {
            id: self.id,
            username: self.username,
        }
    }
}

/// Registration input as received, before validation.
#[derive(Debug, Clone, Default)]
pub struct RegisterAccountParam {
    pub username: Option<String>,
    pub password: Option<String>,
}

impl RegisterAccountParam {
    pub fn from_dto(dto: RegisterDto) -> Self {
        Self {
            username: dto.username.map(|username| username.trim().to_string()),
            password: dto.password,
        }
    }

    /// Collects the format errors of every field.
    ///
    /// Uniqueness is checked against the store by the caller and added to the same set.
    pub fn validate(&self) -> FieldErrors {
        let mut errors = FieldErrors::new();

        match self.username.as_deref() {
            None => errors.add("username", FieldErrorCode::Required, REQUIRED_MESSAGE),
            Some("") => errors.add("username", FieldErrorCode::Blank, BLANK_MESSAGE),
            Some(username) => {
                if username.chars().count() > USERNAME_MAX_LENGTH {
                    errors.add(
                        "username",
                        FieldErrorCode::MaxLength,
                        format!(
                            "Ensure this field has no more than {} characters.",
                            USERNAME_MAX_LENGTH
                        ),
                    );
                }
                if !username.chars().all(is_username_char) {
                    errors.add("username", FieldErrorCode::Invalid, INVALID_USERNAME_MESSAGE);
                }
            }
        }

        match self.password.as_deref() {
            None => errors.add("password", FieldErrorCode::Required, REQUIRED_MESSAGE),
            Some(password) if password.trim().is_empty() => {
                errors.add("password", FieldErrorCode::Blank, BLANK_MESSAGE)
            }
            Some(_) => {}
        }

        errors
    }

    /// Whether the username is one of [`RESERVED_USERNAMES`].
    pub fn is_reserved(&self) -> bool {
        self.username
            .as_deref()
            .is_some_and(|username| RESERVED_USERNAMES.contains(&username))
    }
}

fn is_username_char(c: char) -> bool {
    c.is_alphanumeric() || matches!(c, '@' | '.' | '+' | '-' | '_')
}

/// Validated account data ready for insertion.
#[derive(Debug, Clone)]
pub struct CreateAccountParam {
    pub username: String,
    pub password_hash: String,
}

/// Login credentials.
#[derive(Debug, Clone)]
pub struct LoginParam {
    pub username: String,
    pub password: String,
}

impl LoginParam {
    /// Builds login credentials, reporting missing or blank fields.
    ///
    /// The username is trimmed the same way as at registration.
    pub fn from_dto(dto: LoginDto) -> Result<Self, FieldErrors> {
        let mut errors = FieldErrors::new();

        let username = required_field(
            &mut errors,
            "username",
            dto.username.map(|username| username.trim().to_string()),
        );
        let password = required_field(&mut errors, "password", dto.password);

        match (username, password) {
            (Some(username), Some(password)) if errors.is_empty() => {
                Ok(Self { username, password })
            }
            _ => Err(errors),
        }
    }
}

fn required_field(errors: &mut FieldErrors, field: &str, value: Option<String>) -> Option<String> {
    match value {
        None => {
            errors.add(field, FieldErrorCode::Required, REQUIRED_MESSAGE);
            None
        }
        Some(value) if value.trim().is_empty() => {
            errors.add(field, FieldErrorCode::Blank, BLANK_MESSAGE);
            None
        }
        Some(value) => Some(value),
    }
}
