use std::str::FromStr;

use chrono::Duration;

use crate::server::error::{config::ConfigError, AppError};

const DEFAULT_BIND_ADDR: &str = "0.0.0.0:8000";
const DEFAULT_ACCESS_TOKEN_LIFETIME_SECS: i64 = 5 * 60;
const DEFAULT_REFRESH_TOKEN_LIFETIME_SECS: i64 = 24 * 60 * 60;
const DEFAULT_CORS_ALLOWED_ORIGINS: &str = "http://localhost:5173";

pub const ACCESS_TOKEN_COOKIE: &str = "access_token";
pub const REFRESH_TOKEN_COOKIE: &str = "refresh_token";

pub struct Config {
    pub database_url: String,
    pub bind_addr: String,
    pub cors_allowed_origins: Vec<String>,

    pub jwt_secret: String,
    pub access_token_lifetime: Duration,
    pub refresh_token_lifetime: Duration,
    pub rotate_refresh_tokens: bool,
}

impl Config {
    pub fn from_env() -> Result<Self, AppError> {
        Ok(Self {
            database_url: required("DATABASE_URL")?,
            bind_addr: optional("BIND_ADDR").unwrap_or_else(|| DEFAULT_BIND_ADDR.to_string()),
            cors_allowed_origins: optional("CORS_ALLOWED_ORIGINS")
                .unwrap_or_else(|| DEFAULT_CORS_ALLOWED_ORIGINS.to_string())
                .split(',')
                .map(str::trim)
                .filter(|origin| !origin.is_empty())
                .map(str::to_string)
                .collect(),
            jwt_secret: required("JWT_SECRET")?,
            access_token_lifetime: Duration::seconds(parsed(
                "ACCESS_TOKEN_LIFETIME_SECS",
                DEFAULT_ACCESS_TOKEN_LIFETIME_SECS,
            )?),
            refresh_token_lifetime: Duration::seconds(parsed(
                "REFRESH_TOKEN_LIFETIME_SECS",
                DEFAULT_REFRESH_TOKEN_LIFETIME_SECS,
            )?),
            rotate_refresh_tokens: parsed("ROTATE_REFRESH_TOKENS", false)?,
        })
    }

    /// Builds the session settings injected into the token codec and session manager.
    pub fn session_config(&self) -> SessionConfig {
        SessionConfig {
            access_token_lifetime: self.access_token_lifetime,
            refresh_token_lifetime: self.refresh_token_lifetime,
            rotate_refresh_tokens: self.rotate_refresh_tokens,
            ..SessionConfig::new(self.jwt_secret.clone())
        }
    }
}

/// Settings of the cookie based JWT session protocol.
///
/// Constructed once at startup and shared read-only by every request.
#[derive(Debug, Clone)]
pub struct SessionConfig {
    /// HMAC secret used to sign and verify tokens.
    pub signing_secret: String,
    /// Lifetime of access tokens and of the access token cookie.
    pub access_token_lifetime: Duration,
    /// Lifetime of refresh tokens and of the refresh token cookie.
    pub refresh_token_lifetime: Duration,
    pub access_cookie_name: String,
    pub refresh_cookie_name: String,
    /// Whether a refresh also issues a new refresh token.
    pub rotate_refresh_tokens: bool,
}

impl SessionConfig {
    /// Creates a session config with default lifetimes and cookie names.
    pub fn new(signing_secret: impl Into<String>) -> Self {
        Self {
            signing_secret: signing_secret.into(),
            access_token_lifetime: Duration::seconds(DEFAULT_ACCESS_TOKEN_LIFETIME_SECS),
            refresh_token_lifetime: Duration::seconds(DEFAULT_REFRESH_TOKEN_LIFETIME_SECS),
            access_cookie_name: ACCESS_TOKEN_COOKIE.to_string(),
            refresh_cookie_name: REFRESH_TOKEN_COOKIE.to_string(),
            rotate_refresh_tokens: false,
        }
    }
}

fn required(name: &str) -> Result<String, ConfigError> {
    std::env::var(name).map_err(|_| ConfigError::MissingEnvVar(name.to_string()))
}

fn optional(name: &str) -> Option<String> {
    std::env::var(name).ok().filter(|value| !value.is_empty())
}

fn parsed<T: FromStr>(name: &str, default: T) -> Result<T, ConfigError> {
    match optional(name) {
        Some(value) => value.parse().map_err(|_| ConfigError::InvalidEnvVar {
            name: name.to_string(),
            value,
        }),
        None => Ok(default),
    }
}
