//! Token cookie handling.
//!
//! Tokens travel as cookies so the browser client never stores them itself. This module
//! reads incoming tokens and writes, refreshes and clears the token cookies, with the
//! attributes the cross-origin client needs: `Path=/`, `SameSite=None`, `Secure`, and
//! readable from script (not `HttpOnly`).
//!
//! # Response hook
//!
//! `WithTokenCookies` wraps a token payload and sets the matching cookies when the
//! response is built. Only the login and refresh handlers return it.

use std::sync::Arc;

use axum::{
    http::{header, HeaderMap, StatusCode},
    response::{IntoResponse, Response},
    Json,
};
use axum_extra::extract::cookie::{Cookie, CookieJar, SameSite};
use serde::Serialize;
use time::OffsetDateTime;

use crate::{
    model::token::{RefreshedTokenDto, TokenPairDto},
    server::config::SessionConfig,
};

const BEARER_PREFIX: &str = "Bearer ";

/// Reads and writes the access and refresh token cookies.
pub struct TokenCookies<'a> {
    config: &'a SessionConfig,
}

impl<'a> TokenCookies<'a> {
    pub fn new(config: &'a SessionConfig) -> Self {
        Self { config }
    }

    /// Access token from the access cookie, else from an `Authorization: Bearer` header.
    pub fn access_token(&self, jar: &CookieJar, headers: &HeaderMap) -> Option<String> {
        jar.get(&self.config.access_cookie_name)
            .map(|cookie| cookie.value().to_string())
            .filter(|token| !token.is_empty())
            .or_else(|| bearer_token(headers))
    }

    /// Refresh token from the refresh cookie.
    pub fn refresh_token(&self, jar: &CookieJar) -> Option<String> {
        jar.get(&self.config.refresh_cookie_name)
            .map(|cookie| cookie.value().to_string())
            .filter(|token| !token.is_empty())
    }

    pub fn set_access(&self, jar: CookieJar, token: &str) -> CookieJar {
        jar.add(self.cookie(
            self.config.access_cookie_name.clone(),
            token.to_string(),
            self.config.access_token_lifetime.num_seconds(),
        ))
    }

    pub fn set_refresh(&self, jar: CookieJar, token: &str) -> CookieJar {
        jar.add(self.cookie(
            self.config.refresh_cookie_name.clone(),
            token.to_string(),
            self.config.refresh_token_lifetime.num_seconds(),
        ))
    }

    /// Overwrites both cookies with empty, already expired values.
    pub fn clear(&self, jar: CookieJar) -> CookieJar {
        [
            self.config.access_cookie_name.clone(),
            self.config.refresh_cookie_name.clone(),
        ]
        .into_iter()
        .fold(jar, |jar, name| {
            let mut cookie = self.cookie(name, String::new(), 0);
            cookie.set_expires(OffsetDateTime::UNIX_EPOCH);
            jar.add(cookie)
        })
    }

    fn cookie(&self, name: String, value: String, max_age_secs: i64) -> Cookie<'static> {
        Cookie::build((name, value))
            .path("/")
            .http_only(false)
            .secure(true)
            .same_site(SameSite::None)
            .max_age(time::Duration::seconds(max_age_secs))
            .build()
    }
}

fn bearer_token(headers: &HeaderMap) -> Option<String> {
    let value = headers.get(header::AUTHORIZATION)?.to_str().ok()?;
    let token = value.strip_prefix(BEARER_PREFIX)?.trim();

    (!token.is_empty()).then(|| token.to_string())
}

/// Response payloads that carry tokens to mirror into cookies.
pub trait TokenPayload {
    fn access(&self) -> Option<&str>;
    fn refresh(&self) -> Option<&str>;
}

impl TokenPayload for TokenPairDto {
    fn access(&self) -> Option<&str> {
        Some(&self.access)
    }

    fn refresh(&self) -> Option<&str> {
        Some(&self.refresh)
    }
}

impl TokenPayload for RefreshedTokenDto {
    fn access(&self) -> Option<&str> {
        Some(&self.access)
    }

    fn refresh(&self) -> Option<&str> {
        self.refresh.as_deref()
    }
}

/// JSON token payload that also sets a cookie for every token it contains.
pub struct WithTokenCookies<T> {
    payload: T,
    config: Arc<SessionConfig>,
}

impl<T> WithTokenCookies<T> {
    pub fn new(payload: T, config: Arc<SessionConfig>) -> Self {
        Self { payload, config }
    }
}

impl<T: TokenPayload + Serialize> IntoResponse for WithTokenCookies<T> {
    fn into_response(self) -> Response {
        let cookies = TokenCookies::new(&self.config);

        let mut jar = CookieJar::new();
        if let Some(refresh) = self.payload.refresh() {
            jar = cookies.set_refresh(jar, refresh);
        }
        if let Some(access) = self.payload.access() {
            jar = cookies.set_access(jar, access);
        }

        (StatusCode::OK, jar, Json(self.payload)).into_response()
    }
}
