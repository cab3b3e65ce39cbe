use axum::{
    extract::{rejection::JsonRejection, State},
    http::{HeaderMap, StatusCode},
    response::IntoResponse,
    Json,
};
use axum_extra::extract::cookie::CookieJar;

use crate::{
    model::{
        account::{AccountDto, RegisterDto},
        api::{ErrorDto, FieldErrorsDto},
        token::{LoginDto, RefreshDto, RefreshedTokenDto, TokenPairDto},
    },
    server::{
        controller::json_body,
        error::AppError,
        middleware::session::{TokenCookies, WithTokenCookies},
        model::account::{LoginParam, RegisterAccountParam},
        service::auth::AuthService,
        state::AppState,
    },
};

/// Tag for grouping authentication endpoints in OpenAPI documentation
pub static AUTH_TAG: &str = "auth";

/// Register a new account.
///
/// Validates the submitted username and password and creates the account. Reserved
/// and already registered usernames are rejected with a conflict.
///
/// # Arguments
/// - `state` - Application state containing the database connection
/// - `payload` - Registration data (username, password)
///
/// # Returns
/// - `201 Created` - Account created
/// - `400 Bad Request` - Field validation errors
/// - `409 Conflict` - Username reserved or already taken
/// - `500 Internal Server Error` - Database or hashing error
#[utoipa::path(
    post,
    path = "/api/register",
    tag = AUTH_TAG,
    request_body = RegisterDto,
    responses(
        (status = 201, description = "Successfully registered account", body = AccountDto),
        (status = 400, description = "Invalid registration data", body = FieldErrorsDto),
        (status = 409, description = "Username not allowed or already exists", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn register(
    State(state): State<AppState>,
    payload: Result<Json<RegisterDto>, JsonRejection>,
) -> Result<impl IntoResponse, AppError> {
    let param = RegisterAccountParam::from_dto(json_body(payload)?);

    let service = AuthService::new(&state.db, &state.tokens, &state.session_config);
    let account = service.register(param).await?;

    Ok((StatusCode::CREATED, Json(account.into_dto())))
}

/// Log in with username and password.
///
/// Issues an access and refresh token, returned in the body and set as cookies.
///
/// # Returns
/// - `200 OK` - Tokens issued, `access_token` and `refresh_token` cookies set
/// - `400 Bad Request` - Missing or blank credentials
/// - `401 Unauthorized` - Unknown username or wrong password
/// - `500 Internal Server Error` - Database or token signing error
#[utoipa::path(
    post,
    path = "/api/token",
    tag = AUTH_TAG,
    request_body = LoginDto,
    responses(
        (status = 200, description = "Successfully logged in", body = TokenPairDto),
        (status = 400, description = "Missing credentials", body = FieldErrorsDto),
        (status = 401, description = "Invalid credentials", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn login(
    State(state): State<AppState>,
    payload: Result<Json<LoginDto>, JsonRejection>,
) -> Result<impl IntoResponse, AppError> {
    let param = LoginParam::from_dto(json_body(payload)?).map_err(AppError::Validation)?;

    let service = AuthService::new(&state.db, &state.tokens, &state.session_config);
    let tokens = service.login(param).await?;

    Ok(WithTokenCookies::new(
        tokens.into_dto(),
        state.session_config.clone(),
    ))
}

/// Refresh the access token.
///
/// Reads the refresh token from the body, falling back to the `refresh_token` cookie.
/// A body-less request is treated as an empty body.
///
/// # Returns
/// - `200 OK` - New access token (and refresh token when rotation is enabled) in body and cookies
/// - `401 Unauthorized` - Missing, invalid, expired or wrong-type refresh token
/// - `500 Internal Server Error` - Database or token signing error
#[utoipa::path(
    post,
    path = "/api/token/refresh",
    tag = AUTH_TAG,
    request_body = RefreshDto,
    responses(
        (status = 200, description = "Successfully refreshed tokens", body = RefreshedTokenDto),
        (status = 401, description = "Refresh token invalid or expired", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn refresh(
    State(state): State<AppState>,
    jar: CookieJar,
    payload: Result<Json<RefreshDto>, JsonRejection>,
) -> Result<impl IntoResponse, AppError> {
    let body = match payload {
        Err(JsonRejection::MissingJsonContentType(_)) => RefreshDto::default(),
        payload => json_body(payload)?,
    };

    let refresh_token = body
        .refresh
        .or_else(|| TokenCookies::new(&state.session_config).refresh_token(&jar));

    let service = AuthService::new(&state.db, &state.tokens, &state.session_config);
    let tokens = service.refresh(refresh_token.as_deref()).await?;

    Ok(WithTokenCookies::new(
        tokens.into_dto(),
        state.session_config.clone(),
    ))
}

/// Log out.
///
/// Clears both token cookies. Always succeeds, whether or not a session existed.
///
/// # Returns
/// - `200 OK` - Cookies cleared
#[utoipa::path(
    post,
    path = "/api/logout",
    tag = AUTH_TAG,
    responses(
        (status = 200, description = "Successfully logged out", body = String)
    ),
)]
pub async fn logout(
    State(state): State<AppState>,
    jar: CookieJar,
    headers: HeaderMap,
) -> impl IntoResponse {
    let cookies = TokenCookies::new(&state.session_config);
    if cookies.access_token(&jar, &headers).is_some() {
        tracing::debug!("Clearing token cookies of an active session");
    }

    (StatusCode::OK, cookies.clear(jar), Json("Logged out successfully"))
}
