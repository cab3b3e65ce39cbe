use axum::{
    extract::{Query, State},
    http::{HeaderMap, StatusCode},
    response::IntoResponse,
    Json,
};
use axum_extra::extract::cookie::CookieJar;

use crate::{
    model::{
        account::{AccountDto, AccountQueryDto},
        api::ErrorDto,
    },
    server::{
        error::AppError,
        middleware::{auth::AuthGuard, session::TokenCookies},
        service::account::AccountService,
        state::AppState,
    },
};

/// Tag for grouping account endpoints in OpenAPI documentation
pub static ACCOUNT_TAG: &str = "account";

/// Get an account by id.
///
/// # Access Control
/// Requires an authenticated caller.
///
/// # Arguments
/// - `state` - Application state containing the database connection
/// - `jar` / `headers` - Request cookies and headers carrying the access token
/// - `query` - `user_id` of the account to return
///
/// # Returns
/// - `200 OK` - The account
/// - `400 Bad Request` - `user_id` missing or not a number
/// - `401 Unauthorized` - Caller not authenticated
/// - `404 Not Found` - No account with that id
#[utoipa::path(
    get,
    path = "/api/account",
    tag = ACCOUNT_TAG,
    params(AccountQueryDto),
    responses(
        (status = 200, description = "Successfully retrieved account", body = AccountDto),
        (status = 400, description = "Missing or invalid user_id", body = ErrorDto),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 404, description = "Account not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_account(
    State(state): State<AppState>,
    jar: CookieJar,
    headers: HeaderMap,
    Query(query): Query<AccountQueryDto>,
) -> Result<impl IntoResponse, AppError> {
    let token = TokenCookies::new(&state.session_config).access_token(&jar, &headers);
    AuthGuard::new(&state.db, &state.tokens)
        .require(token.as_deref())
        .await?;

    let Some(raw_id) = query.user_id.filter(|id| !id.is_empty()) else {
        return Err(AppError::BadRequest("user_id is required".to_string()));
    };
    let account_id: i32 = raw_id
        .trim()
        .parse()
        .map_err(|_| AppError::BadRequest(format!("Invalid user_id '{}'", raw_id)))?;

    let account = AccountService::new(&state.db)
        .get_by_id(account_id)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("Account {} not found", account_id)))?;

    Ok((StatusCode::OK, Json(account.into_dto())))
}
