use axum::{
    extract::{Query, State},
    http::{HeaderMap, StatusCode},
    response::IntoResponse,
    Json,
};
use axum_extra::extract::cookie::CookieJar;

use crate::{
    model::{
        api::ErrorDto,
        server::{ServerListEntryDto, ServerListQueryDto},
    },
    server::{
        error::AppError,
        middleware::{auth::AuthGuard, session::TokenCookies},
        model::server::ListServersParam,
        service::server::ServerListingService,
        state::AppState,
    },
};

/// Tag for grouping server endpoints in OpenAPI documentation
pub static SERVER_TAG: &str = "server";

/// List servers.
///
/// Narrows the server list by the given options, applied in the order category,
/// by_user, with_num_members, by_serverid, qty. Anonymous callers may list servers
/// but cannot use `by_user` or `by_serverid`.
///
/// # Returns
/// - `200 OK` - Servers ordered by id, with `num_members` when requested
/// - `400 Bad Request` - Unknown server id or invalid `by_serverid`/`qty`
/// - `401 Unauthorized` - Identity-scoped option used without authentication
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    get,
    path = "/api/servers",
    tag = SERVER_TAG,
    params(ServerListQueryDto),
    responses(
        (status = 200, description = "Successfully listed servers", body = Vec<ServerListEntryDto>),
        (status = 400, description = "Invalid listing option", body = ErrorDto),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn list_servers(
    State(state): State<AppState>,
    jar: CookieJar,
    headers: HeaderMap,
    Query(query): Query<ServerListQueryDto>,
) -> Result<impl IntoResponse, AppError> {
    let token = TokenCookies::new(&state.session_config).access_token(&jar, &headers);
    let caller = AuthGuard::new(&state.db, &state.tokens)
        .identify(token.as_deref())
        .await?;

    let param = ListServersParam::from_dto(query);
    let servers = ServerListingService::new(&state.db)
        .list(param, caller.as_ref())
        .await?;

    let servers_dto: Vec<ServerListEntryDto> = servers.into_iter().map(|s| s.into_dto()).collect();

    Ok((StatusCode::OK, Json(servers_dto)))
}
