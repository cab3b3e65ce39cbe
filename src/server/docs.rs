use axum::Json;
use utoipa::OpenApi;

use crate::{
    model::{
        account::{AccountDto, RegisterDto},
        api::{ErrorDto, FieldErrorsDto},
        server::{ServerDto, ServerListEntryDto, ServerWithCountDto},
        token::{LoginDto, RefreshDto, RefreshedTokenDto, TokenPairDto},
    },
    server::controller::{account, auth, server},
};

#[derive(OpenApi)]
#[openapi(
    paths(
        auth::register,
        auth::login,
        auth::refresh,
        auth::logout,
        account::get_account,
        server::list_servers,
    ),
    components(schemas(
        AccountDto,
        RegisterDto,
        ErrorDto,
        FieldErrorsDto,
        LoginDto,
        TokenPairDto,
        RefreshDto,
        RefreshedTokenDto,
        ServerDto,
        ServerWithCountDto,
        ServerListEntryDto,
    )),
    tags(
        (name = "auth", description = "Registration and cookie based JWT sessions"),
        (name = "account", description = "Account lookup"),
        (name = "server", description = "Server listing"),
    )
)]
pub struct ApiDoc;

/// GET /api/openapi.json - OpenAPI document of the HTTP API
pub async fn openapi() -> Json<utoipa::openapi::OpenApi> {
    Json(ApiDoc::openapi())
}
