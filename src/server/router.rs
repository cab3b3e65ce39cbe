use axum::{
    routing::{get, post},
    Router,
};

use crate::server::{
    controller::{
        account::get_account,
        auth::{login, logout, refresh, register},
        server::list_servers,
    },
    docs::openapi,
    state::AppState,
};

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/api/register", post(register))
        .route("/api/token", post(login))
        .route("/api/token/refresh", post(refresh))
        .route("/api/logout", post(logout))
        .route("/api/account", get(get_account))
        .route("/api/servers", get(list_servers))
        .route("/api/openapi.json", get(openapi))
}
