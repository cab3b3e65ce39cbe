use crate::server::{data::server::ServerRepository, model::server::ListedServer};
use sea_orm::DbErr;
use test_utils::{
    builder::TestBuilder,
    factory::{self, server::ServerFactory},
};


/// Ids of the listed servers in listing order.
fn ids(servers: &[ListedServer]) -> Vec<i32> {
    servers.iter().map(|s| s.server().id).collect()
}
