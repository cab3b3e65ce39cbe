use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};

/// Query string accepted by the server listing endpoint.
///
/// Values are kept as raw strings; each one is interpreted by the listing stage that
/// consumes it so that failures surface in stage order.
#[derive(Debug, Clone, Default, Serialize, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct ServerListQueryDto {
    /// Exact category name to filter by.
    pub category: Option<String>,
    /// Maximum number of servers to return.
    pub qty: Option<String>,
    /// `true` to only return servers the caller is a member of.
    pub by_user: Option<String>,
    /// Id of a single server to return.
    pub by_serverid: Option<String>,
    /// `true` to include the member count of each server.
    pub with_num_members: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct ServerDto {
    pub id: i32,
    pub name: String,
    pub description: Option<String>,
    /// Name of the server's category.
    pub category: String,
    /// Account id of the server's owner.
    pub owner: i32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct ServerWithCountDto {
    #[serde(flatten)]
    pub server: ServerDto,
    pub num_members: u64,
}

/// One entry of a server listing.
///
/// `WithCount` is listed first so that deserialization prefers it when `num_members`
/// is present.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(untagged)]
pub enum ServerListEntryDto {
    WithCount(ServerWithCountDto),
    Server(ServerDto),
}
