//! Server listing domain models and parameters.

use crate::{
    model::server::{ServerDto, ServerListEntryDto, ServerListQueryDto, ServerWithCountDto},
    server::error::listing::ListingError,
};

/// Chat server with its category resolved to a name.
#[derive(Debug, Clone, PartialEq)]
pub struct Server {
    pub id: i32,
    pub name: String,
    pub description: Option<String>,
    pub category: String,
    pub owner_id: i32,
}

impl Server {
    pub fn into_dto(self) -> ServerDto {
        ServerDto {
            id: self.id,
            name: self.name,
            description: self.description,
            category: self.category,
            owner: self.owner_id,
        }
    }
}

/// One entry of a listing, annotated with its member count when requested.
#[derive(Debug, Clone, PartialEq)]
pub enum ListedServer {
    Plain(Server),
    WithMemberCount { server: Server, member_count: u64 },
}

impl ListedServer {
    #[cfg(test)]
    pub fn server(&self) -> &Server {
        match self {
            Self::Plain(server) => server,
            Self::WithMemberCount { server, .. } => server,
        }
    }

    #[cfg(test)]
    pub fn member_count(&self) -> Option<u64> {
        match self {
            Self::Plain(_) => None,
            Self::WithMemberCount { member_count, .. } => Some(*member_count),
        }
    }

    pub fn into_dto(self) -> ServerListEntryDto {
        match self {
            Self::Plain(server) => ServerListEntryDto::Server(server.into_dto()),
            Self::WithMemberCount {
                server,
                member_count,
            } => ServerListEntryDto::WithCount(ServerWithCountDto {
                server: server.into_dto(),
                num_members: member_count,
            }),
        }
    }
}

/// Listing options after normalization.
///
/// Empty strings count as absent and boolean options are only enabled by the exact
/// value `true`. `by_serverid` and `qty` stay raw until their stage parses them.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ListServersParam {
    pub category: Option<String>,
    pub by_user: bool,
    pub with_num_members: bool,
    pub by_serverid: Option<String>,
    pub qty: Option<String>,
}

impl ListServersParam {
    pub fn from_dto(dto: ServerListQueryDto) -> Self {
        Self {
            category: non_empty(dto.category),
            by_user: is_true(dto.by_user.as_deref()),
            with_num_members: is_true(dto.with_num_members.as_deref()),
            by_serverid: non_empty(dto.by_serverid),
            qty: non_empty(dto.qty),
        }
    }
}

fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|value| !value.is_empty())
}

fn is_true(value: Option<&str>) -> bool {
    value == Some("true")
}

/// Parses the `by_serverid` option.
pub fn parse_server_id(raw: &str) -> Result<i32, ListingError> {
    raw.trim()
        .parse()
        .map_err(|_| ListingError::InvalidServerId(raw.to_string()))
}

/// Parses the `qty` option as a non-negative count.
///
/// The count must fit a signed 64-bit SQL `LIMIT`.
pub fn parse_quantity(raw: &str) -> Result<u64, ListingError> {
    raw.trim()
        .parse::<i64>()
        .ok()
        .and_then(|qty| u64::try_from(qty).ok())
        .ok_or_else(|| ListingError::InvalidQuantity(raw.to_string()))
}
