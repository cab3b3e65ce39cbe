//! Server listing engine.
//!
//! Runs the listing stages in their fixed order, parsing each option only when its
//! stage is reached so that the first failing stage determines the error.

use sea_orm::DatabaseConnection;

use crate::server::{
    data::server::ServerRepository,
    error::{listing::ListingError, AppError},
    model::{
        account::Account,
        server::{parse_quantity, parse_server_id, ListServersParam, ListedServer},
    },
};

pub struct ServerListingService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> ServerListingService<'a> {
    /// Creates a new ServerListingService instance.
    ///
    /// # Arguments
    /// - `db` - Reference to the database connection
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Lists servers for the given options.
    ///
    /// Stages: category → by_user → with_num_members → by_serverid → qty.
    ///
    /// # Arguments
    /// - `param` - Normalized listing options
    /// - `caller` - Authenticated account, or `None` for anonymous callers
    ///
    /// # Returns
    /// - `Ok(Vec<ListedServer>)` - Matching servers ordered by ascending id
    /// - `Err(ListingError::AuthenticationRequired)` - `by_user` or `by_serverid` without a caller
    /// - `Err(ListingError::InvalidServerId)` - `by_serverid` is not an integer
    /// - `Err(ListingError::ServerNotFound)` - `by_serverid` absent from the narrowed set
    /// - `Err(ListingError::InvalidQuantity)` - `qty` is not a non-negative integer
    /// - `Err(AppError::DbErr)` - Database error
    pub async fn list(
        &self,
        param: ListServersParam,
        caller: Option<&Account>,
    ) -> Result<Vec<ListedServer>, AppError> {
        let query = ServerRepository::new(self.db)
            .query()
            .category(param.category.as_deref());

        let member = if param.by_user {
            let account = caller.ok_or(ListingError::AuthenticationRequired("by_user"))?;
            Some(account.id)
        } else {
            None
        };
        let query = query.member(member);

        let query = query.with_member_count(param.with_num_members);

        let server_id = match param.by_serverid.as_deref() {
            Some(raw) => {
                caller.ok_or(ListingError::AuthenticationRequired("by_serverid"))?;
                Some(parse_server_id(raw)?)
            }
            None => None,
        };
        let query = query.server_id(server_id);
        if let Some(server_id) = server_id {
            if !query.exists().await? {
                return Err(ListingError::ServerNotFound(server_id).into());
            }
        }

        let limit = param.qty.as_deref().map(parse_quantity).transpose()?;

        tracing::debug!(
            "Listing servers: category={:?} member={:?} with_count={} server_id={:?} limit={:?}",
            param.category,
            member,
            param.with_num_members,
            server_id,
            limit
        );

        let servers = query.limit(limit).fetch().await?;

        Ok(servers)
    }
}
