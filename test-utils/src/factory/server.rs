//! Server factory for creating test server entities and memberships.

use crate::factory::helpers::next_id;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr, EntityTrait};

/// Factory for creating test servers with customizable fields.
///
/// # Example
///
/// ```rust,ignore
/// use test_utils::factory::server::ServerFactory;
///
/// let server = ServerFactory::new(&db, category.id, owner.id)
///     .name("Gaming Hub")
///     .members(vec![owner.id, other.id])
///     .build()
///     .await?;
/// ```
pub struct ServerFactory<'a> {
    db: &'a DatabaseConnection,
    category_id: i32,
    owner_id: i32,
    name: String,
    description: Option<String>,
    members: Vec<i32>,
}

impl<'a> ServerFactory<'a> {
    /// Creates a new ServerFactory with default values.
    ///
    /// Defaults:
    /// - name: `"Server {id}"`
    /// - description: `None`
    /// - members: none
    ///
    /// # Arguments
    /// - `db` - Database connection for inserting the entity
    /// - `category_id` - Category the server belongs to
    /// - `owner_id` - Account owning the server
    pub fn new(db: &'a DatabaseConnection, category_id: i32, owner_id: i32) -> Self {
        Self {
            db,
            category_id,
            owner_id,
            name: format!("Server {}", next_id()),
            description: None,
            members: Vec::new(),
        }
    }

    /// Sets the name for the server.
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// Sets the description for the server.
    pub fn description(mut self, description: Option<String>) -> Self {
        self.description = description;
        self
    }

    /// Sets the accounts that are members of the server.
    pub fn members(mut self, members: Vec<i32>) -> Self {
        self.members = members;
        self
    }

    /// Builds and inserts the server entity and its memberships.
    ///
    /// # Returns
    /// - `Ok(entity::server::Model)` - Created server entity
    /// - `Err(DbErr)` - Database error during insert
    pub async fn build(self) -> Result<entity::server::Model, DbErr> {
        let server = entity::server::ActiveModel {
            name: ActiveValue::Set(self.name),
            description: ActiveValue::Set(self.description),
            category_id: ActiveValue::Set(self.category_id),
            owner_id: ActiveValue::Set(self.owner_id),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        for account_id in self.members {
            add_member(self.db, server.id, account_id).await?;
        }

        Ok(server)
    }
}

/// Adds an account to a server's member set.
pub async fn add_member(
    db: &DatabaseConnection,
    server_id: i32,
    account_id: i32,
) -> Result<(), DbErr> {
    entity::prelude::ServerMember::insert(entity::server_member::ActiveModel {
        server_id: ActiveValue::Set(server_id),
        account_id: ActiveValue::Set(account_id),
    })
    .exec(db)
    .await?;

    Ok(())
}

/// Creates a server with default values in a fresh category owned by a fresh account.
pub async fn create_server(db: &DatabaseConnection) -> Result<entity::server::Model, DbErr> {
    let owner = crate::factory::account::create_account(db).await?;
    let category = crate::factory::category::create_category(db).await?;

    ServerFactory::new(db, category.id, owner.id).build().await
}
