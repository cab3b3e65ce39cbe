//! Server listing queries.
//!
//! `ServerQuery` narrows the set of servers in a fixed stage order:
//! category → member → member count → server id → limit. Each stage is a method that
//! consumes the query in one state and returns it in the next, so stages can only be
//! applied in that order and each at most once.

use std::{collections::HashMap, marker::PhantomData};

use sea_orm::{
    ColumnTrait, DatabaseConnection, DbErr, EntityTrait, PaginatorTrait,
    QueryFilter, QueryOrder, QuerySelect, QueryTrait, Select,
};

use crate::server::model::server::{ListedServer, Server};

/// Query before any stage has run.
pub struct Base;
/// Category stage applied.
pub struct Categorized;
/// Member stage applied.
pub struct MemberScoped;
/// Member count annotation decided.
pub struct Annotated;
/// Server id stage applied.
pub struct Identified;
/// Limit applied; the query can only be fetched.
pub struct Truncated;

pub struct ServerRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> ServerRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Starts a listing over all servers ordered by ascending id.
    pub fn query(&self) -> ServerQuery<'a, Base> {
        ServerQuery {
            db: self.db,
            select: entity::prelude::Server::find().order_by_asc(entity::server::Column::Id),
            with_member_count: false,
            stage: PhantomData,
        }
    }

    /// Counts the members of each given server with a grouped `COUNT`.
    ///
    /// Servers without members are absent from the returned map.
    pub async fn member_counts(&self, server_ids: &[i32]) -> Result<HashMap<i32, u64>, DbErr> {
        if server_ids.is_empty() {
            return Ok(HashMap::new());
        }

        let rows = entity::prelude::ServerMember::find()
            .select_only()
            .column(entity::server_member::Column::ServerId)
            .column_as(entity::server_member::Column::AccountId.count(), "num_members")
            .filter(entity::server_member::Column::ServerId.is_in(server_ids.iter().copied()))
            .group_by(entity::server_member::Column::ServerId)
            .into_tuple::<(i32, i64)>()
            .all(self.db)
            .await?;

        Ok(rows
            .into_iter()
            .map(|(server_id, count)| (server_id, count.max(0) as u64))
            .collect())
    }
}

/// Server listing query in stage `S`.
pub struct ServerQuery<'a, S> {
    db: &'a DatabaseConnection,
    select: Select<entity::server::Entity>,
    with_member_count: bool,
    stage: PhantomData<S>,
}

impl<'a, S> ServerQuery<'a, S> {
    fn advance<T>(
        self,
        narrow: impl FnOnce(Select<entity::server::Entity>) -> Select<entity::server::Entity>,
    ) -> ServerQuery<'a, T> {
        ServerQuery {
            db: self.db,
            select: narrow(self.select),
            with_member_count: self.with_member_count,
            stage: PhantomData,
        }
    }
}

impl<'a> ServerQuery<'a, Base> {
    /// Restricts to servers whose category name equals `name` exactly.
    pub fn category(self, name: Option<&str>) -> ServerQuery<'a, Categorized> {
        self.advance(|select| match name {
            Some(name) => select.filter(
                entity::server::Column::CategoryId.in_subquery(
                    entity::prelude::Category::find()
                        .select_only()
                        .column(entity::category::Column::Id)
                        .filter(entity::category::Column::Name.eq(name))
                        .into_query(),
                ),
            ),
            None => select,
        })
    }
}

impl<'a> ServerQuery<'a, Categorized> {
    /// Restricts to servers the account is a member of.
    pub fn member(self, account_id: Option<i32>) -> ServerQuery<'a, MemberScoped> {
        self.advance(|select| match account_id {
            Some(account_id) => select.filter(
                entity::server::Column::Id.in_subquery(
                    entity::prelude::ServerMember::find()
                        .select_only()
                        .column(entity::server_member::Column::ServerId)
                        .filter(entity::server_member::Column::AccountId.eq(account_id))
                        .into_query(),
                ),
            ),
            None => select,
        })
    }
}

impl<'a> ServerQuery<'a, MemberScoped> {
    /// Annotates fetched servers with their member count when `enabled`.
    pub fn with_member_count(mut self, enabled: bool) -> ServerQuery<'a, Annotated> {
        self.with_member_count = enabled;
        self.advance(|select| select)
    }
}

impl<'a> ServerQuery<'a, Annotated> {
    /// Restricts to the single server with `server_id`.
    pub fn server_id(self, server_id: Option<i32>) -> ServerQuery<'a, Identified> {
        self.advance(|select| match server_id {
            Some(server_id) => select.filter(entity::server::Column::Id.eq(server_id)),
            None => select,
        })
    }
}

impl<'a> ServerQuery<'a, Identified> {
    /// Whether the narrowed set contains any server.
    pub async fn exists(&self) -> Result<bool, DbErr> {
        let count = self.select.clone().count(self.db).await?;

        Ok(count > 0)
    }

    /// Keeps only the first `limit` servers.
    pub fn limit(self, limit: Option<u64>) -> ServerQuery<'a, Truncated> {
        self.advance(|select| match limit {
            Some(limit) => select.limit(limit),
            None => select,
        })
    }
}

impl<'a> ServerQuery<'a, Truncated> {
    /// Runs the query, resolving category names and member counts.
    pub async fn fetch(self) -> Result<Vec<ListedServer>, DbErr> {
        let servers = self.select.all(self.db).await?;

        let mut category_ids: Vec<i32> = servers.iter().map(|s| s.category_id).collect();
        category_ids.sort_unstable();
        category_ids.dedup();

        let categories: HashMap<i32, String> = if category_ids.is_empty() {
            HashMap::new()
        } else {
            entity::prelude::Category::find()
                .filter(entity::category::Column::Id.is_in(category_ids))
                .all(self.db)
                .await?
                .into_iter()
                .map(|category| (category.id, category.name))
                .collect()
        };

        let member_counts = if self.with_member_count {
            let server_ids: Vec<i32> = servers.iter().map(|s| s.id).collect();
            ServerRepository::new(self.db)
                .member_counts(&server_ids)
                .await?
        } else {
            HashMap::new()
        };

        servers
            .into_iter()
            .map(|entity| -> Result<ListedServer, DbErr> {
                let category = categories.get(&entity.category_id).cloned().ok_or_else(|| {
                    DbErr::RecordNotFound(format!(
                        "Category {} of server {} not found",
                        entity.category_id, entity.id
                    ))
                })?;

                let server = Server {
                    id: entity.id,
                    name: entity.name,
                    description: entity.description,
                    category,
                    owner_id: entity.owner_id,
                };

                Ok(if self.with_member_count {
                    ListedServer::WithMemberCount {
                        member_count: member_counts.get(&server.id).copied().unwrap_or(0),
                        server,
                    }
                } else {
                    ListedServer::Plain(server)
                })
            })
            .collect()
    }
}
