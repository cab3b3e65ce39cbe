//! Shared helper utilities for factory methods.
//!
//! This module provides common utilities used across all factory modules,
//! including ID generation and convenience methods for creating entities
//! with their dependencies.

use sea_orm::{DatabaseConnection, DbErr};

/// Counter for generating unique names in tests.
static COUNTER: std::sync::atomic::AtomicU64 = std::sync::atomic::AtomicU64::new(1);

/// Gets the next unique counter value for test data.
///
/// # Returns
/// - `u64` - Next unique counter value
pub fn next_id() -> u64 {
    COUNTER.fetch_add(1, std::sync::atomic::Ordering::SeqCst)
}

/// Creates a server together with the owner and category it references.
///
/// This is a convenience method that creates:
/// 1. Account (as owner, also added as the only member)
/// 2. Category
/// 3. Server
///
/// # Arguments
/// - `db` - Database connection
///
/// # Returns
/// - `Ok((owner, category, server))` - Tuple of all created entities
/// - `Err(DbErr)` - Database error during creation
pub async fn create_server_with_dependencies(
    db: &DatabaseConnection,
) -> Result<
    (
        entity::account::Model,
        entity::category::Model,
        entity::server::Model,
    ),
    DbErr,
> {
    let owner = crate::factory::account::create_account(db).await?;
    let category = crate::factory::category::create_category(db).await?;
    let server = crate::factory::server::ServerFactory::new(db, category.id, owner.id)
        .members(vec![owner.id])
        .build()
        .await?;

    Ok((owner, category, server))
}
