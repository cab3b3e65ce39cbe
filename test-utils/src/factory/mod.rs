//! Factory methods for creating test data.
//!
//! This module provides factory methods for creating test entities with sensible defaults,
//! reducing boilerplate in tests. Factories automatically handle dependencies and foreign
//! key relationships, making tests more concise and maintainable.
//!
//! # Basic Usage
//!
//! ```rust,ignore
//! use test_utils::factory;
//!
//! #[tokio::test]
//! async fn test_example() -> Result<(), sea_orm::DbErr> {
//!     let db = /* ... */;
//!
//!     // Create with defaults
//!     let account = factory::create_account(&db).await?;
//!     let category = factory::create_category(&db).await?;
//!
//!     // Create with all dependencies
//!     let (owner, category, server) = factory::helpers::create_server_with_dependencies(&db).await?;
//!
//!     Ok(())
//! }
//! ```
//!
//! # Customization
//!
//! ```rust,ignore
//! let server = factory::server::ServerFactory::new(&db, category.id, owner.id)
//!     .name("Rustaceans")
//!     .members(vec![owner.id, friend.id])
//!     .build()
//!     .await?;
//! ```
//!
//! # Available Factories
//!
//! - `account` - Create account entities (optionally with a hashed password)
//! - `category` - Create category entities
//! - `server` - Create server entities and their memberships
//! - `helpers` - Convenience methods for creating entities with dependencies

pub mod account;
pub mod category;
pub mod helpers;
pub mod server;

// Re-export commonly used factory functions for concise usage
pub use account::create_account;
pub use category::create_category;
pub use server::create_server;
