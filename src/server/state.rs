//! Application state shared across all request handlers.
//!
//! The state is initialized once during startup and then cloned for each request
//! handler through Axum's state extraction. It holds:
//! - Database connection pool for data persistence
//! - Token codec for issuing and verifying JWTs
//! - Session config for cookie names, lifetimes and rotation policy

use sea_orm::DatabaseConnection;
use std::sync::Arc;

use crate::server::{config::SessionConfig, service::token::TokenCodec};

/// Application state containing shared resources and dependencies.
///
/// All fields are cheap to clone:
/// - `DatabaseConnection` is a connection pool (clones share the pool)
/// - `Arc<TokenCodec>` and `Arc<SessionConfig>` are reference-counted
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool for accessing persistent storage.
    pub db: DatabaseConnection,

    /// Codec signing and verifying access and refresh tokens.
    pub tokens: Arc<TokenCodec>,

    /// Session protocol settings injected at construction.
    pub session_config: Arc<SessionConfig>,
}

impl AppState {
    /// Creates a new application state, building the token codec from the session config.
    ///
    /// # Arguments
    /// - `db` - Database connection pool
    /// - `session_config` - Token lifetimes, cookie names, signing secret and rotation policy
    ///
    /// # Returns
    /// - `AppState` - Initialized application state ready for use
    pub fn new(db: DatabaseConnection, session_config: SessionConfig) -> Self {
        let tokens = TokenCodec::new(&session_config);

        Self {
            db,
            tokens: Arc::new(tokens),
            session_config: Arc::new(session_config),
        }
    }
}
