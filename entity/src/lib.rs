//! SeaORM entities for the chat backend.

pub mod prelude;

pub mod account;
pub mod category;
pub mod server;
pub mod server_member;
