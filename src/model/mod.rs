//! Wire DTOs shared by the HTTP API.

pub mod account;
pub mod api;
pub mod server;
pub mod token;
