//! Service layer for business logic.
//!
//! Services orchestrate repositories and domain models. They accept parameter models
//! from controllers and return domain models, keeping HTTP concerns out of the
//! business logic.

pub mod account;
pub mod auth;
pub mod server;
pub mod token;
