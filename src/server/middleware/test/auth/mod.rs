use crate::server::{
    config::SessionConfig,
    error::{auth::AuthError, AppError},
    middleware::auth::AuthGuard,
    model::token::TokenKind,
    service::token::TokenCodec,
};
use test_utils::{builder::TestBuilder, factory};

mod identify;
