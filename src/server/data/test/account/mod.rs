use crate::server::{data::account::AccountRepository, model::account::CreateAccountParam};
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};

mod create;
mod find_by_id;
mod find_by_username;
mod username_exists;
