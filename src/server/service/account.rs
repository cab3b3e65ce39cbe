//! Account lookup.

use sea_orm::DatabaseConnection;

use crate::server::{data::account::AccountRepository, error::AppError, model::account::Account};

pub struct AccountService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> AccountService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Retrieves an account by id.
    ///
    /// # Returns
    /// - `Ok(Some(Account))` - Account found
    /// - `Ok(None)` - No account with that id
    /// - `Err(AppError::DbErr)` - Database error during query
    pub async fn get_by_id(&self, id: i32) -> Result<Option<Account>, AppError> {
        let account = AccountRepository::new(self.db).find_by_id(id).await?;

        Ok(account)
    }
}
