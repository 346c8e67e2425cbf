//! In-memory `AccountRepository`.

use std::collections::HashMap;

use async_trait::async_trait;
use tokio::sync::RwLock;

use crate::domain::Account;
use crate::domain::ports::{AccountRepository, AccountRepositoryError};

/// Account store keyed by email.
///
/// Inserting an email that is already present fails with
/// [`AccountRepositoryError::DuplicateEmail`], mirroring the unique index of
/// the PostgreSQL schema.
#[derive(Debug, Default)]
pub struct InMemoryAccountRepository {
    accounts: RwLock<HashMap<String, Account>>,
}

impl InMemoryAccountRepository {
    /// Create an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl AccountRepository for InMemoryAccountRepository {
    async fn find_by_email(&self, email: &str) -> Result<Option<Account>, AccountRepositoryError> {
        Ok(self.accounts.read().await.get(email).cloned())
    }

    async fn insert(&self, account: &Account) -> Result<(), AccountRepositoryError> {
        let mut accounts = self.accounts.write().await;
        if accounts.contains_key(&account.email) {
            return Err(AccountRepositoryError::duplicate_email(account.email.clone()));
        }
        accounts.insert(account.email.clone(), account.clone());
        Ok(())
    }
}
