//! Port for account persistence.

use async_trait::async_trait;

use crate::domain::Account;

use super::define_port_error;

define_port_error! {
    /// Errors raised by account repository adapters.
    pub enum AccountRepositoryError {
        /// Repository connection could not be established.
        Connection { message: String } => "account repository connection failed: {message}",
        /// Query or mutation failed during execution.
        Query { message: String } => "account repository query failed: {message}",
        /// The unique email index rejected the insert.
        DuplicateEmail { email: String } => "account already exists for {email}",
    }
}

/// Storage contract for accounts.
///
/// Email lookups are exact; callers trim input before calling.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait AccountRepository: Send + Sync {
    /// Fetch the account registered under `email`.
    async fn find_by_email(&self, email: &str) -> Result<Option<Account>, AccountRepositoryError>;

    /// Persist a new account.
    ///
    /// Fails with [`AccountRepositoryError::DuplicateEmail`] when the email
    /// is already taken, even if a prior lookup said otherwise.
    async fn insert(&self, account: &Account) -> Result<(), AccountRepositoryError>;
}
