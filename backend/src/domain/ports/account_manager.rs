//! Driving port for registration and login.
//!
//! Inbound adapters authenticate callers through this port without knowing
//! how accounts are stored or passwords hashed.

use async_trait::async_trait;

use crate::domain::{AuthenticatedAccount, CredentialsInput, Error};

/// Domain use-case port for account access.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait AccountManager: Send + Sync {
    /// Create an account for a new email address.
    async fn register(&self, input: CredentialsInput) -> Result<AuthenticatedAccount, Error>;

    /// Verify credentials and return the matching account identity.
    async fn login(&self, input: CredentialsInput) -> Result<AuthenticatedAccount, Error>;
}
