//! Account manager: registration and login.
//!
//! Passwords are hashed with a fresh salt on registration and verified
//! against the stored hash on login. Hashing is CPU bound, so it runs on the
//! blocking pool instead of the async worker.

use std::sync::Arc;

use async_trait::async_trait;
use tracing::{info, warn};
use zeroize::Zeroizing;

use crate::domain::ports::{AccountManager, AccountRepository, AccountRepositoryError};
use crate::domain::{
    Account, AccountId, AuthenticatedAccount, Credentials, CredentialsInput, Error, PasswordHash,
};

/// Message returned when registering an email that already has an account.
pub const EMAIL_TAKEN: &str = "Email já cadastrado.";
/// Message returned when logging in with an unknown email.
pub const UNKNOWN_ACCOUNT: &str = "Usuário não existe.";
/// Message returned when the password does not match.
pub const WRONG_PASSWORD: &str = "Senha inválida";

/// Validate a raw credentials payload.
///
/// # Examples
/// ```
/// use agenda::domain::{CredentialsInput, validate_credentials};
///
/// let err = validate_credentials(CredentialsInput::new("ana", "ab")).expect_err("invalid");
/// assert_eq!(err.messages().len(), 2);
/// ```
pub fn validate_credentials(input: CredentialsInput) -> Result<Credentials, Error> {
    Credentials::try_from_input(input).map_err(|errors| Error::validation(errors.messages()))
}

/// Account service implementing the driving port.
#[derive(Clone)]
pub struct AccountService<R> {
    repository: Arc<R>,
}

impl<R> AccountService<R> {
    /// Create a service backed by `repository`.
    pub fn new(repository: Arc<R>) -> Self {
        Self { repository }
    }

    fn map_repository_error(error: AccountRepositoryError) -> Error {
        match error {
            AccountRepositoryError::Connection { message } => {
                Error::service_unavailable(format!("account repository unavailable: {message}"))
            }
            AccountRepositoryError::Query { message } => {
                Error::internal(format!("account repository error: {message}"))
            }
            AccountRepositoryError::DuplicateEmail { .. } => Error::conflict(EMAIL_TAKEN),
        }
    }

    async fn hash_password(password: Zeroizing<String>) -> Result<PasswordHash, Error> {
        tokio::task::spawn_blocking(move || PasswordHash::generate(password.as_str()))
            .await
            .map_err(|err| Error::internal(format!("password hashing task failed: {err}")))?
            .map_err(|err| Error::internal(err.to_string()))
    }

    async fn verify_password(hash: PasswordHash, password: Zeroizing<String>) -> Result<bool, Error> {
        tokio::task::spawn_blocking(move || hash.verify(password.as_str()))
            .await
            .map_err(|err| Error::internal(format!("password verification task failed: {err}")))?
            .map_err(|err| Error::internal(err.to_string()))
    }
}

#[async_trait]
impl<R> AccountManager for AccountService<R>
where
    R: AccountRepository,
{
    async fn register(&self, input: CredentialsInput) -> Result<AuthenticatedAccount, Error> {
        let credentials = validate_credentials(input)?;

        let existing = self
            .repository
            .find_by_email(credentials.email())
            .await
            .map_err(Self::map_repository_error)?;
        if existing.is_some() {
            return Err(Error::conflict(EMAIL_TAKEN));
        }

        let password_hash =
            Self::hash_password(Zeroizing::new(credentials.password().to_owned())).await?;
        let account = Account {
            id: AccountId::random(),
            email: credentials.email().to_owned(),
            password_hash,
        };
        self.repository
            .insert(&account)
            .await
            .map_err(Self::map_repository_error)?;

        info!(account_id = %account.id, "account registered");
        Ok(account.identity())
    }

    async fn login(&self, input: CredentialsInput) -> Result<AuthenticatedAccount, Error> {
        let credentials = validate_credentials(input)?;

        let Some(account) = self
            .repository
            .find_by_email(credentials.email())
            .await
            .map_err(Self::map_repository_error)?
        else {
            return Err(Error::unauthorized(UNKNOWN_ACCOUNT));
        };

        let matches = Self::verify_password(
            account.password_hash.clone(),
            Zeroizing::new(credentials.password().to_owned()),
        )
        .await?;
        if !matches {
            warn!(account_id = %account.id, "login rejected: wrong password");
            return Err(Error::unauthorized(WRONG_PASSWORD));
        }

        info!(account_id = %account.id, "login succeeded");
        Ok(account.identity())
    }
}

#[cfg(test)]
#[path = "account_service_tests.rs"]
mod tests;
