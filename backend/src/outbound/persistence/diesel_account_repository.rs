//! PostgreSQL-backed `AccountRepository` using Diesel ORM.
//!
//! The `accounts.email` unique index is the final arbiter of uniqueness; a
//! violation surfaces as [`AccountRepositoryError::DuplicateEmail`].

use async_trait::async_trait;
use diesel::prelude::*;
use diesel::result::{DatabaseErrorKind, Error as DieselError};
use diesel_async::RunQueryDsl;
use tracing::warn;

use crate::domain::ports::{AccountRepository, AccountRepositoryError};
use crate::domain::{Account, AccountId, PasswordHash};

use super::diesel_error_mapping::{map_basic_diesel_error, map_basic_pool_error};
use super::models::{AccountRow, NewAccountRow};
use super::pool::{DbPool, PoolError};
use super::schema::accounts;

/// Diesel-backed implementation of the [`AccountRepository`] port.
#[derive(Clone)]
pub struct DieselAccountRepository {
    pool: DbPool,
}

impl DieselAccountRepository {
    /// Create a repository over `pool`.
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

fn map_pool_error(error: PoolError) -> AccountRepositoryError {
    map_basic_pool_error(error, AccountRepositoryError::connection)
}

fn map_diesel_error(error: DieselError) -> AccountRepositoryError {
    map_basic_diesel_error(
        error,
        AccountRepositoryError::query,
        AccountRepositoryError::connection,
    )
}

fn map_insert_error(error: DieselError, email: &str) -> AccountRepositoryError {
    match error {
        DieselError::DatabaseError(DatabaseErrorKind::UniqueViolation, _) => {
            AccountRepositoryError::duplicate_email(email)
        }
        other => map_diesel_error(other),
    }
}

fn row_to_account(row: AccountRow) -> Result<Account, AccountRepositoryError> {
    let password_hash = PasswordHash::from_phc(row.password_hash).map_err(|err| {
        warn!(account_id = %row.id, error = %err, "stored password hash is malformed");
        AccountRepositoryError::query("stored password hash is malformed")
    })?;
    Ok(Account {
        id: AccountId::from_uuid(row.id),
        email: row.email,
        password_hash,
    })
}

#[async_trait]
impl AccountRepository for DieselAccountRepository {
    async fn find_by_email(&self, email: &str) -> Result<Option<Account>, AccountRepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        let row: Option<AccountRow> = accounts::table
            .filter(accounts::email.eq(email))
            .select(AccountRow::as_select())
            .first(&mut conn)
            .await
            .optional()
            .map_err(map_diesel_error)?;

        row.map(row_to_account).transpose()
    }

    async fn insert(&self, account: &Account) -> Result<(), AccountRepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;
        let row = NewAccountRow {
            id: *account.id.as_uuid(),
            email: &account.email,
            password_hash: account.password_hash.as_phc(),
        };

        diesel::insert_into(accounts::table)
            .values(&row)
            .execute(&mut conn)
            .await
            .map(|_| ())
            .map_err(|err| map_insert_error(err, &account.email))
    }
}
