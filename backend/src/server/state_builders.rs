//! Builders wiring domain services to their storage adapters.

use std::sync::Arc;

use actix_web::web;
use mockable::DefaultClock;

use agenda::domain::ports::{AccountManager, ContactManager};
use agenda::domain::{AccountService, ContactService};
use agenda::inbound::http::state::HttpState;
use agenda::outbound::memory::{InMemoryAccountRepository, InMemoryContactRepository};
use agenda::outbound::persistence::{DbPool, DieselAccountRepository, DieselContactRepository};

use super::ServerConfig;

type Managers = (Arc<dyn ContactManager>, Arc<dyn AccountManager>);

/// Services over process-local storage.
fn in_memory_managers() -> Managers {
    (
        Arc::new(ContactService::new(
            Arc::new(InMemoryContactRepository::new()),
            Arc::new(DefaultClock),
        )),
        Arc::new(AccountService::new(Arc::new(
            InMemoryAccountRepository::new(),
        ))),
    )
}

/// Services over PostgreSQL.
fn diesel_managers(pool: &DbPool) -> Managers {
    (
        Arc::new(ContactService::new(
            Arc::new(DieselContactRepository::new(pool.clone())),
            Arc::new(DefaultClock),
        )),
        Arc::new(AccountService::new(Arc::new(DieselAccountRepository::new(
            pool.clone(),
        )))),
    )
}

/// Use `make_managers` when a pool is available, otherwise fall back to
/// in-memory storage.
fn build_managers_with_pool<Pool>(
    pool: Option<&Pool>,
    make_managers: impl FnOnce(&Pool) -> Managers,
) -> Managers {
    pool.map_or_else(in_memory_managers, make_managers)
}

/// Build the shared HTTP state for the configured storage backend.
pub(super) fn build_http_state(config: &ServerConfig) -> web::Data<HttpState> {
    let (contacts, accounts) = build_managers_with_pool(config.db_pool.as_ref(), diesel_managers);
    web::Data::new(HttpState::new(contacts, accounts))
}

#[cfg(test)]
mod tests {
    use super::*;
    use agenda::domain::{
        AuthenticatedAccount, Contact, ContactInput, CredentialsInput, Error, ErrorCode,
    };
    use async_trait::async_trait;
    use rstest::rstest;

    struct UnavailableStore;

    #[async_trait]
    impl ContactManager for UnavailableStore {
        async fn create(&self, _input: ContactInput) -> Result<Contact, Error> {
            Err(Error::service_unavailable("stub"))
        }

        async fn update(&self, _id: &str, _input: ContactInput) -> Result<Option<Contact>, Error> {
            Err(Error::service_unavailable("stub"))
        }

        async fn find_by_id(&self, _id: &str) -> Result<Option<Contact>, Error> {
            Err(Error::service_unavailable("stub"))
        }

        async fn list_all(&self) -> Result<Vec<Contact>, Error> {
            Err(Error::service_unavailable("stub"))
        }

        async fn delete(&self, _id: &str) -> Result<Option<Contact>, Error> {
            Err(Error::service_unavailable("stub"))
        }
    }

    #[async_trait]
    impl AccountManager for UnavailableStore {
        async fn register(&self, _input: CredentialsInput) -> Result<AuthenticatedAccount, Error> {
            Err(Error::service_unavailable("stub"))
        }

        async fn login(&self, _input: CredentialsInput) -> Result<AuthenticatedAccount, Error> {
            Err(Error::service_unavailable("stub"))
        }
    }

    fn stub_managers(_pool: &()) -> Managers {
        let stub = Arc::new(UnavailableStore);
        (stub.clone(), stub)
    }

    #[rstest]
    #[tokio::test]
    async fn pool_present_selects_pool_backed_services() {
        let (contacts, accounts) = build_managers_with_pool(Some(&()), stub_managers);

        let err = contacts.list_all().await.expect_err("stub store");
        assert_eq!(err.code(), ErrorCode::ServiceUnavailable);
        let err = accounts
            .login(CredentialsInput::new("ana@example.com", "abc"))
            .await
            .expect_err("stub store");
        assert_eq!(err.code(), ErrorCode::ServiceUnavailable);
    }

    #[rstest]
    #[tokio::test]
    async fn pool_absent_keeps_records_in_memory() {
        let (contacts, accounts) = build_managers_with_pool(None::<&()>, stub_managers);

        assert!(contacts.list_all().await.expect("memory store").is_empty());
        let registered = accounts
            .register(CredentialsInput::new("ana@example.com", "abc"))
            .await
            .expect("register");
        let logged_in = accounts
            .login(CredentialsInput::new("ana@example.com", "abc"))
            .await
            .expect("login");
        assert_eq!(registered, logged_in);
    }
}
