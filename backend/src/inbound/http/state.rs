//! Shared HTTP adapter state.
//!
//! HTTP handlers accept this state via `actix_web::web::Data` so they only
//! depend on domain ports (use-cases) and remain testable without I/O.

use std::sync::Arc;

use crate::domain::ports::{AccountManager, ContactManager};

/// Dependency bundle for HTTP handlers.
#[derive(Clone)]
pub struct HttpState {
    pub contacts: Arc<dyn ContactManager>,
    pub accounts: Arc<dyn AccountManager>,
}

impl HttpState {
    /// Construct state from the driving ports.
    ///
    /// # Examples
    /// ```
    /// use std::sync::Arc;
    ///
    /// use agenda::domain::{AccountService, ContactService};
    /// use agenda::inbound::http::state::HttpState;
    /// use agenda::outbound::memory::{InMemoryAccountRepository, InMemoryContactRepository};
    ///
    /// let state = HttpState::new(
    ///     Arc::new(ContactService::new(
    ///         Arc::new(InMemoryContactRepository::default()),
    ///         Arc::new(mockable::DefaultClock),
    ///     )),
    ///     Arc::new(AccountService::new(Arc::new(InMemoryAccountRepository::default()))),
    /// );
    /// let _contacts = state.contacts.clone();
    /// ```
    pub fn new(contacts: Arc<dyn ContactManager>, accounts: Arc<dyn AccountManager>) -> Self {
        Self { contacts, accounts }
    }
}
