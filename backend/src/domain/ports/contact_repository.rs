//! Port for contact persistence.
//!
//! Adapters store whole [`Contact`] records. Lookups report absence as
//! `Ok(None)` so services can tell "not there" apart from storage failures.

use async_trait::async_trait;

use crate::domain::{Contact, ContactFields, ContactId};

use super::define_port_error;

define_port_error! {
    /// Errors raised by contact repository adapters.
    pub enum ContactRepositoryError {
        /// Repository connection could not be established.
        Connection { message: String } => "contact repository connection failed: {message}",
        /// Query or mutation failed during execution.
        Query { message: String } => "contact repository query failed: {message}",
    }
}

/// Storage contract for contact records.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ContactRepository: Send + Sync {
    /// Persist a new record.
    async fn insert(&self, contact: &Contact) -> Result<(), ContactRepositoryError>;

    /// Replace the editable fields of an existing record.
    ///
    /// Returns the updated record, or `None` when `id` is unknown. The id
    /// and creation timestamp are never changed.
    async fn update(
        &self,
        id: &ContactId,
        fields: &ContactFields,
    ) -> Result<Option<Contact>, ContactRepositoryError>;

    /// Fetch a record by id.
    async fn find_by_id(&self, id: &ContactId) -> Result<Option<Contact>, ContactRepositoryError>;

    /// Every record, newest `created_at` first.
    async fn list_newest_first(&self) -> Result<Vec<Contact>, ContactRepositoryError>;

    /// Remove a record, returning it when it existed.
    async fn delete(&self, id: &ContactId) -> Result<Option<Contact>, ContactRepositoryError>;
}
