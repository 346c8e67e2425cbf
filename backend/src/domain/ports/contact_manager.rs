//! Driving port for contact use-cases.
//!
//! Handlers pass raw path segments and form payloads straight through; the
//! implementation owns id parsing and validation so every adapter applies the
//! same rules.

use async_trait::async_trait;

use crate::domain::{Contact, ContactInput, Error};

/// Domain use-case port for managing contacts.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ContactManager: Send + Sync {
    /// Validate `input` and store it as a new contact.
    async fn create(&self, input: ContactInput) -> Result<Contact, Error>;

    /// Replace the editable fields of contact `id`.
    ///
    /// Returns `Ok(None)` when no contact has that id.
    async fn update(&self, id: &str, input: ContactInput) -> Result<Option<Contact>, Error>;

    /// Fetch contact `id`.
    async fn find_by_id(&self, id: &str) -> Result<Option<Contact>, Error>;

    /// All contacts, newest first.
    async fn list_all(&self) -> Result<Vec<Contact>, Error>;

    /// Delete contact `id`, returning the removed record when it existed.
    async fn delete(&self, id: &str) -> Result<Option<Contact>, Error>;
}
