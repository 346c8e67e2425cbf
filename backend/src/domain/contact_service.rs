//! Contact record manager.
//!
//! Implements [`ContactManager`] over any [`ContactRepository`]. Identifiers
//! are parsed before anything else so a malformed id never reaches storage,
//! and payloads are validated before any write.

use std::sync::Arc;

use async_trait::async_trait;
use chrono::SubsecRound;
use mockable::Clock;
use serde_json::json;
use tracing::{debug, info};

use crate::domain::ports::{ContactManager, ContactRepository, ContactRepositoryError};
use crate::domain::{Contact, ContactFields, ContactId, ContactInput, Error};

/// Validate a raw contact payload without touching storage.
///
/// # Examples
/// ```
/// use agenda::domain::{ContactInput, validate_and_normalize};
///
/// let input = ContactInput {
///     name: "Ana".into(),
///     email: "a@a.com".into(),
///     ..ContactInput::default()
/// };
/// let fields = validate_and_normalize(input).expect("valid");
/// assert_eq!(fields.surname(), "");
/// ```
pub fn validate_and_normalize(input: ContactInput) -> Result<ContactFields, Error> {
    input
        .validate()
        .map_err(|errors| Error::validation(errors.messages()))
}

/// Contact service implementing the driving port.
#[derive(Clone)]
pub struct ContactService<R> {
    repository: Arc<R>,
    clock: Arc<dyn Clock>,
}

impl<R> ContactService<R> {
    /// Create a service backed by `repository`, stamping records with `clock`.
    pub fn new(repository: Arc<R>, clock: Arc<dyn Clock>) -> Self {
        Self { repository, clock }
    }

    fn parse_id(raw: &str) -> Result<ContactId, Error> {
        ContactId::parse(raw).map_err(|err| {
            debug!(id = %err.value(), "rejected malformed contact id");
            Error::invalid_request("Identificador de contato inválido.").with_details(json!({
                "field": "id",
                "value": err.value(),
                "code": "invalid_id",
            }))
        })
    }

    fn map_repository_error(error: ContactRepositoryError) -> Error {
        match error {
            ContactRepositoryError::Connection { message } => {
                Error::service_unavailable(format!("contact repository unavailable: {message}"))
            }
            ContactRepositoryError::Query { message } => {
                Error::internal(format!("contact repository error: {message}"))
            }
        }
    }
}

#[async_trait]
impl<R> ContactManager for ContactService<R>
where
    R: ContactRepository,
{
    async fn create(&self, input: ContactInput) -> Result<Contact, Error> {
        let fields = validate_and_normalize(input)?;
        // Storage keeps microseconds; match it so reads echo the same value.
        let created_at = self.clock.utc().trunc_subsecs(6);
        let contact = Contact::new(ContactId::random(), fields, created_at);
        self.repository
            .insert(&contact)
            .await
            .map_err(Self::map_repository_error)?;
        info!(contact_id = %contact.id, "contact created");
        Ok(contact)
    }

    async fn update(&self, id: &str, input: ContactInput) -> Result<Option<Contact>, Error> {
        let id = Self::parse_id(id)?;
        let fields = validate_and_normalize(input)?;
        let updated = self
            .repository
            .update(&id, &fields)
            .await
            .map_err(Self::map_repository_error)?;
        if updated.is_some() {
            info!(contact_id = %id, "contact updated");
        }
        Ok(updated)
    }

    async fn find_by_id(&self, id: &str) -> Result<Option<Contact>, Error> {
        let id = Self::parse_id(id)?;
        self.repository
            .find_by_id(&id)
            .await
            .map_err(Self::map_repository_error)
    }

    async fn list_all(&self) -> Result<Vec<Contact>, Error> {
        self.repository
            .list_newest_first()
            .await
            .map_err(Self::map_repository_error)
    }

    async fn delete(&self, id: &str) -> Result<Option<Contact>, Error> {
        let id = Self::parse_id(id)?;
        let deleted = self
            .repository
            .delete(&id)
            .await
            .map_err(Self::map_repository_error)?;
        if deleted.is_some() {
            info!(contact_id = %id, "contact deleted");
        }
        Ok(deleted)
    }
}

#[cfg(test)]
#[path = "contact_service_tests.rs"]
mod tests;
