//! In-memory `ContactRepository`.

use async_trait::async_trait;
use tokio::sync::RwLock;

use crate::domain::ports::{ContactRepository, ContactRepositoryError};
use crate::domain::{Contact, ContactFields, ContactId};

/// Contact store kept in insertion order.
#[derive(Debug, Default)]
pub struct InMemoryContactRepository {
    contacts: RwLock<Vec<Contact>>,
}

impl InMemoryContactRepository {
    /// Create an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl ContactRepository for InMemoryContactRepository {
    async fn insert(&self, contact: &Contact) -> Result<(), ContactRepositoryError> {
        self.contacts.write().await.push(contact.clone());
        Ok(())
    }

    async fn update(
        &self,
        id: &ContactId,
        fields: &ContactFields,
    ) -> Result<Option<Contact>, ContactRepositoryError> {
        let mut contacts = self.contacts.write().await;
        let Some(slot) = contacts.iter_mut().find(|contact| &contact.id == id) else {
            return Ok(None);
        };
        let updated = slot.clone().with_fields(fields.clone());
        *slot = updated.clone();
        Ok(Some(updated))
    }

    async fn find_by_id(&self, id: &ContactId) -> Result<Option<Contact>, ContactRepositoryError> {
        let contacts = self.contacts.read().await;
        Ok(contacts.iter().find(|contact| &contact.id == id).cloned())
    }

    async fn list_newest_first(&self) -> Result<Vec<Contact>, ContactRepositoryError> {
        let contacts = self.contacts.read().await;
        // Reversing first keeps later inserts ahead of earlier ones on equal
        // timestamps, since the sort is stable.
        let mut listed: Vec<Contact> = contacts.iter().rev().cloned().collect();
        listed.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        Ok(listed)
    }

    async fn delete(&self, id: &ContactId) -> Result<Option<Contact>, ContactRepositoryError> {
        let mut contacts = self.contacts.write().await;
        let position = contacts.iter().position(|contact| &contact.id == id);
        Ok(position.map(|index| contacts.remove(index)))
    }
}
