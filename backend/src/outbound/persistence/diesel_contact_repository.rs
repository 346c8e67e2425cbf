//! PostgreSQL-backed `ContactRepository` using Diesel ORM.

use async_trait::async_trait;
use diesel::pg::Pg;
use diesel::prelude::*;
use diesel_async::RunQueryDsl;

use crate::domain::ports::{ContactRepository, ContactRepositoryError};
use crate::domain::{Contact, ContactFields, ContactId};

use super::diesel_error_mapping::{map_basic_diesel_error, map_basic_pool_error};
use super::models::{ContactChangeset, ContactRow, NewContactRow};
use super::pool::{DbPool, PoolError};
use super::schema::contacts;

/// Diesel-backed implementation of the [`ContactRepository`] port.
#[derive(Clone)]
pub struct DieselContactRepository {
    pool: DbPool,
}

impl DieselContactRepository {
    /// Create a repository over `pool`.
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

fn map_pool_error(error: PoolError) -> ContactRepositoryError {
    map_basic_pool_error(error, ContactRepositoryError::connection)
}

fn map_diesel_error(error: diesel::result::Error) -> ContactRepositoryError {
    map_basic_diesel_error(
        error,
        ContactRepositoryError::query,
        ContactRepositoryError::connection,
    )
}

fn row_to_contact(row: ContactRow) -> Contact {
    Contact {
        id: ContactId::from_uuid(row.id),
        name: row.nome,
        surname: row.sobrenome,
        email: row.email,
        phone: row.telefone,
        created_at: row.criado_em,
    }
}

fn changeset(fields: &ContactFields) -> ContactChangeset<'_> {
    ContactChangeset {
        nome: fields.name(),
        sobrenome: fields.surname(),
        email: fields.email(),
        telefone: fields.phone(),
    }
}

/// All contacts, newest first; equal timestamps list the latest insert first.
fn newest_first() -> contacts::BoxedQuery<'static, Pg> {
    contacts::table
        .order((contacts::criado_em.desc(), contacts::insert_seq.desc()))
        .into_boxed()
}

#[async_trait]
impl ContactRepository for DieselContactRepository {
    async fn insert(&self, contact: &Contact) -> Result<(), ContactRepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;
        let row = NewContactRow {
            id: *contact.id.as_uuid(),
            nome: &contact.name,
            sobrenome: &contact.surname,
            email: &contact.email,
            telefone: &contact.phone,
            criado_em: contact.created_at,
        };

        diesel::insert_into(contacts::table)
            .values(&row)
            .execute(&mut conn)
            .await
            .map(|_| ())
            .map_err(map_diesel_error)
    }

    async fn update(
        &self,
        id: &ContactId,
        fields: &ContactFields,
    ) -> Result<Option<Contact>, ContactRepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        let row: Option<ContactRow> = diesel::update(contacts::table.find(*id.as_uuid()))
            .set(changeset(fields))
            .returning(ContactRow::as_returning())
            .get_result(&mut conn)
            .await
            .optional()
            .map_err(map_diesel_error)?;

        Ok(row.map(row_to_contact))
    }

    async fn find_by_id(&self, id: &ContactId) -> Result<Option<Contact>, ContactRepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        let row: Option<ContactRow> = contacts::table
            .find(*id.as_uuid())
            .select(ContactRow::as_select())
            .first(&mut conn)
            .await
            .optional()
            .map_err(map_diesel_error)?;

        Ok(row.map(row_to_contact))
    }

    async fn list_newest_first(&self) -> Result<Vec<Contact>, ContactRepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        let rows: Vec<ContactRow> = newest_first()
            .select(ContactRow::as_select())
            .load(&mut conn)
            .await
            .map_err(map_diesel_error)?;

        Ok(rows.into_iter().map(row_to_contact).collect())
    }

    async fn delete(&self, id: &ContactId) -> Result<Option<Contact>, ContactRepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        let row: Option<ContactRow> = diesel::delete(contacts::table.find(*id.as_uuid()))
            .returning(ContactRow::as_returning())
            .get_result(&mut conn)
            .await
            .optional()
            .map_err(map_diesel_error)?;

        Ok(row.map(row_to_contact))
    }
}
