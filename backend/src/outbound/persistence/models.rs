//! Internal Diesel row structs.
//!
//! These types never leave the persistence layer. Conversion into domain
//! types happens in the repositories.

use chrono::{DateTime, Utc};
use diesel::prelude::*;
use uuid::Uuid;

use super::schema::{accounts, contacts};

/// Row struct for reading from the contacts table.
#[derive(Debug, Clone, Queryable, Selectable)]
#[diesel(table_name = contacts)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub(crate) struct ContactRow {
    pub id: Uuid,
    pub nome: String,
    pub sobrenome: String,
    pub email: String,
    pub telefone: String,
    pub criado_em: DateTime<Utc>,
}

/// Insertable struct for new contact records.
#[derive(Debug, Clone, Insertable)]
#[diesel(table_name = contacts)]
pub(crate) struct NewContactRow<'a> {
    pub id: Uuid,
    pub nome: &'a str,
    pub sobrenome: &'a str,
    pub email: &'a str,
    pub telefone: &'a str,
    pub criado_em: DateTime<Utc>,
}

/// Changeset for the editable contact columns.
#[derive(Debug, Clone, AsChangeset)]
#[diesel(table_name = contacts)]
pub(crate) struct ContactChangeset<'a> {
    pub nome: &'a str,
    pub sobrenome: &'a str,
    pub email: &'a str,
    pub telefone: &'a str,
}

/// Row struct for reading from the accounts table.
#[derive(Debug, Clone, Queryable, Selectable)]
#[diesel(table_name = accounts)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub(crate) struct AccountRow {
    pub id: Uuid,
    pub email: String,
    pub password_hash: String,
}

/// Insertable struct for new accounts. `created_at` uses the column default.
#[derive(Debug, Clone, Insertable)]
#[diesel(table_name = accounts)]
pub(crate) struct NewAccountRow<'a> {
    pub id: Uuid,
    pub email: &'a str,
    pub password_hash: &'a str,
}
