//! Diesel table definitions for the PostgreSQL schema.
//!
//! These definitions must match the migrations under `backend/migrations`.
//! `diesel print-schema` regenerates them from a live database.

diesel::table! {
    /// Contact records. Column names follow the JSON field names.
    contacts (id) {
        /// Primary key: UUID v4 identifier.
        id -> Uuid,
        /// First name, never empty.
        nome -> Varchar,
        /// Surname, possibly empty.
        sobrenome -> Varchar,
        /// Email, possibly empty.
        email -> Varchar,
        /// Phone, possibly empty.
        telefone -> Varchar,
        /// Creation timestamp; drives newest-first listing.
        criado_em -> Timestamptz,
        /// Insertion counter; breaks creation-time ties, latest first.
        insert_seq -> Int8,
    }
}

diesel::table! {
    /// Registered accounts.
    accounts (id) {
        /// Primary key: UUID v4 identifier.
        id -> Uuid,
        /// Login email; unique.
        email -> Varchar,
        /// Argon2id PHC string.
        password_hash -> Varchar,
        /// Registration timestamp.
        created_at -> Timestamptz,
    }
}
