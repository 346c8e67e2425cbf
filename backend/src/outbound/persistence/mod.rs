//! PostgreSQL persistence adapters using Diesel ORM.
//!
//! Repository implementations only translate between Diesel rows and domain
//! types. Row structs (`models.rs`) and table definitions (`schema.rs`) stay
//! private to this module. Connections come from a `bb8` pool through
//! `diesel-async`, and every database error is mapped to the owning port's
//! error enum.
//!
//! # Example
//!
//! ```no_run
//! # async fn wire() -> Result<(), Box<dyn std::error::Error>> {
//! use agenda::outbound::persistence::{
//!     DbPool, DieselContactRepository, PoolConfig, run_pending_migrations,
//! };
//!
//! let url = "postgres://agenda@localhost/agenda";
//! run_pending_migrations(url).await?;
//! let pool = DbPool::new(PoolConfig::new(url)).await?;
//! let contacts = DieselContactRepository::new(pool);
//! # let _ = contacts;
//! # Ok(())
//! # }
//! ```

mod diesel_account_repository;
mod diesel_contact_repository;
mod diesel_error_mapping;
mod migrations;
mod models;
mod pool;
mod schema;

pub use diesel_account_repository::DieselAccountRepository;
pub use diesel_contact_repository::DieselContactRepository;
pub use migrations::{MIGRATIONS, MigrationError, run_pending_migrations};
pub use pool::{DbPool, PoolConfig, PoolError};
