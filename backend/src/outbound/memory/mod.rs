//! Process-local repositories.
//!
//! State lives behind an async `RwLock` and disappears with the process.
//! The server falls back to these adapters when no database URL is
//! configured.

mod account_repository;
mod contact_repository;

pub use account_repository::InMemoryAccountRepository;
pub use contact_repository::InMemoryContactRepository;
