//! Domain ports and supporting types for the hexagonal boundary.

mod macros;
pub(crate) use macros::define_port_error;

mod account_manager;
mod account_repository;
mod contact_manager;
mod contact_repository;

#[cfg(test)]
pub use account_manager::MockAccountManager;
pub use account_manager::AccountManager;
#[cfg(test)]
pub use account_repository::MockAccountRepository;
pub use account_repository::{AccountRepository, AccountRepositoryError};
#[cfg(test)]
pub use contact_manager::MockContactManager;
pub use contact_manager::ContactManager;
#[cfg(test)]
pub use contact_repository::MockContactRepository;
pub use contact_repository::{ContactRepository, ContactRepositoryError};
