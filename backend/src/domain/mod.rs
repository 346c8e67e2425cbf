//! Domain primitives, aggregates and services.
//!
//! Purpose: Define strongly typed domain entities used by the API and
//! persistence layers, plus the services that implement the driving ports.
//! Keep types immutable and document invariants and serialisation contracts
//! (serde) in each type's Rustdoc.
//!
//! Public surface:
//! - Error / ErrorCode: transport-agnostic failure payload.
//! - Contact, ContactInput, ContactFields, ContactId: contact records.
//! - Account, Credentials, AuthenticatedAccount: accounts and login.
//! - ContactService / AccountService: implementations of the driving ports.

pub mod account;
pub mod account_service;
pub mod contact;
pub mod contact_service;
pub mod error;
pub mod password;
pub mod ports;
pub mod trace_id;
pub mod validation;

pub use self::account::{
    Account, AccountId, AuthenticatedAccount, Credentials, CredentialsInput,
    CredentialsValidationError, CredentialsValidationErrors, PASSWORD_MAX, PASSWORD_MIN,
};
pub use self::account_service::{
    AccountService, EMAIL_TAKEN, UNKNOWN_ACCOUNT, WRONG_PASSWORD, validate_credentials,
};
pub use self::contact::{
    Contact, ContactFields, ContactId, ContactInput, ContactValidationError,
    ContactValidationErrors, MalformedContactId,
};
pub use self::contact_service::{ContactService, validate_and_normalize};
pub use self::error::{Error, ErrorCode};
pub use self::password::{PasswordHash, PasswordHashError};
pub use self::trace_id::{TRACE_ID_HEADER, TraceId};

/// Convenient API result alias.
///
/// # Examples
/// ```
/// use actix_web::HttpResponse;
/// use agenda::domain::{ApiResult, Error};
///
/// fn handler() -> ApiResult<HttpResponse> {
///     Err(Error::unauthorized("login required"))
/// }
/// ```
pub type ApiResult<T> = Result<T, Error>;
