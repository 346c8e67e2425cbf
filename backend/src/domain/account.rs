//! Accounts and the credentials used to register and log in.
//!
//! Keep inbound payload parsing outside the domain by exposing constructors
//! that validate raw form input before a handler talks to a service.

use std::fmt;

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;
use zeroize::Zeroizing;

use super::PasswordHash;
use super::validation::{is_well_formed_email, text_or_empty};

/// Minimum accepted password length, in UTF-16 code units.
pub const PASSWORD_MIN: usize = 3;
/// Maximum accepted password length, in UTF-16 code units.
pub const PASSWORD_MAX: usize = 50;

/// Stable account identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AccountId(Uuid);

impl AccountId {
    /// Generate a new random identifier.
    #[must_use]
    pub fn random() -> Self {
        Self(Uuid::new_v4())
    }

    /// Wrap an existing UUID.
    #[must_use]
    pub fn from_uuid(uuid: Uuid) -> Self {
        Self(uuid)
    }

    /// Parse a raw identifier, e.g. one read back from a session cookie.
    pub fn parse(raw: &str) -> Result<Self, uuid::Error> {
        Uuid::parse_str(raw).map(Self)
    }

    /// Access the underlying UUID.
    #[must_use]
    pub fn as_uuid(&self) -> &Uuid {
        &self.0
    }
}

impl fmt::Display for AccountId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A single credential validation failure.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CredentialsValidationError {
    /// Email is missing or not a valid address.
    InvalidEmail,
    /// Password length falls outside the accepted range.
    PasswordLength { min: usize, max: usize },
}

impl CredentialsValidationError {
    /// Form field the failure refers to.
    #[must_use]
    pub fn field(self) -> &'static str {
        match self {
            Self::InvalidEmail => "email",
            Self::PasswordLength { .. } => "password",
        }
    }
}

impl fmt::Display for CredentialsValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidEmail => write!(f, "Email inválido"),
            Self::PasswordLength { min, max } => {
                write!(f, "A senha precisa ter entre {min} e {max} caracteres.")
            }
        }
    }
}

impl std::error::Error for CredentialsValidationError {}

/// Non-empty, ordered list of credential validation failures.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CredentialsValidationErrors(Vec<CredentialsValidationError>);

impl CredentialsValidationErrors {
    /// Failures in detection order.
    #[must_use]
    pub fn errors(&self) -> &[CredentialsValidationError] {
        &self.0
    }

    /// Human-readable messages in detection order.
    #[must_use]
    pub fn messages(&self) -> Vec<String> {
        self.0.iter().map(ToString::to_string).collect()
    }
}

impl fmt::Display for CredentialsValidationErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.messages().join(" "))
    }
}

impl std::error::Error for CredentialsValidationErrors {}

/// Raw registration or login payload.
#[derive(Clone, Default, Deserialize, ToSchema)]
pub struct CredentialsInput {
    #[serde(default, deserialize_with = "text_or_empty")]
    #[schema(example = "ana@example.com")]
    pub email: String,
    #[serde(default, deserialize_with = "text_or_empty")]
    #[schema(example = "segredo")]
    pub password: String,
}

impl CredentialsInput {
    /// Build a payload from borrowed parts.
    #[must_use]
    pub fn new(email: &str, password: &str) -> Self {
        Self {
            email: email.to_owned(),
            password: password.to_owned(),
        }
    }
}

impl fmt::Debug for CredentialsInput {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CredentialsInput")
            .field("email", &self.email)
            .field("password", &"<redacted>")
            .finish()
    }
}

/// Validated credentials used by the account service.
///
/// ## Invariants
/// - `email` is trimmed and well formed.
/// - `password` is between [`PASSWORD_MIN`] and [`PASSWORD_MAX`] UTF-16 code
///   units long, so characters outside the BMP count twice, and keeps
///   caller-provided whitespace.
///
/// # Examples
/// ```
/// use agenda::domain::{Credentials, CredentialsInput};
///
/// let creds = Credentials::try_from_input(CredentialsInput::new("  ana@example.com ", "abc"))
///     .expect("valid credentials");
/// assert_eq!(creds.email(), "ana@example.com");
/// assert_eq!(creds.password(), "abc");
/// ```
#[derive(Clone, PartialEq, Eq)]
pub struct Credentials {
    email: String,
    password: Zeroizing<String>,
}

impl Credentials {
    /// Validate a raw payload, accumulating every failure.
    pub fn try_from_input(input: CredentialsInput) -> Result<Self, CredentialsValidationErrors> {
        let CredentialsInput { email, password } = input;
        let password = Zeroizing::new(password);
        let email = email.trim().to_owned();
        let mut errors = Vec::new();

        if !is_well_formed_email(&email) {
            errors.push(CredentialsValidationError::InvalidEmail);
        }

        let length = password.encode_utf16().count();
        if !(PASSWORD_MIN..=PASSWORD_MAX).contains(&length) {
            errors.push(CredentialsValidationError::PasswordLength {
                min: PASSWORD_MIN,
                max: PASSWORD_MAX,
            });
        }

        if !errors.is_empty() {
            return Err(CredentialsValidationErrors(errors));
        }

        Ok(Self { email, password })
    }

    /// Trimmed email, used verbatim for lookups.
    #[must_use]
    pub fn email(&self) -> &str {
        self.email.as_str()
    }

    /// Password exactly as provided.
    #[must_use]
    pub fn password(&self) -> &str {
        self.password.as_str()
    }
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("email", &self.email)
            .field("password", &"<redacted>")
            .finish()
    }
}

/// Persisted account.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Account {
    pub id: AccountId,
    pub email: String,
    pub password_hash: PasswordHash,
}

impl Account {
    /// Identity safe to hand back to callers; the hash stays behind.
    #[must_use]
    pub fn identity(&self) -> AuthenticatedAccount {
        AuthenticatedAccount {
            id: self.id,
            email: self.email.clone(),
        }
    }
}

/// Account identity returned from registration and login.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct AuthenticatedAccount {
    #[schema(value_type = String, example = "3fa85f64-5717-4562-b3fc-2c963f66afa6")]
    pub id: AccountId,
    #[schema(example = "ana@example.com")]
    pub email: String,
}
