//! Contact records and their validation rules.
//!
//! A contact is created from a loosely typed form payload. Validation first
//! normalises the payload (non-text values become empty strings, unknown
//! fields are dropped) and then accumulates every failure so callers can show
//! all messages at once.

use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

use super::validation::{is_well_formed_email, text_or_empty};

/// Error raised when a contact identifier is not a UUID.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("contact id must be a valid UUID: {value}")]
pub struct MalformedContactId {
    value: String,
}

impl MalformedContactId {
    /// The rejected raw value.
    #[must_use]
    pub fn value(&self) -> &str {
        self.value.as_str()
    }
}

/// Stable contact identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ContactId(Uuid);

impl ContactId {
    /// Parse a raw identifier, rejecting anything that is not a UUID.
    ///
    /// # Examples
    /// ```
    /// use agenda::domain::ContactId;
    ///
    /// assert!(ContactId::parse("3fa85f64-5717-4562-b3fc-2c963f66afa6").is_ok());
    /// assert!(ContactId::parse("64b7f0c2e4b0a1a2b3c4d5e6").is_err());
    /// ```
    pub fn parse(raw: &str) -> Result<Self, MalformedContactId> {
        Uuid::parse_str(raw).map(Self).map_err(|_| MalformedContactId {
            value: raw.to_owned(),
        })
    }

    /// Generate a new random identifier.
    #[must_use]
    pub fn random() -> Self {
        Self(Uuid::new_v4())
    }

    /// Wrap an existing UUID, e.g. one read back from storage.
    #[must_use]
    pub fn from_uuid(uuid: Uuid) -> Self {
        Self(uuid)
    }

    /// Access the underlying UUID.
    #[must_use]
    pub fn as_uuid(&self) -> &Uuid {
        &self.0
    }
}

impl fmt::Display for ContactId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A single contact validation failure.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContactValidationError {
    /// Email was supplied but is not a valid address.
    InvalidEmail,
    /// Name was empty.
    MissingName,
    /// Neither email nor phone was supplied.
    MissingChannel,
}

impl ContactValidationError {
    /// Form field the failure refers to.
    #[must_use]
    pub fn field(self) -> &'static str {
        match self {
            Self::InvalidEmail => "email",
            Self::MissingName => "nome",
            Self::MissingChannel => "telefone",
        }
    }
}

impl fmt::Display for ContactValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidEmail => write!(f, "E-mail inválido"),
            Self::MissingName => write!(f, "Nome é um campo obrigatório."),
            Self::MissingChannel => write!(
                f,
                "Pelo menos um contato precisa ser enviado: e-mail ou telefone."
            ),
        }
    }
}

impl std::error::Error for ContactValidationError {}

/// Non-empty, ordered list of contact validation failures.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContactValidationErrors(Vec<ContactValidationError>);

impl ContactValidationErrors {
    /// Failures in the order they were detected.
    #[must_use]
    pub fn errors(&self) -> &[ContactValidationError] {
        &self.0
    }

    /// Human-readable messages in detection order.
    #[must_use]
    pub fn messages(&self) -> Vec<String> {
        self.0.iter().map(ToString::to_string).collect()
    }
}

impl fmt::Display for ContactValidationErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.messages().join(" "))
    }
}

impl std::error::Error for ContactValidationErrors {}

/// Raw contact form payload.
///
/// Every field accepts any JSON value; non-text values become `""`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct ContactInput {
    #[serde(rename = "nome", default, deserialize_with = "text_or_empty")]
    #[schema(example = "Ana")]
    pub name: String,
    #[serde(rename = "sobrenome", default, deserialize_with = "text_or_empty")]
    #[schema(example = "Souza")]
    pub surname: String,
    #[serde(default, deserialize_with = "text_or_empty")]
    #[schema(example = "ana@example.com")]
    pub email: String,
    #[serde(rename = "telefone", default, deserialize_with = "text_or_empty")]
    #[schema(example = "11 99999-0000")]
    pub phone: String,
}

impl ContactInput {
    /// Validate and normalise the payload into storable fields.
    ///
    /// Checks run in a fixed order: email format, name presence, then the
    /// requirement for at least one contact channel.
    ///
    /// # Examples
    /// ```
    /// use agenda::domain::ContactInput;
    ///
    /// let input = ContactInput {
    ///     name: String::new(),
    ///     phone: "123".into(),
    ///     ..ContactInput::default()
    /// };
    /// let errors = input.validate().expect_err("name is required");
    /// assert_eq!(errors.messages(), vec!["Nome é um campo obrigatório."]);
    /// ```
    pub fn validate(self) -> Result<ContactFields, ContactValidationErrors> {
        let mut errors = Vec::new();

        if !self.email.is_empty() && !is_well_formed_email(&self.email) {
            errors.push(ContactValidationError::InvalidEmail);
        }
        if self.name.is_empty() {
            errors.push(ContactValidationError::MissingName);
        }
        if self.email.is_empty() && self.phone.is_empty() {
            errors.push(ContactValidationError::MissingChannel);
        }

        if !errors.is_empty() {
            return Err(ContactValidationErrors(errors));
        }

        Ok(ContactFields {
            name: self.name,
            surname: self.surname,
            email: self.email,
            phone: self.phone,
        })
    }
}

/// Validated, user-editable contact fields.
///
/// ## Invariants
/// - `name` is non-empty.
/// - At least one of `email` and `phone` is non-empty.
/// - `email`, when non-empty, is well formed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContactFields {
    name: String,
    surname: String,
    email: String,
    phone: String,
}

impl ContactFields {
    /// Contact first name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Contact surname, possibly empty.
    #[must_use]
    pub fn surname(&self) -> &str {
        &self.surname
    }

    /// Contact email, possibly empty.
    #[must_use]
    pub fn email(&self) -> &str {
        &self.email
    }

    /// Contact phone, possibly empty.
    #[must_use]
    pub fn phone(&self) -> &str {
        &self.phone
    }
}

/// Stored contact record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct Contact {
    #[schema(value_type = String, example = "3fa85f64-5717-4562-b3fc-2c963f66afa6")]
    pub id: ContactId,
    #[serde(rename = "nome")]
    pub name: String,
    #[serde(rename = "sobrenome")]
    pub surname: String,
    pub email: String,
    #[serde(rename = "telefone")]
    pub phone: String,
    #[serde(rename = "criadoEm")]
    pub created_at: DateTime<Utc>,
}

impl Contact {
    /// Build a new record from validated fields.
    #[must_use]
    pub fn new(id: ContactId, fields: ContactFields, created_at: DateTime<Utc>) -> Self {
        let ContactFields {
            name,
            surname,
            email,
            phone,
        } = fields;
        Self {
            id,
            name,
            surname,
            email,
            phone,
            created_at,
        }
    }

    /// Replace the editable fields, keeping id and creation time.
    #[must_use]
    pub fn with_fields(self, fields: ContactFields) -> Self {
        Self::new(self.id, fields, self.created_at)
    }
}
