//! Salted one-way password hashing.
//!
//! Passwords are hashed with Argon2id using a fresh random salt per account
//! and stored as PHC strings (`$argon2id$v=19$...`), which embed the salt
//! and parameters needed for verification.

use std::fmt;

use argon2::password_hash::{
    self, PasswordHash as PhcHash, PasswordHasher, PasswordVerifier, SaltString,
};
use argon2::Argon2;
use rand::rngs::OsRng;

/// Errors raised while hashing or verifying passwords.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum PasswordHashError {
    /// The hasher rejected its input or parameters.
    #[error("password hashing failed: {message}")]
    Hashing { message: String },
    /// A stored hash is not a valid PHC string.
    #[error("stored password hash is malformed: {message}")]
    Malformed { message: String },
}

/// Stored password hash in PHC string format.
///
/// The plaintext is never retained; `Debug` output is redacted.
#[derive(Clone, PartialEq, Eq)]
pub struct PasswordHash(String);

impl PasswordHash {
    /// Hash `password` with a newly generated random salt.
    ///
    /// # Examples
    /// ```
    /// use agenda::domain::PasswordHash;
    ///
    /// let hash = PasswordHash::generate("segredo").expect("hash");
    /// assert!(hash.verify("segredo").expect("verify"));
    /// assert!(!hash.verify("errado").expect("verify"));
    /// ```
    pub fn generate(password: &str) -> Result<Self, PasswordHashError> {
        let salt = SaltString::generate(&mut OsRng);
        let hash = Argon2::default()
            .hash_password(password.as_bytes(), &salt)
            .map_err(|err| PasswordHashError::Hashing {
                message: err.to_string(),
            })?;
        Ok(Self(hash.to_string()))
    }

    /// Wrap a PHC string read back from storage.
    pub fn from_phc(phc: impl Into<String>) -> Result<Self, PasswordHashError> {
        let phc = phc.into();
        PhcHash::new(&phc).map_err(|err| PasswordHashError::Malformed {
            message: err.to_string(),
        })?;
        Ok(Self(phc))
    }

    /// Check `password` against this hash using the embedded salt.
    pub fn verify(&self, password: &str) -> Result<bool, PasswordHashError> {
        let parsed = PhcHash::new(&self.0).map_err(|err| PasswordHashError::Malformed {
            message: err.to_string(),
        })?;
        match Argon2::default().verify_password(password.as_bytes(), &parsed) {
            Ok(()) => Ok(true),
            Err(password_hash::Error::Password) => Ok(false),
            Err(err) => Err(PasswordHashError::Hashing {
                message: err.to_string(),
            }),
        }
    }

    /// PHC string suitable for persistence.
    #[must_use]
    pub fn as_phc(&self) -> &str {
        self.0.as_str()
    }
}

impl fmt::Debug for PasswordHash {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("PasswordHash(<redacted>)")
    }
}
