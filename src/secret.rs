//! The session secret and the registry that holds it.

use crate::digits;
use crate::error::{ClassifyError, InputError};

/// An immutable secret digit sequence.
///
/// The canonical text form is produced once at construction and reused for
/// occurrence counting, so it can never drift from the digits.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Secret {
    digits: Vec<u8>,
    text: String,
}

impl Secret {
    pub fn from_digits(digits: Vec<u8>) -> Result<Self, ClassifyError> {
        if let Some((position, value)) = digits::first_invalid(&digits) {
            return Err(ClassifyError::InvalidDigit { position, value });
        }
        let text = digits::render(&digits);
        Ok(Self { digits, text })
    }

    /// Parse trimmed user text such as `"9689"`.
    pub fn parse(text: &str) -> Result<Self, InputError> {
        let digits = digits::parse(text)?;
        let text = digits::render(&digits);
        Ok(Self { digits, text })
    }

    pub fn digits(&self) -> &[u8] {
        &self.digits
    }

    pub fn as_str(&self) -> &str {
        &self.text
    }

    pub fn len(&self) -> usize {
        self.digits.len()
    }

    pub fn is_empty(&self) -> bool {
        self.digits.is_empty()
    }
}

impl std::fmt::Display for Secret {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.text)
    }
}

/// Holds at most one secret per session and fixes the guess length.
#[derive(Debug, Clone, Default)]
pub struct SecretRegistry {
    secret: Option<Secret>,
}

impl SecretRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store `secret` if none is set yet. Returns whether it was stored;
    /// empty secrets are never stored.
    pub fn set(&mut self, secret: Secret) -> bool {
        if self.secret.is_some() || secret.is_empty() {
            return false;
        }
        self.secret = Some(secret);
        true
    }

    pub fn get(&self) -> Option<&Secret> {
        self.secret.as_ref()
    }

    /// The fixed guess length, once a secret is set.
    pub fn length(&self) -> Option<usize> {
        self.secret.as_ref().map(Secret::len)
    }

    pub fn is_set(&self) -> bool {
        self.secret.is_some()
    }

    pub fn reset(&mut self) {
        self.secret = None;
    }
}
