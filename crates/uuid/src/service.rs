//! Internal implementation of the case-identifier type.

use crate::{UuidError, UuidResult};
use std::{fmt, str::FromStr};

/// Re-exported for convenience.
pub use ::uuid::Uuid;

/// The canonical case identifier (32 lowercase hex characters, no hyphens).
///
/// This wrapper type guarantees that once constructed, the contained UUID is in the
/// canonical format. It provides type safety for identifier operations and keeps the
/// string representation consistent everywhere a case id appears.
///
/// # When to use this type
/// Use this wrapper whenever you are:
/// - Accepting a case id from *outside* the core (CLI input, wire JSON, etc), or
/// - Generating a new case identifier.
///
/// Once you have a `CaseUuid`, you can safely assume the internal UUID is valid and in
/// canonical form.
///
/// # Construction
/// - [`CaseUuid::new`] generates a new canonical identifier (for new case records).
/// - [`CaseUuid::parse`] validates an externally supplied identifier.
///
/// # Errors
/// [`CaseUuid::parse`] returns [`UuidError::InvalidInput`] if the input is not already
/// canonical.
///
/// # Display format
/// When displayed or converted to string, `CaseUuid` always produces the canonical
/// 32-character lowercase hex format without hyphens.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct CaseUuid(Uuid);

impl Default for CaseUuid {
    fn default() -> Self {
        Self::new()
    }
}

impl CaseUuid {
    /// Generates a new identifier in canonical form.
    ///
    /// This is suitable for allocating a fresh identifier during case creation.
    /// The generated UUID follows RFC 4122 version 4.
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    /// Validates and parses an identifier string that must already be in canonical form.
    ///
    /// This does **not** normalise other common UUID forms (for example, hyphenated or
    /// uppercase). Callers must provide the canonical representation.
    ///
    /// # Arguments
    ///
    /// * `input` - Identifier string to validate and wrap. Must be exactly 32 lowercase
    ///   hex characters.
    ///
    /// # Errors
    ///
    /// Returns [`UuidError::InvalidInput`] if `input` is not in canonical form.
    pub fn parse(input: &str) -> UuidResult<Self> {
        if Self::is_canonical(input) {
            // SAFETY: is_canonical guarantees valid hex, so parse_str will succeed
            let uuid = Uuid::parse_str(input).expect("is_canonical guarantees valid UUID");
            return Ok(Self(uuid));
        }
        Err(UuidError::InvalidInput(format!(
            "case id must be 32 lowercase hex characters without hyphens, got: '{}'",
            input
        )))
    }

    /// Returns the identifier as a `uuid::Uuid`.
    pub fn uuid(&self) -> Uuid {
        self.0
    }

    /// Returns true if `input` is in canonical form.
    ///
    /// This is a purely syntactic check that validates:
    /// - Exactly 32 bytes long
    /// - Contains only lowercase hex characters (`0-9` and `a-f`)
    ///
    /// # Arguments
    ///
    /// * `input` - Candidate identifier string to validate.
    pub fn is_canonical(input: &str) -> bool {
        input.len() == 32
            && input
                .bytes()
                .all(|b| matches!(b, b'0'..=b'9' | b'a'..=b'f'))
    }
}

impl fmt::Display for CaseUuid {
    /// Formats the identifier in canonical form (32 lowercase hex characters, no hyphens).
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // Display in canonical (simple) form
        write!(f, "{}", self.0.simple())
    }
}

impl FromStr for CaseUuid {
    type Err = UuidError;

    /// Parses a string into a `CaseUuid`, requiring canonical form.
    ///
    /// This is equivalent to calling [`CaseUuid::parse`].
    ///
    /// # Errors
    ///
    /// Returns [`UuidError::InvalidInput`] if the string is not in canonical form.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        CaseUuid::parse(s)
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for CaseUuid {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(&self.to_string())
    }
}

#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for CaseUuid {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        CaseUuid::parse(&s).map_err(serde::de::Error::custom)
    }
}
