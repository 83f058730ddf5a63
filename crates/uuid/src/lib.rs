//! Case-identifier utilities.
//!
//! Every intake case is addressed by a *canonical* identifier: **32 lowercase
//! hexadecimal characters** (no hyphens). The canonical form is what the surrounding
//! product embeds in URLs and attachment references, so it must not vary by
//! representation.
//!
//! This crate provides a small wrapper type ([`CaseUuid`]) that *guarantees* the
//! canonical format once constructed.
//!
//! ## Canonical form
//! - Length: 32
//! - Characters: `0-9` and `a-f` only
//! - Example: `550e8400e29b41d4a716446655440000`
//!
//! Notes:
//! - This is the same value you would get from `Uuid::new_v4().simple().to_string()`.
//! - Canonical form is *required* for externally supplied identifiers (for example,
//!   from CLI or wire-JSON inputs). Use [`CaseUuid::parse`] to validate an input
//!   string.
//! - Non-canonical values (uppercase, hyphenated, wrong length, non-hex) are rejected.

mod service;

// Re-export public types
pub use service::{CaseUuid, Uuid};

/// Error type for identifier operations.
#[derive(Debug, thiserror::Error)]
pub enum UuidError {
    /// Invalid input provided
    #[error("Invalid input: {0}")]
    InvalidInput(String),
}

/// Result type for identifier operations.
pub type UuidResult<T> = Result<T, UuidError>;
