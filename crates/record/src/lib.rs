//! Wire/boundary support for intake case records.
//!
//! This crate provides **domain types** and **format/translation helpers** for the
//! case records the intake front end exchanges as JSON:
//! - one patient intake plus its AI-derived analysis ([`CaseRecord`])
//! - the submission shape before the store stamps identity ([`CaseDraft`])
//!
//! This crate focuses on:
//! - serialisation/deserialisation of the camelCase wire format
//! - translation between domain types and strict wire structs
//! - rejecting malformed wire input with path-qualified errors
//!
//! The in-memory store that holds these records lives in `intake-core`; nothing here
//! performs storage or lookup.

pub mod case;
pub mod coding;

// Re-export facades
pub use case::Case;

// Re-export public domain-level types
pub use case::{CaseDraft, CaseRecord, DifferentialDiagnosis, ImageAttachment, TranslatedResponse};
pub use coding::{DurationUnit, Gender};

/// Errors returned by the `intake-record` boundary crate.
#[derive(Debug, thiserror::Error)]
pub enum RecordError {
    #[error("invalid input: {0}")]
    InvalidInput(String),

    #[error("translation error: {0}")]
    Translation(String),
}

/// Type alias for Results that can fail with a [`RecordError`].
pub type RecordResult<T> = Result<T, RecordError>;
