//! # Intake Core
//!
//! Core business logic for the intake case store.
//!
//! This crate contains pure data operations on in-memory case records:
//! - Case creation with store-assigned identity (id + creation timestamp)
//! - The active-record pointer and its read projections (translations,
//!   differential diagnoses, suggested next steps)
//! - The session scope that provisions the store for one browsing session
//!
//! **No presentation concerns**: forms, diagnosis panels, or transport surfaces belong
//! to the consumers of this crate (for example `intake-cli`).

pub mod error;
pub mod session;
pub mod sources;
pub mod store;

pub use error::{CaseError, CaseResult};
pub use session::SessionScope;
pub use sources::{Clock, IdSource, SystemClock, UuidIdSource};
pub use store::CaseStore;
