//! Error types for the case store.
//!
//! The store's own operations cannot fail: creation always succeeds, and the read
//! projections answer "nothing" with an empty value rather than an error. The one
//! condition worth signalling is reaching for the store outside its provisioning
//! scope, which gets a distinct error so callers can branch on it explicitly instead
//! of unwinding.

/// Errors surfaced by the case store and its session scope.
#[derive(Debug, PartialEq, Eq, thiserror::Error)]
pub enum CaseError {
    /// The case store was accessed before [`SessionScope::initialise`] (or after
    /// [`SessionScope::teardown`]).
    ///
    /// [`SessionScope::initialise`]: crate::session::SessionScope::initialise
    /// [`SessionScope::teardown`]: crate::session::SessionScope::teardown
    #[error("case store accessed before initialisation")]
    StoreNotInitialised,
}

pub type CaseResult<T> = std::result::Result<T, CaseError>;
