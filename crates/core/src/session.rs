//! Session-scoped provisioning of the case store.
//!
//! The store lives exactly as long as one browsing session: it is provisioned when
//! the session starts and dropped at teardown. Consumers reach the store through a
//! [`SessionScope`], and reaching it outside that window is answered with a distinct
//! [`CaseError::StoreNotInitialised`] result rather than a panic, so callers can
//! branch on it explicitly.

use crate::error::{CaseError, CaseResult};
use crate::store::CaseStore;

/// The provisioning scope for one session's case store.
///
/// Starts empty; [`initialise`](SessionScope::initialise) installs a store and
/// [`teardown`](SessionScope::teardown) drops it. Between those two calls,
/// [`store`](SessionScope::store) and [`store_mut`](SessionScope::store_mut) hand out
/// access; outside them, both return [`CaseError::StoreNotInitialised`].
#[derive(Debug, Default)]
pub struct SessionScope {
    store: Option<CaseStore>,
}

impl SessionScope {
    /// Creates an unprovisioned scope.
    pub fn new() -> Self {
        Self { store: None }
    }

    /// Returns true if a store is currently provisioned.
    pub fn is_initialised(&self) -> bool {
        self.store.is_some()
    }

    /// Provisions `store` for this session.
    ///
    /// Initialising an already-provisioned scope replaces the previous store,
    /// starting a fresh session; the old store and its history are dropped.
    pub fn initialise(&mut self, store: CaseStore) {
        if self.store.is_some() {
            tracing::debug!("re-initialising case session, previous store dropped");
        }
        self.store = Some(store);
        tracing::debug!("case session initialised");
    }

    /// Drops the provisioned store, ending the session.
    pub fn teardown(&mut self) {
        self.store = None;
        tracing::debug!("case session torn down");
    }

    /// Read access to the session's store.
    ///
    /// # Errors
    ///
    /// Returns [`CaseError::StoreNotInitialised`] outside the provisioning window.
    pub fn store(&self) -> CaseResult<&CaseStore> {
        self.store.as_ref().ok_or(CaseError::StoreNotInitialised)
    }

    /// Write access to the session's store.
    ///
    /// # Errors
    ///
    /// Returns [`CaseError::StoreNotInitialised`] outside the provisioning window.
    pub fn store_mut(&mut self) -> CaseResult<&mut CaseStore> {
        self.store.as_mut().ok_or(CaseError::StoreNotInitialised)
    }
}
