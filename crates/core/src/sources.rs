//! Collaborators the store consumes: identifier generation and wall-clock time.
//!
//! These are the two external facilities the store depends on. Resolving them once at
//! construction and passing them in keeps the store deterministic under test: inject a
//! counting id source and a fixed clock, and every record the store creates is fully
//! predictable.

use chrono::{DateTime, Utc};
use intake_uuid::CaseUuid;

/// A facility producing a fresh case identifier per call.
///
/// The default implementation is [`UuidIdSource`]. The store assumes the source
/// *eventually* yields a value it has not seen before; it re-draws on collision.
pub trait IdSource: Send + Sync {
    /// Produce the next identifier.
    fn next_id(&self) -> CaseUuid;
}

/// A wall-clock time source.
///
/// The default implementation is [`SystemClock`].
pub trait Clock: Send + Sync {
    /// The current instant.
    fn now(&self) -> DateTime<Utc>;
}

/// Production id source: a random v4 identifier per call.
#[derive(Clone, Copy, Debug, Default)]
pub struct UuidIdSource;

impl IdSource for UuidIdSource {
    fn next_id(&self) -> CaseUuid {
        CaseUuid::new()
    }
}

/// Production clock: the system wall clock.
#[derive(Clone, Copy, Debug, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }
}
