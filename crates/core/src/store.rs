//! The in-memory case store.
//!
//! Holds the intake/diagnosis records for one browsing session and exposes
//! create/read/clear operations. The store keeps every record it ever created, in
//! insertion order, plus a pointer to the single "active" record the UI is currently
//! showing. "Update" is modelled as create-and-replace-active-pointer; records are
//! never patched in place and never deleted.
//!
//! The store is an explicitly constructed value, passed by reference to consumers.
//! Session lifetime (provisioning and teardown) is handled by
//! [`SessionScope`](crate::session::SessionScope).

use crate::sources::{Clock, IdSource, SystemClock, UuidIdSource};
use intake_record::{CaseDraft, CaseRecord, DifferentialDiagnosis, TranslatedResponse};
use intake_uuid::CaseUuid;
use std::fmt;

/// In-memory store for intake case records.
///
/// Holds a history of every record created this session and at most one active
/// record. All mutation goes through `&mut self`; there is no interior mutability and
/// no shared global instance.
pub struct CaseStore {
    ids: Box<dyn IdSource>,
    clock: Box<dyn Clock>,
    history: Vec<CaseRecord>,
    // Index into `history`. Safe to hold across creates because history is append-only.
    active: Option<usize>,
}

impl CaseStore {
    /// Creates a store backed by the production collaborators
    /// ([`UuidIdSource`] and [`SystemClock`]).
    pub fn new() -> Self {
        Self::with_sources(Box::new(UuidIdSource), Box::new(SystemClock))
    }

    /// Creates a store with injected collaborators.
    ///
    /// This is how tests obtain deterministic identifiers and timestamps; production
    /// code normally uses [`CaseStore::new`].
    pub fn with_sources(ids: Box<dyn IdSource>, clock: Box<dyn Clock>) -> Self {
        Self {
            ids,
            clock,
            history: Vec::new(),
            active: None,
        }
    }

    /// Creates a record from an intake draft and makes it the active record.
    ///
    /// Generates a fresh identifier (unique within this store's lifetime), stamps the
    /// creation time from the clock, and appends the record to history. Always
    /// succeeds; the draft is stored as submitted, without validation.
    ///
    /// # Arguments
    ///
    /// * `draft` - Every record field except identity, which the store assigns.
    ///
    /// # Returns
    ///
    /// A reference to the newly created (now active) record.
    pub fn create_record(&mut self, draft: CaseDraft) -> &CaseRecord {
        let id = self.fresh_id();
        let created_at = self.clock.now();

        let record = draft.into_record(id, created_at);
        tracing::debug!(case_id = %record.id, "created case record");

        self.history.push(record);
        let index = self.history.len() - 1;
        self.active = Some(index);
        &self.history[index]
    }

    /// Clears the active-record pointer. History is untouched.
    pub fn clear_active(&mut self) {
        if let Some(record) = self.active() {
            tracing::debug!(case_id = %record.id, "cleared active case record");
        }
        self.active = None;
    }

    /// Returns the active record, if any.
    pub fn active(&self) -> Option<&CaseRecord> {
        self.active.map(|index| &self.history[index])
    }

    /// Returns every record created this session, in insertion order.
    pub fn history(&self) -> &[CaseRecord] {
        &self.history
    }

    /// Returns the active record's translation bundle for `language`.
    ///
    /// Matches on exact equality of the language code and takes the first match;
    /// duplicate languages are tolerated on write, so later entries for the same
    /// language are unreachable through this projection.
    ///
    /// # Returns
    ///
    /// `None` when no record is active or no entry matches.
    pub fn translation(&self, language: &str) -> Option<&TranslatedResponse> {
        self.active()?
            .translated_responses
            .iter()
            .find(|t| t.language == language)
    }

    /// Returns the active record's differential diagnoses.
    ///
    /// Empty when no record is active; absence is not an error.
    pub fn diagnoses(&self) -> &[DifferentialDiagnosis] {
        self.active()
            .map(|record| record.differential_diagnoses.as_slice())
            .unwrap_or(&[])
    }

    /// Returns the active record's suggested next steps.
    ///
    /// Empty when no record is active; absence is not an error.
    pub fn next_steps(&self) -> &[String] {
        self.active()
            .map(|record| record.suggested_next_steps.as_slice())
            .unwrap_or(&[])
    }

    /// Draw an identifier the store has never handed out.
    ///
    /// Collisions cannot occur with the production source; with an injected source
    /// they are tolerated by drawing again. The source must eventually yield a fresh
    /// value.
    fn fresh_id(&self) -> CaseUuid {
        loop {
            let id = self.ids.next_id();
            if !self.history.iter().any(|record| record.id == id) {
                return id;
            }
            tracing::warn!(case_id = %id, "id source repeated a case id, drawing again");
        }
    }
}

impl Default for CaseStore {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for CaseStore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CaseStore")
            .field("history_len", &self.history.len())
            .field("active_id", &self.active().map(|r| r.id.to_string()))
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sources::{Clock, IdSource};
    use chrono::{DateTime, TimeZone, Utc};
    use intake_record::{DurationUnit, Gender};
    use std::sync::atomic::{AtomicU64, Ordering};
    use std::sync::Mutex;

    /// Deterministic id source: 1, 2, 3, ... as canonical hex.
    struct SeqIdSource(AtomicU64);

    impl SeqIdSource {
        fn new() -> Self {
            Self(AtomicU64::new(1))
        }
    }

    impl IdSource for SeqIdSource {
        fn next_id(&self) -> CaseUuid {
            let n = self.0.fetch_add(1, Ordering::Relaxed);
            CaseUuid::parse(&format!("{n:032x}")).unwrap()
        }
    }

    /// Id source that replays a scripted sequence.
    struct ScriptedIdSource(Mutex<Vec<&'static str>>);

    impl IdSource for ScriptedIdSource {
        fn next_id(&self) -> CaseUuid {
            let mut script = self.0.lock().unwrap();
            CaseUuid::parse(script.remove(0)).unwrap()
        }
    }

    struct FixedClock(DateTime<Utc>);

    impl Clock for FixedClock {
        fn now(&self) -> DateTime<Utc> {
            self.0
        }
    }

    fn test_store() -> CaseStore {
        let clock = FixedClock(Utc.with_ymd_and_hms(2026, 8, 4, 9, 30, 0).unwrap());
        CaseStore::with_sources(Box::new(SeqIdSource::new()), Box::new(clock))
    }

    fn draft(concern: &str) -> CaseDraft {
        CaseDraft {
            primary_concern: concern.to_string(),
            additional_symptoms: "mild fever".to_string(),
            medications: "none".to_string(),
            allergies: "penicillin".to_string(),
            pre_existing_conditions: "asthma".to_string(),
            symptom_duration: 3,
            duration_unit: DurationUnit::Days,
            age: 34,
            gender: Gender::Female,
            other_gender: None,
            images: vec![],
            translated_responses: vec![],
            differential_diagnoses: vec![],
            suggested_next_steps: vec![],
        }
    }

    fn translation(language: &str, concern: &str) -> TranslatedResponse {
        TranslatedResponse {
            language: language.to_string(),
            primary_concern: concern.to_string(),
            additional_symptoms: String::new(),
            medications: String::new(),
            allergies: String::new(),
            pre_existing_conditions: String::new(),
        }
    }

    #[test]
    fn create_makes_record_active_and_grows_history_by_one() {
        let mut store = test_store();

        let record = store.create_record(draft("cough")).clone();

        assert_eq!(store.history().len(), 1);
        assert_eq!(store.active(), Some(&record));
        assert_eq!(
            record.created_at,
            Utc.with_ymd_and_hms(2026, 8, 4, 9, 30, 0).unwrap()
        );
    }

    #[test]
    fn created_ids_are_unique_within_store_lifetime() {
        let mut store = test_store();

        for i in 0..5 {
            store.create_record(draft(&format!("concern {i}")));
        }

        let mut ids: Vec<String> = store
            .history()
            .iter()
            .map(|record| record.id.to_string())
            .collect();
        ids.sort();
        ids.dedup();
        assert_eq!(ids.len(), 5);
    }

    #[test]
    fn colliding_id_source_draws_again() {
        const A: &str = "0000000000000000000000000000000a";
        const B: &str = "0000000000000000000000000000000b";

        let source = ScriptedIdSource(Mutex::new(vec![A, A, B]));
        let clock = FixedClock(Utc.with_ymd_and_hms(2026, 8, 4, 9, 30, 0).unwrap());
        let mut store = CaseStore::with_sources(Box::new(source), Box::new(clock));

        store.create_record(draft("first"));
        store.create_record(draft("second"));

        assert_eq!(store.history()[0].id.to_string(), A);
        assert_eq!(store.history()[1].id.to_string(), B);
    }

    #[test]
    fn second_create_replaces_active_and_preserves_order() {
        let mut store = test_store();

        store.create_record(draft("record a"));
        store.create_record(draft("record b"));

        assert_eq!(store.active().unwrap().primary_concern, "record b");
        assert_eq!(store.history().len(), 2);
        assert_eq!(store.history()[0].primary_concern, "record a");
        assert_eq!(store.history()[1].primary_concern, "record b");
    }

    #[test]
    fn clear_active_keeps_history() {
        let mut store = test_store();
        store.create_record(draft("cough"));

        store.clear_active();

        assert_eq!(store.active(), None);
        assert_eq!(store.history().len(), 1);
    }

    #[test]
    fn clear_active_without_active_record_is_a_no_op() {
        let mut store = test_store();

        store.clear_active();

        assert_eq!(store.active(), None);
        assert!(store.history().is_empty());
    }

    #[test]
    fn translation_requires_an_active_record() {
        let mut store = test_store();
        assert!(store.translation("es").is_none());

        let mut d = draft("dolor source");
        d.translated_responses = vec![translation("es", "dolor")];
        store.create_record(d);
        store.clear_active();

        // Record exists in history but nothing is active
        assert!(store.translation("es").is_none());
    }

    #[test]
    fn translation_matches_language_exactly() {
        let mut d = draft("pain");
        d.translated_responses = vec![translation("es", "dolor")];

        let mut store = test_store();
        store.create_record(d);

        assert_eq!(store.translation("es").unwrap().primary_concern, "dolor");
        assert!(store.translation("fr").is_none());
        assert!(store.translation("ES").is_none());
    }

    #[test]
    fn translation_takes_first_match_when_languages_repeat() {
        let mut d = draft("pain");
        d.translated_responses = vec![translation("es", "dolor"), translation("es", "molestia")];

        let mut store = test_store();
        store.create_record(d);

        assert_eq!(store.translation("es").unwrap().primary_concern, "dolor");
    }

    #[test]
    fn projections_are_empty_without_an_active_record() {
        let store = test_store();

        assert!(store.diagnoses().is_empty());
        assert!(store.next_steps().is_empty());
    }

    #[test]
    fn projections_read_the_active_record() {
        let mut d = draft("cough");
        d.differential_diagnoses = vec![DifferentialDiagnosis {
            condition: "Post-viral cough".to_string(),
            confidence: "moderate".to_string(),
            description: "Lingering cough after infection.".to_string(),
            next_steps: vec!["Monitor".to_string()],
        }];
        d.suggested_next_steps = vec!["See a GP if it persists".to_string()];

        let mut store = test_store();
        store.create_record(d);

        assert_eq!(store.diagnoses().len(), 1);
        assert_eq!(store.diagnoses()[0].condition, "Post-viral cough");
        assert_eq!(store.next_steps(), ["See a GP if it persists"]);
    }

    #[test]
    fn projections_follow_the_active_pointer_not_history() {
        let mut a = draft("a");
        a.suggested_next_steps = vec!["rest".to_string()];
        let mut b = draft("b");
        b.suggested_next_steps = vec!["hydrate".to_string()];

        let mut store = test_store();
        store.create_record(a);
        store.create_record(b);

        assert_eq!(store.next_steps(), ["hydrate"]);
    }
}
