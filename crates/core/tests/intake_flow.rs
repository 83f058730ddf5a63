//! End-to-end intake flow: wire JSON in, projections out.
//!
//! Drives the same path a front end would: parse a submitted draft, provision a
//! session, create the record, then read the projections the UI panels consume.

use intake_core::{CaseError, CaseStore, SessionScope};
use intake_record::Case;

fn submitted_draft() -> &'static str {
    r#"{
        "primaryConcern": "persistent cough",
        "additionalSymptoms": "mild fever in the evenings",
        "medications": "none",
        "allergies": "penicillin",
        "preExistingConditions": "asthma",
        "symptomDuration": 3,
        "durationUnit": "weeks",
        "age": 34,
        "gender": "female",
        "translatedResponses": [
            {
                "language": "es",
                "primaryConcern": "tos persistente",
                "additionalSymptoms": "fiebre leve por las tardes",
                "medications": "ninguno",
                "allergies": "penicilina",
                "preExistingConditions": "asma"
            }
        ],
        "differentialDiagnoses": [
            {
                "condition": "Post-viral cough",
                "confidence": "moderate",
                "description": "Lingering cough after a respiratory infection.",
                "nextSteps": ["Monitor for 1-2 weeks"]
            }
        ],
        "suggestedNextSteps": ["See a GP if the cough lasts beyond four weeks"]
    }"#
}

#[test]
fn submitted_draft_flows_through_store_and_projections() {
    let draft = Case::parse_draft(submitted_draft()).unwrap();

    let mut scope = SessionScope::new();
    scope.initialise(CaseStore::new());

    let store = scope.store_mut().unwrap();
    let case_id = store.create_record(draft).id.clone();

    let store = scope.store().unwrap();
    assert_eq!(store.active().unwrap().id, case_id);
    assert_eq!(store.history().len(), 1);

    // The three read projections the UI panels consume
    assert_eq!(
        store.translation("es").unwrap().primary_concern,
        "tos persistente"
    );
    assert!(store.translation("fr").is_none());
    assert_eq!(store.diagnoses()[0].condition, "Post-viral cough");
    assert_eq!(
        store.next_steps(),
        ["See a GP if the cough lasts beyond four weeks"]
    );

    // The stored record renders to wire JSON and parses back unchanged
    let record = store.active().unwrap();
    let rendered = Case::render(record).unwrap();
    let reparsed = Case::parse(&rendered).unwrap();
    assert_eq!(&reparsed, record);
}

#[test]
fn session_teardown_ends_store_access() {
    let mut scope = SessionScope::new();
    scope.initialise(CaseStore::new());
    scope.teardown();

    assert_eq!(scope.store().unwrap_err(), CaseError::StoreNotInitialised);
}

#[test]
fn clearing_the_active_record_empties_projections_but_not_history() {
    let draft = Case::parse_draft(submitted_draft()).unwrap();

    let mut store = CaseStore::new();
    store.create_record(draft);
    store.clear_active();

    assert!(store.active().is_none());
    assert!(store.diagnoses().is_empty());
    assert!(store.next_steps().is_empty());
    assert!(store.translation("es").is_none());
    assert_eq!(store.history().len(), 1);
}
