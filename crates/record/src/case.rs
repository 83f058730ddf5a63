//! Case record wire models and translation helpers.
//!
//! A case record is one patient intake together with the AI-derived analysis that
//! came back for it: differential diagnoses, suggested next steps, and per-language
//! translations of the free-text answers.
//!
//! Responsibilities:
//! - Define public domain-level types for use by the store and front ends
//! - Define a strict camelCase wire model for serialisation/deserialisation
//! - Provide translation helpers between domain types and the wire model
//!
//! Notes:
//! - A record is immutable once created; the store replaces rather than patches
//! - The draft shape ([`CaseDraft`]) is the record minus identity (`id`/`created_at`),
//!   which only the store assigns

use crate::coding::{DurationUnit, Gender};
use crate::{RecordError, RecordResult};
use chrono::{DateTime, Utc};
use intake_uuid::CaseUuid;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

// ============================================================================
// Public domain-level types
// ============================================================================

/// One patient intake plus AI-derived analysis.
///
/// Created by the case store, which stamps `id` and `created_at`; every other field
/// comes verbatim from a [`CaseDraft`]. Records are never mutated field-by-field.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CaseRecord {
    /// Unique identifier for this case, generated at creation.
    pub id: CaseUuid,

    /// Creation timestamp, stamped at creation.
    pub created_at: DateTime<Utc>,

    /// The patient's main complaint, in their own words.
    pub primary_concern: String,

    /// Any further symptoms beyond the primary concern.
    pub additional_symptoms: String,

    /// Current medications, free text.
    pub medications: String,

    /// Known allergies, free text.
    pub allergies: String,

    /// Pre-existing conditions, free text.
    pub pre_existing_conditions: String,

    /// How long the symptoms have been present, in `duration_unit` units.
    pub symptom_duration: u32,

    /// Unit label for `symptom_duration`.
    pub duration_unit: DurationUnit,

    /// Patient age in years.
    pub age: u32,

    /// Patient-reported gender.
    pub gender: Gender,

    /// Free-text gender description when `gender` is [`Gender::Other`].
    pub other_gender: Option<String>,

    /// Attachment references, in upload order. The record owns this list; the
    /// binary image data lives behind the URL, not here.
    pub images: Vec<ImageAttachment>,

    /// Per-language translations of the free-text answers. At most one entry per
    /// language is meaningful; lookups take the first match.
    pub translated_responses: Vec<TranslatedResponse>,

    /// AI-derived differential diagnoses, most relevant first.
    pub differential_diagnoses: Vec<DifferentialDiagnosis>,

    /// AI-derived recommendations for the patient.
    pub suggested_next_steps: Vec<String>,
}

/// The intake submission shape: every [`CaseRecord`] field except identity.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CaseDraft {
    /// The patient's main complaint, in their own words.
    pub primary_concern: String,
    /// Any further symptoms beyond the primary concern.
    pub additional_symptoms: String,
    /// Current medications, free text.
    pub medications: String,
    /// Known allergies, free text.
    pub allergies: String,
    /// Pre-existing conditions, free text.
    pub pre_existing_conditions: String,
    /// How long the symptoms have been present, in `duration_unit` units.
    pub symptom_duration: u32,
    /// Unit label for `symptom_duration`.
    pub duration_unit: DurationUnit,
    /// Patient age in years.
    pub age: u32,
    /// Patient-reported gender.
    pub gender: Gender,
    /// Free-text gender description when `gender` is [`Gender::Other`].
    pub other_gender: Option<String>,
    /// Attachment references, in upload order.
    pub images: Vec<ImageAttachment>,
    /// Per-language translations of the free-text answers.
    pub translated_responses: Vec<TranslatedResponse>,
    /// AI-derived differential diagnoses.
    pub differential_diagnoses: Vec<DifferentialDiagnosis>,
    /// AI-derived recommendations for the patient.
    pub suggested_next_steps: Vec<String>,
}

impl CaseDraft {
    /// Combine this draft with store-assigned identity into a full record.
    pub fn into_record(self, id: CaseUuid, created_at: DateTime<Utc>) -> CaseRecord {
        CaseRecord {
            id,
            created_at,
            primary_concern: self.primary_concern,
            additional_symptoms: self.additional_symptoms,
            medications: self.medications,
            allergies: self.allergies,
            pre_existing_conditions: self.pre_existing_conditions,
            symptom_duration: self.symptom_duration,
            duration_unit: self.duration_unit,
            age: self.age,
            gender: self.gender,
            other_gender: self.other_gender,
            images: self.images,
            translated_responses: self.translated_responses,
            differential_diagnoses: self.differential_diagnoses,
            suggested_next_steps: self.suggested_next_steps,
        }
    }
}

/// Reference to an uploaded image.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ImageAttachment {
    /// Opaque identifier assigned by the upload flow.
    pub id: String,
    /// Where the binary image data lives.
    pub url: String,
    /// Patient-supplied description of the image.
    pub description: String,
    /// When the image was attached.
    pub timestamp: DateTime<Utc>,
}

/// The free-text intake answers translated into one target language.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TranslatedResponse {
    /// Target language code (for example `"es"`).
    pub language: String,
    /// Translated primary concern.
    pub primary_concern: String,
    /// Translated additional symptoms.
    pub additional_symptoms: String,
    /// Translated medications.
    pub medications: String,
    /// Translated allergies.
    pub allergies: String,
    /// Translated pre-existing conditions.
    pub pre_existing_conditions: String,
}

/// One entry in the differential-diagnosis list.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DifferentialDiagnosis {
    /// Name of the candidate condition.
    pub condition: String,
    /// Confidence label as produced by the analysis; free text, not a fixed vocabulary.
    pub confidence: String,
    /// Explanation of why this condition is a candidate.
    pub description: String,
    /// Condition-specific recommendations.
    pub next_steps: Vec<String>,
}

// ============================================================================
// Public Case operations
// ============================================================================

/// Case record wire operations.
///
/// This is a zero-sized type used for namespacing record-related operations.
/// All methods are associated functions.
pub struct Case;

impl Case {
    /// Parse a full case record from JSON text.
    ///
    /// This uses `serde_path_to_error` to surface a best-effort "path" (e.g.
    /// `images.0.timestamp`) to the failing field when the JSON does not match the
    /// wire schema.
    ///
    /// # Arguments
    ///
    /// * `json_text` - JSON text expected to represent a full case record.
    ///
    /// # Errors
    ///
    /// Returns [`RecordError`] if:
    /// - the JSON does not match the wire schema (including unknown keys, due to
    ///   `#[serde(deny_unknown_fields)]`),
    /// - `id` is not in canonical form,
    /// - any timestamp is not a valid RFC 3339 instant,
    /// - `durationUnit` is not a recognised label.
    pub fn parse(json_text: &str) -> RecordResult<CaseRecord> {
        let wire: CaseRecordWire = deserialize_wire(json_text, "case record")?;
        record_wire_to_domain(wire)
    }

    /// Render a full case record as JSON text.
    ///
    /// # Errors
    ///
    /// Returns [`RecordError::Translation`] if serialisation fails.
    pub fn render(record: &CaseRecord) -> RecordResult<String> {
        let wire = record_to_wire(record);
        serde_json::to_string_pretty(&wire)
            .map_err(|e| RecordError::Translation(format!("failed to serialise case record: {e}")))
    }

    /// Parse an intake draft (a record without identity) from JSON text.
    ///
    /// # Errors
    ///
    /// Same failure modes as [`Case::parse`], minus the identity fields.
    pub fn parse_draft(json_text: &str) -> RecordResult<CaseDraft> {
        let wire: CaseDraftWire = deserialize_wire(json_text, "case draft")?;
        draft_wire_to_domain(wire)
    }

    /// Render an intake draft as JSON text.
    ///
    /// # Errors
    ///
    /// Returns [`RecordError::Translation`] if serialisation fails.
    pub fn render_draft(draft: &CaseDraft) -> RecordResult<String> {
        let wire = draft_to_wire(draft);
        serde_json::to_string_pretty(&wire)
            .map_err(|e| RecordError::Translation(format!("failed to serialise case draft: {e}")))
    }
}

// ============================================================================
// Wire types (internal)
// ============================================================================

/// Wire representation of a full case record.
///
/// This is the exact structure exchanged as JSON with the front end.
/// All structs use `#[serde(deny_unknown_fields)]` for strict validation.
#[derive(Clone, Debug, Deserialize, Serialize, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
struct CaseRecordWire {
    pub id: String,

    #[serde(rename = "createdAt")]
    pub created_at: String,

    #[serde(rename = "primaryConcern")]
    pub primary_concern: String,

    #[serde(rename = "additionalSymptoms")]
    pub additional_symptoms: String,

    pub medications: String,

    pub allergies: String,

    #[serde(rename = "preExistingConditions")]
    pub pre_existing_conditions: String,

    #[serde(rename = "symptomDuration")]
    pub symptom_duration: u32,

    #[serde(rename = "durationUnit")]
    pub duration_unit: String,

    pub age: u32,

    pub gender: String,

    #[serde(rename = "otherGender", skip_serializing_if = "Option::is_none")]
    pub other_gender: Option<String>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub images: Vec<ImageWire>,

    #[serde(
        rename = "translatedResponses",
        default,
        skip_serializing_if = "Vec::is_empty"
    )]
    pub translated_responses: Vec<TranslatedResponseWire>,

    #[serde(
        rename = "differentialDiagnoses",
        default,
        skip_serializing_if = "Vec::is_empty"
    )]
    pub differential_diagnoses: Vec<DiagnosisWire>,

    #[serde(
        rename = "suggestedNextSteps",
        default,
        skip_serializing_if = "Vec::is_empty"
    )]
    pub suggested_next_steps: Vec<String>,
}

/// Wire representation of an intake draft.
#[derive(Clone, Debug, Deserialize, Serialize, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
struct CaseDraftWire {
    #[serde(rename = "primaryConcern")]
    pub primary_concern: String,

    #[serde(rename = "additionalSymptoms")]
    pub additional_symptoms: String,

    pub medications: String,

    pub allergies: String,

    #[serde(rename = "preExistingConditions")]
    pub pre_existing_conditions: String,

    #[serde(rename = "symptomDuration")]
    pub symptom_duration: u32,

    #[serde(rename = "durationUnit")]
    pub duration_unit: String,

    pub age: u32,

    pub gender: String,

    #[serde(rename = "otherGender", skip_serializing_if = "Option::is_none")]
    pub other_gender: Option<String>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub images: Vec<ImageWire>,

    #[serde(
        rename = "translatedResponses",
        default,
        skip_serializing_if = "Vec::is_empty"
    )]
    pub translated_responses: Vec<TranslatedResponseWire>,

    #[serde(
        rename = "differentialDiagnoses",
        default,
        skip_serializing_if = "Vec::is_empty"
    )]
    pub differential_diagnoses: Vec<DiagnosisWire>,

    #[serde(
        rename = "suggestedNextSteps",
        default,
        skip_serializing_if = "Vec::is_empty"
    )]
    pub suggested_next_steps: Vec<String>,
}

/// Wire representation of an image attachment reference.
#[derive(Clone, Debug, Deserialize, Serialize, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
struct ImageWire {
    pub id: String,
    pub url: String,
    pub description: String,
    pub timestamp: String,
}

/// Wire representation of a per-language translation bundle.
#[derive(Clone, Debug, Deserialize, Serialize, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
struct TranslatedResponseWire {
    pub language: String,

    #[serde(rename = "primaryConcern")]
    pub primary_concern: String,

    #[serde(rename = "additionalSymptoms")]
    pub additional_symptoms: String,

    pub medications: String,

    pub allergies: String,

    #[serde(rename = "preExistingConditions")]
    pub pre_existing_conditions: String,
}

/// Wire representation of a differential-diagnosis entry.
#[derive(Clone, Debug, Deserialize, Serialize, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
struct DiagnosisWire {
    pub condition: String,
    pub confidence: String,
    pub description: String,

    #[serde(rename = "nextSteps", default, skip_serializing_if = "Vec::is_empty")]
    pub next_steps: Vec<String>,
}

// ============================================================================
// Helper functions (internal)
// ============================================================================

/// Deserialize wire JSON with a path-qualified schema-mismatch error.
fn deserialize_wire<T: DeserializeOwned>(json_text: &str, what: &str) -> RecordResult<T> {
    let mut deserializer = serde_json::Deserializer::from_str(json_text);

    match serde_path_to_error::deserialize::<_, T>(&mut deserializer) {
        Ok(parsed) => Ok(parsed),
        Err(err) => {
            let path = err.path().to_string();
            let source = err.into_inner();
            let path = if path.is_empty() {
                "<root>"
            } else {
                path.as_str()
            };
            Err(RecordError::Translation(format!(
                "{what} schema mismatch at {path}: {source}"
            )))
        }
    }
}

/// Parse a wire timestamp, naming the field on failure.
fn timestamp_to_domain(value: &str, field: &str) -> RecordResult<DateTime<Utc>> {
    value.parse::<DateTime<Utc>>().map_err(|e| {
        RecordError::Translation(format!("invalid {field} timestamp '{value}': {e}"))
    })
}

/// Map a wire gender label to the domain enum.
///
/// Unrecognised labels land on [`Gender::Other`]; the free-text `otherGender` field is
/// where any detail lives. Dropping to an error here would reject records the original
/// intake flow accepted.
fn gender_to_domain(value: &str) -> Gender {
    Gender::from_wire(value).unwrap_or(Gender::Other)
}

/// Map a wire duration-unit label to the domain enum, rejecting unknown labels.
fn unit_to_domain(value: &str) -> RecordResult<DurationUnit> {
    DurationUnit::from_wire(value)
        .ok_or_else(|| RecordError::InvalidInput(format!("unknown duration unit '{value}'")))
}

fn images_to_domain(images: Vec<ImageWire>) -> RecordResult<Vec<ImageAttachment>> {
    images
        .into_iter()
        .map(|i| {
            let timestamp = timestamp_to_domain(&i.timestamp, "image")?;
            Ok(ImageAttachment {
                id: i.id,
                url: i.url,
                description: i.description,
                timestamp,
            })
        })
        .collect()
}

fn images_to_wire(images: &[ImageAttachment]) -> Vec<ImageWire> {
    images
        .iter()
        .map(|i| ImageWire {
            id: i.id.clone(),
            url: i.url.clone(),
            description: i.description.clone(),
            timestamp: i.timestamp.to_rfc3339(),
        })
        .collect()
}

fn translations_to_domain(translations: Vec<TranslatedResponseWire>) -> Vec<TranslatedResponse> {
    translations
        .into_iter()
        .map(|t| TranslatedResponse {
            language: t.language,
            primary_concern: t.primary_concern,
            additional_symptoms: t.additional_symptoms,
            medications: t.medications,
            allergies: t.allergies,
            pre_existing_conditions: t.pre_existing_conditions,
        })
        .collect()
}

fn translations_to_wire(translations: &[TranslatedResponse]) -> Vec<TranslatedResponseWire> {
    translations
        .iter()
        .map(|t| TranslatedResponseWire {
            language: t.language.clone(),
            primary_concern: t.primary_concern.clone(),
            additional_symptoms: t.additional_symptoms.clone(),
            medications: t.medications.clone(),
            allergies: t.allergies.clone(),
            pre_existing_conditions: t.pre_existing_conditions.clone(),
        })
        .collect()
}

fn diagnoses_to_domain(diagnoses: Vec<DiagnosisWire>) -> Vec<DifferentialDiagnosis> {
    diagnoses
        .into_iter()
        .map(|d| DifferentialDiagnosis {
            condition: d.condition,
            confidence: d.confidence,
            description: d.description,
            next_steps: d.next_steps,
        })
        .collect()
}

fn diagnoses_to_wire(diagnoses: &[DifferentialDiagnosis]) -> Vec<DiagnosisWire> {
    diagnoses
        .iter()
        .map(|d| DiagnosisWire {
            condition: d.condition.clone(),
            confidence: d.confidence.clone(),
            description: d.description.clone(),
            next_steps: d.next_steps.clone(),
        })
        .collect()
}

/// Convert a wire draft to the domain type.
fn draft_wire_to_domain(wire: CaseDraftWire) -> RecordResult<CaseDraft> {
    Ok(CaseDraft {
        primary_concern: wire.primary_concern,
        additional_symptoms: wire.additional_symptoms,
        medications: wire.medications,
        allergies: wire.allergies,
        pre_existing_conditions: wire.pre_existing_conditions,
        symptom_duration: wire.symptom_duration,
        duration_unit: unit_to_domain(&wire.duration_unit)?,
        age: wire.age,
        gender: gender_to_domain(&wire.gender),
        other_gender: wire.other_gender,
        images: images_to_domain(wire.images)?,
        translated_responses: translations_to_domain(wire.translated_responses),
        differential_diagnoses: diagnoses_to_domain(wire.differential_diagnoses),
        suggested_next_steps: wire.suggested_next_steps,
    })
}

/// Convert a domain draft to the wire type.
fn draft_to_wire(draft: &CaseDraft) -> CaseDraftWire {
    CaseDraftWire {
        primary_concern: draft.primary_concern.clone(),
        additional_symptoms: draft.additional_symptoms.clone(),
        medications: draft.medications.clone(),
        allergies: draft.allergies.clone(),
        pre_existing_conditions: draft.pre_existing_conditions.clone(),
        symptom_duration: draft.symptom_duration,
        duration_unit: draft.duration_unit.to_wire().to_string(),
        age: draft.age,
        gender: draft.gender.to_wire().to_string(),
        other_gender: draft.other_gender.clone(),
        images: images_to_wire(&draft.images),
        translated_responses: translations_to_wire(&draft.translated_responses),
        differential_diagnoses: diagnoses_to_wire(&draft.differential_diagnoses),
        suggested_next_steps: draft.suggested_next_steps.clone(),
    }
}

/// Convert a wire record to the domain type.
fn record_wire_to_domain(wire: CaseRecordWire) -> RecordResult<CaseRecord> {
    let id = CaseUuid::parse(&wire.id)
        .map_err(|e| RecordError::Translation(format!("invalid case id: {e}")))?;
    let created_at = timestamp_to_domain(&wire.created_at, "createdAt")?;

    Ok(CaseRecord {
        id,
        created_at,
        primary_concern: wire.primary_concern,
        additional_symptoms: wire.additional_symptoms,
        medications: wire.medications,
        allergies: wire.allergies,
        pre_existing_conditions: wire.pre_existing_conditions,
        symptom_duration: wire.symptom_duration,
        duration_unit: unit_to_domain(&wire.duration_unit)?,
        age: wire.age,
        gender: gender_to_domain(&wire.gender),
        other_gender: wire.other_gender,
        images: images_to_domain(wire.images)?,
        translated_responses: translations_to_domain(wire.translated_responses),
        differential_diagnoses: diagnoses_to_domain(wire.differential_diagnoses),
        suggested_next_steps: wire.suggested_next_steps,
    })
}

/// Convert a domain record to the wire type.
fn record_to_wire(record: &CaseRecord) -> CaseRecordWire {
    CaseRecordWire {
        id: record.id.to_string(),
        created_at: record.created_at.to_rfc3339(),
        primary_concern: record.primary_concern.clone(),
        additional_symptoms: record.additional_symptoms.clone(),
        medications: record.medications.clone(),
        allergies: record.allergies.clone(),
        pre_existing_conditions: record.pre_existing_conditions.clone(),
        symptom_duration: record.symptom_duration,
        duration_unit: record.duration_unit.to_wire().to_string(),
        age: record.age,
        gender: record.gender.to_wire().to_string(),
        other_gender: record.other_gender.clone(),
        images: images_to_wire(&record.images),
        translated_responses: translations_to_wire(&record.translated_responses),
        differential_diagnoses: diagnoses_to_wire(&record.differential_diagnoses),
        suggested_next_steps: record.suggested_next_steps.clone(),
    }
}
