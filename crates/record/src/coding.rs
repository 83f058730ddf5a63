//! Coded intake values and their wire labels.
//!
//! The intake form offers fixed choices for a handful of fields. These are enums in
//! the domain model with explicit wire-string conversion, so the rest of the codebase
//! never matches on raw strings.

/// Patient-reported gender.
///
/// The intake form presents a fixed set of options plus a free-text "other" choice.
/// When the selection is [`Gender::Other`], the record's `other_gender` field carries
/// the patient's own wording.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Gender {
    /// Female.
    Female,
    /// Male.
    Male,
    /// Non-binary.
    NonBinary,
    /// Transgender.
    Transgender,
    /// Declined to answer.
    PreferNotToSay,
    /// A choice outside the enumerated set; detail lives in `other_gender`.
    Other,
}

impl Gender {
    /// Convert to the wire format string.
    pub fn to_wire(self) -> &'static str {
        match self {
            Gender::Female => "female",
            Gender::Male => "male",
            Gender::NonBinary => "non-binary",
            Gender::Transgender => "transgender",
            Gender::PreferNotToSay => "prefer-not-to-say",
            Gender::Other => "other",
        }
    }

    /// Parse from the wire format string.
    pub fn from_wire(s: &str) -> Option<Self> {
        match s {
            "female" => Some(Gender::Female),
            "male" => Some(Gender::Male),
            "non-binary" => Some(Gender::NonBinary),
            "transgender" => Some(Gender::Transgender),
            "prefer-not-to-say" => Some(Gender::PreferNotToSay),
            "other" => Some(Gender::Other),
            _ => None,
        }
    }
}

/// Unit label attached to the reported symptom duration.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DurationUnit {
    /// Hours.
    Hours,
    /// Days.
    Days,
    /// Weeks.
    Weeks,
    /// Months.
    Months,
    /// Years.
    Years,
}

impl DurationUnit {
    /// Convert to the wire format string.
    pub fn to_wire(self) -> &'static str {
        match self {
            DurationUnit::Hours => "hours",
            DurationUnit::Days => "days",
            DurationUnit::Weeks => "weeks",
            DurationUnit::Months => "months",
            DurationUnit::Years => "years",
        }
    }

    /// Parse from the wire format string.
    pub fn from_wire(s: &str) -> Option<Self> {
        match s {
            "hours" => Some(DurationUnit::Hours),
            "days" => Some(DurationUnit::Days),
            "weeks" => Some(DurationUnit::Weeks),
            "months" => Some(DurationUnit::Months),
            "years" => Some(DurationUnit::Years),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn gender_wire_round_trip() {
        for gender in [
            Gender::Female,
            Gender::Male,
            Gender::NonBinary,
            Gender::Transgender,
            Gender::PreferNotToSay,
            Gender::Other,
        ] {
            assert_eq!(Gender::from_wire(gender.to_wire()), Some(gender));
        }
    }

    #[test]
    fn gender_from_wire_rejects_unknown_labels() {
        assert_eq!(Gender::from_wire("Female"), None);
        assert_eq!(Gender::from_wire("woman"), None);
        assert_eq!(Gender::from_wire(""), None);
    }

    #[test]
    fn duration_unit_wire_round_trip() {
        for unit in [
            DurationUnit::Hours,
            DurationUnit::Days,
            DurationUnit::Weeks,
            DurationUnit::Months,
            DurationUnit::Years,
        ] {
            assert_eq!(DurationUnit::from_wire(unit.to_wire()), Some(unit));
        }
    }

    #[test]
    fn duration_unit_from_wire_rejects_unknown_labels() {
        assert_eq!(DurationUnit::from_wire("Days"), None);
        assert_eq!(DurationUnit::from_wire("fortnights"), None);
    }
}
