//! The closed set of textual fields an entry may carry.
//!
//! Each [`EntryKind`] recognizes its own subset of fields, split into
//! required and optional. Optional fields carry a documented default
//! sentinel that applies whenever the field is left unset.

use serde::{Deserialize, Serialize};

use super::EntryKind;

/// Default sentinel for optional fields without their own wording.
pub const NO_COMMENTS: &str = "No comments.";

/// Default sentinel for the [`Field::Drawbacks`] field.
pub const NO_DRAWBACKS: &str = "No drawbacks.";

/// A recognized textual field of a catalog entry.
///
/// Declaration order doubles as presentation order: within each kind,
/// required fields come before optional ones. The entry name is required
/// for both kinds but lives on the record itself, not in the field map.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Field {
    // Smell fields, required.
    SignsAndSymptoms,
    ReasonsForTheProblem,
    Treatment,
    Payoff,
    // Smell fields, optional.
    WhenToIgnore,
    Performance,
    // Technique fields, required.
    Problem,
    Solution,
    WhyRefactor,
    HowToRefactor,
    // Technique fields, optional.
    Benefits,
    Drawbacks,
    WhenNotToUse,
    GoodToKnow,
    NextSteps,
    ExampleCode,
}

/// Required smell fields, in presentation order.
const SMELL_REQUIRED: &[Field] = &[
    Field::SignsAndSymptoms,
    Field::ReasonsForTheProblem,
    Field::Treatment,
    Field::Payoff,
];

/// Optional smell fields, in presentation order.
const SMELL_OPTIONAL: &[Field] = &[Field::WhenToIgnore, Field::Performance];

/// Required technique fields, in presentation order.
const TECHNIQUE_REQUIRED: &[Field] = &[
    Field::Problem,
    Field::Solution,
    Field::WhyRefactor,
    Field::HowToRefactor,
];

/// Optional technique fields, in presentation order.
const TECHNIQUE_OPTIONAL: &[Field] = &[
    Field::Benefits,
    Field::Drawbacks,
    Field::WhenNotToUse,
    Field::GoodToKnow,
    Field::NextSteps,
    Field::ExampleCode,
];

impl Field {
    /// Required fields for a kind, in presentation order.
    pub fn required_for(kind: EntryKind) -> &'static [Field] {
        match kind {
            EntryKind::Smell => SMELL_REQUIRED,
            EntryKind::Technique => TECHNIQUE_REQUIRED,
        }
    }

    /// Optional fields for a kind, in presentation order.
    pub fn optional_for(kind: EntryKind) -> &'static [Field] {
        match kind {
            EntryKind::Smell => SMELL_OPTIONAL,
            EntryKind::Technique => TECHNIQUE_OPTIONAL,
        }
    }

    /// The full schema for a kind: required fields, then optional ones.
    pub fn schema_for(kind: EntryKind) -> impl Iterator<Item = Field> {
        Self::required_for(kind)
            .iter()
            .chain(Self::optional_for(kind))
            .copied()
    }

    /// Whether this field belongs to the given kind's schema.
    pub fn applies_to(&self, kind: EntryKind) -> bool {
        Self::schema_for(kind).any(|f| f == *self)
    }

    /// Whether this field is required for the kind it belongs to.
    pub fn is_required(&self) -> bool {
        SMELL_REQUIRED.contains(self) || TECHNIQUE_REQUIRED.contains(self)
    }

    /// The sentinel rendered when an optional field is unset.
    ///
    /// Returns `None` for required fields, which have no default.
    pub fn default_text(&self) -> Option<&'static str> {
        if self.is_required() {
            return None;
        }
        match self {
            Field::Drawbacks => Some(NO_DRAWBACKS),
            _ => Some(NO_COMMENTS),
        }
    }

    /// Stable snake_case identifier used in diagnostics and JSON keys.
    pub fn key(&self) -> &'static str {
        match self {
            Field::SignsAndSymptoms => "signs_and_symptoms",
            Field::ReasonsForTheProblem => "reasons_for_the_problem",
            Field::Treatment => "treatment",
            Field::Payoff => "payoff",
            Field::WhenToIgnore => "when_to_ignore",
            Field::Performance => "performance",
            Field::Problem => "problem",
            Field::Solution => "solution",
            Field::WhyRefactor => "why_refactor",
            Field::HowToRefactor => "how_to_refactor",
            Field::Benefits => "benefits",
            Field::Drawbacks => "drawbacks",
            Field::WhenNotToUse => "when_not_to_use",
            Field::GoodToKnow => "good_to_know",
            Field::NextSteps => "next_steps",
            Field::ExampleCode => "example_code",
        }
    }

    /// Human-readable heading used when rendering an entry.
    pub fn label(&self) -> &'static str {
        match self {
            Field::SignsAndSymptoms => "Signs and Symptoms",
            Field::ReasonsForTheProblem => "Reasons for the Problem",
            Field::Treatment => "Treatment",
            Field::Payoff => "Payoff",
            Field::WhenToIgnore => "When to Ignore",
            Field::Performance => "Performance",
            Field::Problem => "Problem",
            Field::Solution => "Solution",
            Field::WhyRefactor => "Why Refactor",
            Field::HowToRefactor => "How to Refactor",
            Field::Benefits => "Benefits",
            Field::Drawbacks => "Drawbacks",
            Field::WhenNotToUse => "When Not to Use",
            Field::GoodToKnow => "Good to Know",
            Field::NextSteps => "Next Steps",
            Field::ExampleCode => "Example Code",
        }
    }
}

impl std::fmt::Display for Field {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.key())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_schemas_are_disjoint() {
        for field in Field::schema_for(EntryKind::Smell) {
            assert!(!field.applies_to(EntryKind::Technique), "{field} leaked");
        }
        for field in Field::schema_for(EntryKind::Technique) {
            assert!(!field.applies_to(EntryKind::Smell), "{field} leaked");
        }
    }

    #[test]
    fn test_schema_order_required_first() {
        let schema: Vec<_> = Field::schema_for(EntryKind::Technique).collect();
        assert_eq!(schema[0], Field::Problem);
        assert_eq!(schema[3], Field::HowToRefactor);
        assert!(schema[4..].iter().all(|f| !f.is_required()));
    }

    #[test]
    fn test_default_sentinels() {
        assert_eq!(Field::Drawbacks.default_text(), Some(NO_DRAWBACKS));
        assert_eq!(Field::WhenToIgnore.default_text(), Some(NO_COMMENTS));
        assert_eq!(Field::GoodToKnow.default_text(), Some(NO_COMMENTS));
        assert_eq!(Field::Treatment.default_text(), None);
        assert_eq!(Field::Problem.default_text(), None);
    }

    #[test]
    fn test_keys_are_stable() {
        assert_eq!(Field::Treatment.key(), "treatment");
        assert_eq!(Field::SignsAndSymptoms.key(), "signs_and_symptoms");
        assert_eq!(Field::HowToRefactor.key(), "how_to_refactor");
    }
}
