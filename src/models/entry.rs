//! Entry and EntryDraft models for catalog records.
//!
//! An [`EntryDraft`] is the mutable authoring form: a name, a category,
//! and whatever fields the author chose to set. Validation (in the
//! registry layer) turns a draft into an immutable [`Entry`] whose
//! schema is known to be complete for its kind.

use std::collections::BTreeMap;

use serde::Serialize;

use super::{Category, EntryKind, Field};

/// A validated, immutable catalog entry.
///
/// Entries can only be constructed by the registry after schema
/// validation, so every required field for the entry's kind is present
/// and every stored value is non-blank.
#[derive(Debug, Clone, Serialize)]
pub struct Entry {
    name: String,
    category: Category,
    fields: BTreeMap<Field, String>,
}

impl Entry {
    /// Constructs an entry from already-validated parts.
    pub(crate) fn from_validated(
        name: String,
        category: Category,
        fields: BTreeMap<Field, String>,
    ) -> Self {
        Self {
            name,
            category,
            fields,
        }
    }

    /// The entry's display name, unique within its category.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The category this entry belongs to.
    pub fn category(&self) -> Category {
        self.category
    }

    /// The kind implied by the entry's category.
    pub fn kind(&self) -> EntryKind {
        self.category.kind()
    }

    /// The stored text of a field, if the author set it.
    pub fn field(&self, field: Field) -> Option<&str> {
        self.fields.get(&field).map(String::as_str)
    }

    /// The text of a field, falling back to its default sentinel.
    ///
    /// Required fields are always present on a validated entry, so the
    /// fallback only ever applies to optional fields.
    pub fn field_or_default(&self, field: Field) -> &str {
        self.field(field)
            .or_else(|| field.default_text())
            .unwrap_or_default()
    }

    /// Iterates over explicitly set fields in schema order.
    pub fn set_fields(&self) -> impl Iterator<Item = (Field, &str)> {
        self.fields.iter().map(|(f, text)| (*f, text.as_str()))
    }
}

/// An unvalidated entry under construction.
///
/// # Example
///
/// ```ignore
/// let draft = EntryDraft::new("God Object", Category::Bloater)
///     .field(Field::SignsAndSymptoms, "One class does everything.")
///     .field(Field::ReasonsForTheProblem, "Responsibilities accreted over time.")
///     .field(Field::Treatment, "Extract Class until each piece has one job.")
///     .field(Field::Payoff, "Smaller units that can change independently.");
/// ```
#[derive(Debug, Clone)]
pub struct EntryDraft {
    pub(crate) name: String,
    pub(crate) category: Category,
    pub(crate) fields: BTreeMap<Field, String>,
}

impl EntryDraft {
    /// Starts a draft with the two properties every entry must have.
    pub fn new(name: impl Into<String>, category: Category) -> Self {
        Self {
            name: name.into(),
            category,
            fields: BTreeMap::new(),
        }
    }

    /// Sets a field's text. Setting the same field twice keeps the
    /// latest value.
    pub fn field(mut self, field: Field, text: impl Into<String>) -> Self {
        self.fields.insert(field, text.into());
        self
    }

    /// The draft's name as given to [`EntryDraft::new`].
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The draft's category as given to [`EntryDraft::new`].
    pub fn category(&self) -> Category {
        self.category
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_draft_last_write_wins() {
        let draft = EntryDraft::new("Long Method", Category::Bloater)
            .field(Field::Treatment, "first")
            .field(Field::Treatment, "second");
        assert_eq!(draft.fields.get(&Field::Treatment).map(String::as_str), Some("second"));
    }

    #[test]
    fn test_entry_field_or_default() {
        let mut fields = BTreeMap::new();
        fields.insert(Field::Problem, "Too many temps.".to_string());
        let entry = Entry::from_validated(
            "Inline Temp".to_string(),
            Category::ComposingMethods,
            fields,
        );
        assert_eq!(entry.field_or_default(Field::Problem), "Too many temps.");
        assert_eq!(entry.field_or_default(Field::Drawbacks), "No drawbacks.");
        assert_eq!(entry.field_or_default(Field::GoodToKnow), "No comments.");
        assert_eq!(entry.field(Field::Drawbacks), None);
    }

    #[test]
    fn test_entry_kind_follows_category() {
        let entry = Entry::from_validated(
            "Feature Envy".to_string(),
            Category::Coupler,
            BTreeMap::new(),
        );
        assert_eq!(entry.kind(), EntryKind::Smell);
    }
}
