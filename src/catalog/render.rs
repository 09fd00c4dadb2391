//! Projection of entries into a uniform key/value structure.
//!
//! Rendering is the catalog's sole output boundary: consumers get the
//! full schema for the entry's kind in stable order, with unset
//! optional fields filled in by their documented sentinel. Formatting
//! (plain text, JSON, Markdown) is left to the caller.

use serde::Serialize;

use crate::models::{Category, Entry, EntryKind, Field};

/// A fully projected entry, ready for templating.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RenderedEntry {
    pub name: String,
    pub kind: EntryKind,
    pub category: Category,
    /// The kind's full schema in stable order: required, then optional.
    pub fields: Vec<RenderedField>,
}

/// One projected field of an entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RenderedField {
    /// Stable snake_case key ([`Field::key`]).
    pub key: &'static str,
    /// Human-readable heading ([`Field::label`]).
    pub label: &'static str,
    pub text: String,
    /// True when `text` is the field's default sentinel rather than
    /// author-provided content.
    pub defaulted: bool,
}

/// Projects an entry into its rendered form.
///
/// Pure and idempotent: rendering the same entry twice yields equal
/// values, and rendering never mutates the entry.
pub fn render(entry: &Entry) -> RenderedEntry {
    let fields = Field::schema_for(entry.kind())
        .map(|field| {
            let (text, defaulted) = match entry.field(field) {
                Some(text) => (text.to_string(), false),
                None => (
                    field.default_text().unwrap_or_default().to_string(),
                    true,
                ),
            };
            RenderedField {
                key: field.key(),
                label: field.label(),
                text,
                defaulted,
            }
        })
        .collect();

    RenderedEntry {
        name: entry.name().to_string(),
        kind: entry.kind(),
        category: entry.category(),
        fields,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::EntryDraft;
    use crate::registry::validate;

    fn sample_technique() -> Entry {
        let draft = EntryDraft::new("Inline Temp", Category::ComposingMethods)
            .field(Field::Problem, "A temp holds a simple expression.")
            .field(Field::Solution, "Replace references with the expression.")
            .field(Field::WhyRefactor, "The temp gets in the way of other moves.")
            .field(Field::HowToRefactor, "Inline and delete the declaration.");
        validate(draft).unwrap()
    }

    #[test]
    fn test_render_covers_full_schema_in_order() {
        let rendered = render(&sample_technique());
        let keys: Vec<_> = rendered.fields.iter().map(|f| f.key).collect();
        assert_eq!(
            keys,
            [
                "problem",
                "solution",
                "why_refactor",
                "how_to_refactor",
                "benefits",
                "drawbacks",
                "when_not_to_use",
                "good_to_know",
                "next_steps",
                "example_code",
            ]
        );
    }

    #[test]
    fn test_render_fills_defaults_and_flags_them() {
        let rendered = render(&sample_technique());
        let drawbacks = rendered.fields.iter().find(|f| f.key == "drawbacks").unwrap();
        assert_eq!(drawbacks.text, "No drawbacks.");
        assert!(drawbacks.defaulted);
        let problem = rendered.fields.iter().find(|f| f.key == "problem").unwrap();
        assert!(!problem.defaulted);
    }

    #[test]
    fn test_render_is_idempotent() {
        let entry = sample_technique();
        assert_eq!(render(&entry), render(&entry));
    }
}
