//! Schema validation turning drafts into entries.

use crate::error::CatalogError;
use crate::models::{Entry, EntryDraft, Field};

/// Validates a draft against its kind's field schema.
///
/// Checks run in a fixed order so a broken draft always reports the
/// same error: blank name, then fields outside the kind's closed set
/// (in field declaration order), then unset or blank required fields
/// (in schema order), then optional fields set to blank text.
pub fn validate(draft: EntryDraft) -> Result<Entry, CatalogError> {
    let kind = draft.category.kind();

    if draft.name.trim().is_empty() {
        return Err(CatalogError::MissingRequiredField {
            entry: draft.name,
            field: "name".to_string(),
        });
    }

    if let Some(field) = draft.fields.keys().find(|f| !f.applies_to(kind)) {
        return Err(CatalogError::FieldNotApplicable {
            entry: draft.name.clone(),
            field: field.key().to_string(),
            kind,
        });
    }

    for field in Field::required_for(kind) {
        match draft.fields.get(field) {
            Some(text) if !text.trim().is_empty() => {}
            _ => {
                return Err(CatalogError::MissingRequiredField {
                    entry: draft.name,
                    field: field.key().to_string(),
                })
            }
        }
    }

    for field in Field::optional_for(kind) {
        if let Some(text) = draft.fields.get(field) {
            if text.trim().is_empty() {
                return Err(CatalogError::EmptyOptionalField {
                    entry: draft.name,
                    field: field.key().to_string(),
                });
            }
        }
    }

    Ok(Entry::from_validated(draft.name, draft.category, draft.fields))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Category;

    fn complete_smell() -> EntryDraft {
        EntryDraft::new("Long Method", Category::Bloater)
            .field(Field::SignsAndSymptoms, "A method with too many lines.")
            .field(Field::ReasonsForTheProblem, "Code accretes and nothing is removed.")
            .field(Field::Treatment, "Extract parts of the method into new methods.")
            .field(Field::Payoff, "Shorter methods are easier to understand.")
    }

    fn complete_technique() -> EntryDraft {
        EntryDraft::new("Extract Method", Category::ComposingMethods)
            .field(Field::Problem, "A fragment can be grouped together.")
            .field(Field::Solution, "Move the fragment to a new method.")
            .field(Field::WhyRefactor, "Fewer lines per method, more reuse.")
            .field(Field::HowToRefactor, "Create a method and move the code.")
    }

    #[test]
    fn test_validate_complete_drafts() {
        assert!(validate(complete_smell()).is_ok());
        assert!(validate(complete_technique()).is_ok());
    }

    #[test]
    fn test_missing_required_field_names_the_field() {
        let draft = complete_smell();
        let mut fields = draft.fields.clone();
        fields.remove(&Field::Treatment);
        let draft = EntryDraft {
            fields,
            ..draft
        };
        let err = validate(draft).unwrap_err();
        match err {
            CatalogError::MissingRequiredField { entry, field } => {
                assert_eq!(entry, "Long Method");
                assert_eq!(field, "treatment");
            }
            other => panic!("expected MissingRequiredField, got {other:?}"),
        }
    }

    #[test]
    fn test_blank_required_field_counts_as_missing() {
        let draft = complete_technique().field(Field::Solution, "   ");
        let err = validate(draft).unwrap_err();
        assert!(matches!(
            err,
            CatalogError::MissingRequiredField { ref field, .. } if field == "solution"
        ));
    }

    #[test]
    fn test_blank_name_rejected() {
        let draft = EntryDraft::new("  ", Category::Coupler);
        let err = validate(draft).unwrap_err();
        assert!(matches!(
            err,
            CatalogError::MissingRequiredField { ref field, .. } if field == "name"
        ));
    }

    #[test]
    fn test_field_outside_kind_rejected() {
        let draft = complete_smell().field(Field::HowToRefactor, "Not a smell field.");
        let err = validate(draft).unwrap_err();
        assert!(matches!(
            err,
            CatalogError::FieldNotApplicable { ref field, .. } if field == "how_to_refactor"
        ));
    }

    #[test]
    fn test_blank_optional_field_rejected() {
        let draft = complete_technique().field(Field::Drawbacks, "");
        let err = validate(draft).unwrap_err();
        assert!(matches!(
            err,
            CatalogError::EmptyOptionalField { ref field, .. } if field == "drawbacks"
        ));
    }

    #[test]
    fn test_optional_fields_may_stay_unset() {
        let entry = validate(complete_technique()).unwrap();
        assert_eq!(entry.field(Field::Drawbacks), None);
        assert_eq!(entry.field_or_default(Field::Drawbacks), "No drawbacks.");
    }
}
