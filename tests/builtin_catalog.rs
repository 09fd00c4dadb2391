//! Catalog-wide properties of the builtin content.
//!
//! Unit tests next to each module cover the mechanics; these tests
//! exercise the shipped data itself: the content tables must validate,
//! land in the right categories, and stay reachable through every
//! lookup path.

use std::collections::HashSet;

use refactory::catalog::{builtin_catalog, render, Catalog};
use refactory::error::CatalogError;
use refactory::models::{Category, EntryDraft, EntryKind, Field};
use refactory::registry::Registry;

fn smell_draft(name: &str) -> EntryDraft {
    EntryDraft::new(name, Category::Bloater)
        .field(Field::SignsAndSymptoms, "Signs.")
        .field(Field::ReasonsForTheProblem, "Reasons.")
        .field(Field::Treatment, "Treatment.")
        .field(Field::Payoff, "Payoff.")
}

#[test]
fn test_builtin_catalog_validates() {
    assert!(builtin_catalog().is_ok());
}

#[test]
fn test_builtin_counts_per_kind() {
    let stats = Catalog::builtin().stats();
    assert_eq!(stats.smells, 23);
    assert_eq!(stats.techniques, 66);
    assert_eq!(stats.total, 89);
}

#[test]
fn test_builtin_counts_per_category() {
    let catalog = Catalog::builtin();
    let expected = [
        (Category::Bloater, 5),
        (Category::ChangePreventer, 3),
        (Category::Coupler, 5),
        (Category::Dispensable, 6),
        (Category::ObjectOrientedAbuser, 4),
        (Category::ComposingMethods, 9),
        (Category::MovingFeaturesBetweenObjects, 8),
        (Category::OrganizingData, 15),
        (Category::SimplifyingConditionalExpressions, 8),
        (Category::SimplifyingMethodCalls, 14),
        (Category::DealingWithGeneralization, 12),
    ];
    for (category, count) in expected {
        assert_eq!(
            catalog.by_category(category).count(),
            count,
            "category {category}"
        );
    }
}

#[test]
fn test_categories_partition_the_catalog() {
    let catalog = Catalog::builtin();

    let by_category_total: usize = Category::all()
        .iter()
        .map(|&category| catalog.by_category(category).count())
        .sum();
    assert_eq!(by_category_total, catalog.len());

    for entry in catalog.all() {
        assert_eq!(entry.kind(), entry.category().kind());
    }
}

#[test]
fn test_category_listings_follow_canonical_order() {
    let catalog = Catalog::builtin();
    assert_eq!(
        catalog.categories(EntryKind::Smell),
        vec![
            Category::Bloater,
            Category::ChangePreventer,
            Category::Coupler,
            Category::Dispensable,
            Category::ObjectOrientedAbuser,
        ]
    );
    assert_eq!(
        catalog.categories(EntryKind::Technique),
        vec![
            Category::ComposingMethods,
            Category::MovingFeaturesBetweenObjects,
            Category::OrganizingData,
            Category::SimplifyingConditionalExpressions,
            Category::SimplifyingMethodCalls,
            Category::DealingWithGeneralization,
        ]
    );
}

#[test]
fn test_names_are_unique_and_resolvable() {
    let catalog = Catalog::builtin();
    let mut seen = HashSet::new();
    for entry in catalog.all() {
        assert!(seen.insert(entry.name()), "duplicate name: {}", entry.name());
        let found = catalog.by_name(entry.name()).unwrap();
        assert_eq!(found.category(), entry.category());
    }
}

#[test]
fn test_render_builtin_entry_fills_sentinels() {
    let catalog = Catalog::builtin();
    // Substitute Algorithm ships without Benefits or Drawbacks, so its
    // rendering exercises both sentinel defaults.
    let entry = catalog.by_name("Substitute Algorithm").unwrap();
    let rendered = render(entry);
    assert_eq!(rendered, render(entry));

    let benefits = rendered
        .fields
        .iter()
        .find(|f| f.key == "benefits")
        .unwrap();
    assert!(benefits.defaulted);
    assert_eq!(benefits.text, "No comments.");

    let drawbacks = rendered
        .fields
        .iter()
        .find(|f| f.key == "drawbacks")
        .unwrap();
    assert!(drawbacks.defaulted);
    assert_eq!(drawbacks.text, "No drawbacks.");
}

#[test]
fn test_composing_methods_all_ship_example_code() {
    let catalog = Catalog::builtin();
    for entry in catalog.by_category(Category::ComposingMethods) {
        assert!(
            entry.field(Field::ExampleCode).is_some(),
            "{} lacks example code",
            entry.name()
        );
    }
}

#[test]
fn test_middle_man_treatment_text() {
    let entry = Catalog::builtin().by_name("Middle Man").unwrap();
    assert_eq!(
        entry.field(Field::Treatment),
        Some(
            "If most of a method’s classes delegate to another class, Remove Middle Man is in \
             order."
        )
    );
}

#[test]
fn test_search_delegate_spans_kinds() {
    let catalog = Catalog::builtin();
    let names: Vec<_> = catalog
        .search("delegate")
        .into_iter()
        .map(|entry| entry.name())
        .collect();
    // Matched by name for the technique, by treatment text for the smell.
    assert!(names.contains(&"Hide Delegate"));
    assert!(names.contains(&"Message Chains"));
}

#[test]
fn test_unknown_name_is_not_found() {
    let err = Catalog::builtin().by_name("Nonexistent Entry").unwrap_err();
    assert!(matches!(err, CatalogError::NotFound(_)));
}

#[test]
fn test_missing_treatment_reports_field_key() {
    let draft = EntryDraft::new("Mystery Smell", Category::Bloater)
        .field(Field::SignsAndSymptoms, "Something is off.")
        .field(Field::ReasonsForTheProblem, "It grew unchecked.")
        .field(Field::Payoff, "Cleaner code.");

    let mut registry = Registry::new();
    match registry.register(draft).unwrap_err() {
        CatalogError::MissingRequiredField { entry, field } => {
            assert_eq!(entry, "Mystery Smell");
            assert_eq!(field, "treatment");
        }
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn test_duplicate_name_is_rejected() {
    let mut registry = Registry::new();
    registry.register(smell_draft("Long Method")).unwrap();
    let err = registry.register(smell_draft("Long Method")).unwrap_err();
    assert!(matches!(
        err,
        CatalogError::DuplicateName {
            category: Category::Bloater,
            ..
        }
    ));
}
