//! The frozen, read-only catalog and its query surface.
//!
//! # Architecture
//!
//! Population happens exactly once: drafts from the content tables go
//! through the registry (validation, duplicate checks), and
//! [`Registry::freeze`](crate::registry::Registry::freeze) hands the
//! store to `Catalog`. From that point on only shared references
//! exist, so the catalog is safely readable from any thread without
//! locks. The process-wide builtin catalog sits behind a lazy static
//! and is materialized on first use.
//!
//! # Example
//!
//! ```ignore
//! let catalog = Catalog::builtin();
//! let smell = catalog.by_name("Long Method")?;
//! let rendered = catalog::render(smell);
//! ```

mod render;
mod stats;

pub use render::{render, RenderedEntry, RenderedField};
pub use stats::{CatalogStats, CategoryCount};

use once_cell::sync::Lazy;
use tracing::debug;

use crate::content;
use crate::error::CatalogError;
use crate::models::{Category, Entry, EntryKind};
use crate::registry::Registry;

/// The process-wide builtin catalog.
///
/// Population failure here is an authoring bug in the content tables;
/// the panic message names the offending entry and field.
static BUILTIN: Lazy<Catalog> = Lazy::new(|| match builtin_catalog() {
    Ok(catalog) => catalog,
    Err(err) => panic!("builtin catalog failed to build: {err}"),
});

/// Builds the builtin catalog from the content tables.
///
/// This is the fallible path behind [`Catalog::builtin`]; tests call
/// it directly to assert the shipped data validates.
pub fn builtin_catalog() -> Result<Catalog, CatalogError> {
    let mut registry = Registry::new();
    for draft in content::builtin_entries() {
        registry.register(draft)?;
    }
    let catalog = registry.freeze();
    debug!(
        "Built catalog: {} smells, {} techniques",
        catalog.count_for_kind(EntryKind::Smell),
        catalog.count_for_kind(EntryKind::Technique)
    );
    Ok(catalog)
}

/// An immutable catalog snapshot.
///
/// Produced by [`Registry::freeze`]; exposes only read operations.
#[derive(Debug)]
pub struct Catalog {
    registry: Registry,
}

impl Catalog {
    /// Wraps a populated registry. Only reachable through
    /// [`Registry::freeze`], which consumes the mutable store.
    pub(crate) fn from_registry(registry: Registry) -> Self {
        Self { registry }
    }

    /// The global builtin catalog, built on first use.
    pub fn builtin() -> &'static Catalog {
        &BUILTIN
    }

    /// All entries in catalog order.
    pub fn all(&self) -> impl Iterator<Item = &Entry> {
        self.registry.all()
    }

    /// Entries of one category, in catalog order.
    pub fn by_category(&self, category: Category) -> impl Iterator<Item = &Entry> {
        self.registry.by_category(category)
    }

    /// Exact-name lookup.
    pub fn by_name(&self, name: &str) -> Result<&Entry, CatalogError> {
        self.registry.by_name(name)
    }

    /// Number of entries in the catalog.
    pub fn len(&self) -> usize {
        self.registry.len()
    }

    /// Whether the catalog holds no entries.
    pub fn is_empty(&self) -> bool {
        self.registry.is_empty()
    }

    /// Distinct categories present for a kind, in canonical order.
    pub fn categories(&self, kind: EntryKind) -> Vec<Category> {
        Category::for_kind(kind)
            .filter(|category| self.by_category(*category).next().is_some())
            .collect()
    }

    /// Case-insensitive substring search over entry names and
    /// explicitly set field values.
    ///
    /// Default sentinels are not scanned, so searching for "comments"
    /// does not match every entry with an unset optional field. A
    /// blank needle matches nothing.
    pub fn search(&self, needle: &str) -> Vec<&Entry> {
        let needle = needle.trim().to_lowercase();
        if needle.is_empty() {
            return Vec::new();
        }
        self.all()
            .filter(|entry| {
                entry.name().to_lowercase().contains(&needle)
                    || entry
                        .set_fields()
                        .any(|(_, text)| text.to_lowercase().contains(&needle))
            })
            .collect()
    }

    /// Totals per kind and per category.
    pub fn stats(&self) -> CatalogStats {
        CatalogStats {
            total: self.len(),
            smells: self.count_for_kind(EntryKind::Smell),
            techniques: self.count_for_kind(EntryKind::Technique),
            categories: Category::all()
                .iter()
                .map(|&category| CategoryCount {
                    category,
                    count: self.by_category(category).count(),
                })
                .collect(),
        }
    }

    fn count_for_kind(&self, kind: EntryKind) -> usize {
        self.all().filter(|entry| entry.kind() == kind).count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{EntryDraft, Field};

    fn catalog_with(drafts: Vec<EntryDraft>) -> Catalog {
        let mut registry = Registry::new();
        for draft in drafts {
            registry.register(draft).unwrap();
        }
        registry.freeze()
    }

    fn smell(name: &str, category: Category, treatment: &str) -> EntryDraft {
        EntryDraft::new(name, category)
            .field(Field::SignsAndSymptoms, "signs")
            .field(Field::ReasonsForTheProblem, "reasons")
            .field(Field::Treatment, treatment)
            .field(Field::Payoff, "payoff")
    }

    #[test]
    fn test_search_is_case_insensitive_and_ordered() {
        let catalog = catalog_with(vec![
            smell("Message Chains", Category::Coupler, "Use Hide Delegate."),
            smell("Middle Man", Category::Coupler, "Hide Delegate left this class empty."),
            smell("Data Clumps", Category::Bloater, "Extract a class."),
        ]);
        let names: Vec<_> = catalog
            .search("DELEGATE")
            .into_iter()
            .map(Entry::name)
            .collect();
        assert_eq!(names, ["Message Chains", "Middle Man"]);

        let by_name: Vec<_> = catalog.search("clumps").into_iter().map(Entry::name).collect();
        assert_eq!(by_name, ["Data Clumps"]);
    }

    #[test]
    fn test_search_skips_default_sentinels() {
        let catalog = catalog_with(vec![smell(
            "Lazy Class",
            Category::Dispensable,
            "Collapse the hierarchy.",
        )]);
        // "comments" only lives in the unset-field sentinel, which is
        // not part of the entry's own content.
        assert!(catalog.search("comments").is_empty());
        assert!(catalog.search("   ").is_empty());
    }

    #[test]
    fn test_categories_lists_only_populated_ones() {
        let catalog = catalog_with(vec![
            smell("Large Class", Category::Bloater, "Extract Class."),
            smell("Dead Code", Category::Dispensable, "Delete it."),
        ]);
        assert_eq!(
            catalog.categories(EntryKind::Smell),
            vec![Category::Bloater, Category::Dispensable]
        );
        assert!(catalog.categories(EntryKind::Technique).is_empty());
    }

    #[test]
    fn test_stats_counts_by_kind_and_category() {
        let catalog = catalog_with(vec![
            smell("Large Class", Category::Bloater, "Extract Class."),
            smell("Long Method", Category::Bloater, "Extract Method."),
        ]);
        let stats = catalog.stats();
        assert_eq!(stats.total, 2);
        assert_eq!(stats.smells, 2);
        assert_eq!(stats.techniques, 0);
        let bloaters = stats
            .categories
            .iter()
            .find(|c| c.category == Category::Bloater)
            .unwrap();
        assert_eq!(bloaters.count, 2);
    }
}
