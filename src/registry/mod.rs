//! Entry registration and storage.
//!
//! The registry is the build phase of the catalog: drafts go through
//! schema validation, duplicates are rejected, and insertion order is
//! preserved. [`Registry::freeze`] consumes the registry and hands the
//! store to the immutable [`Catalog`](crate::catalog::Catalog); after
//! that only shared read access exists.

mod schema;

pub use schema::validate;

use std::collections::{HashMap, HashSet};

use tracing::debug;

use crate::catalog::Catalog;
use crate::error::CatalogError;
use crate::models::{Category, Entry, EntryDraft};

/// Mutable entry store used while populating a catalog.
#[derive(Debug, Default)]
pub struct Registry {
    /// Entries in insertion order, the catalog's canonical order.
    entries: Vec<Entry>,
    /// Name index; on a cross-category collision the earliest
    /// registration keeps the slot.
    by_name: HashMap<String, usize>,
    /// Occupied (category, name) pairs for duplicate rejection.
    keys: HashSet<(Category, String)>,
}

impl Registry {
    /// Creates an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Validates and stores a draft.
    ///
    /// Fails with a validation error from [`validate`], or with
    /// [`CatalogError::DuplicateName`] when the (category, name) pair
    /// is already taken.
    pub fn register(&mut self, draft: EntryDraft) -> Result<(), CatalogError> {
        let entry = schema::validate(draft)?;
        let key = (entry.category(), entry.name().to_string());
        if self.keys.contains(&key) {
            return Err(CatalogError::DuplicateName {
                name: entry.name().to_string(),
                category: entry.category(),
            });
        }
        self.keys.insert(key);
        let index = self.entries.len();
        self.by_name
            .entry(entry.name().to_string())
            .or_insert(index);
        self.entries.push(entry);
        Ok(())
    }

    /// All entries in insertion order.
    pub fn all(&self) -> impl Iterator<Item = &Entry> {
        self.entries.iter()
    }

    /// Entries of one category, in insertion order. Yields nothing
    /// (not an error) when the category is empty.
    pub fn by_category(&self, category: Category) -> impl Iterator<Item = &Entry> {
        self.entries
            .iter()
            .filter(move |entry| entry.category() == category)
    }

    /// Exact-name lookup.
    pub fn by_name(&self, name: &str) -> Result<&Entry, CatalogError> {
        self.by_name
            .get(name)
            .and_then(|&index| self.entries.get(index))
            .ok_or_else(|| CatalogError::NotFound(name.to_string()))
    }

    /// Number of registered entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the registry holds no entries.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Consumes the registry and produces the immutable catalog.
    pub fn freeze(self) -> Catalog {
        debug!("Freezing registry with {} entries", self.entries.len());
        Catalog::from_registry(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Field;

    fn smell(name: &str, category: Category) -> EntryDraft {
        EntryDraft::new(name, category)
            .field(Field::SignsAndSymptoms, "s")
            .field(Field::ReasonsForTheProblem, "r")
            .field(Field::Treatment, "t")
            .field(Field::Payoff, "p")
    }

    #[test]
    fn test_register_preserves_insertion_order() {
        let mut registry = Registry::new();
        registry.register(smell("Comments", Category::Dispensable)).unwrap();
        registry.register(smell("Long Method", Category::Bloater)).unwrap();
        registry.register(smell("Feature Envy", Category::Coupler)).unwrap();
        let names: Vec<_> = registry.all().map(Entry::name).collect();
        assert_eq!(names, ["Comments", "Long Method", "Feature Envy"]);
    }

    #[test]
    fn test_register_rejects_duplicate_in_category() {
        let mut registry = Registry::new();
        registry.register(smell("Long Method", Category::Bloater)).unwrap();
        let err = registry
            .register(smell("Long Method", Category::Bloater))
            .unwrap_err();
        assert!(matches!(
            err,
            CatalogError::DuplicateName { ref name, category }
                if name == "Long Method" && category == Category::Bloater
        ));
        assert_eq!(registry.len(), 1);
    }

    #[test]
    fn test_same_name_in_another_category_is_allowed() {
        let mut registry = Registry::new();
        registry.register(smell("Overlap", Category::Bloater)).unwrap();
        registry.register(smell("Overlap", Category::Coupler)).unwrap();
        assert_eq!(registry.len(), 2);
        // Name lookup resolves to the earliest registration.
        let hit = registry.by_name("Overlap").unwrap();
        assert_eq!(hit.category(), Category::Bloater);
    }

    #[test]
    fn test_by_category_filters_in_order() {
        let mut registry = Registry::new();
        registry.register(smell("Data Class", Category::Dispensable)).unwrap();
        registry.register(smell("Large Class", Category::Bloater)).unwrap();
        registry.register(smell("Dead Code", Category::Dispensable)).unwrap();
        let names: Vec<_> = registry
            .by_category(Category::Dispensable)
            .map(Entry::name)
            .collect();
        assert_eq!(names, ["Data Class", "Dead Code"]);
        assert_eq!(registry.by_category(Category::OrganizingData).count(), 0);
    }

    #[test]
    fn test_by_name_miss_is_not_found() {
        let registry = Registry::new();
        let err = registry.by_name("Nonexistent").unwrap_err();
        assert!(matches!(err, CatalogError::NotFound(ref name) if name == "Nonexistent"));
    }
}
