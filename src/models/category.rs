//! Category enumeration for smell families and technique groups.

use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::CatalogError;

use super::EntryKind;

/// Fixed classification groups for catalog entries.
///
/// Declaration order is the canonical catalog order: the five smell
/// families first, then the six technique groups. [`Category::all`],
/// category listings and the builtin population sequence all follow it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Category {
    // Smell families.
    Bloater,
    ChangePreventer,
    Coupler,
    Dispensable,
    ObjectOrientedAbuser,
    // Technique groups.
    ComposingMethods,
    MovingFeaturesBetweenObjects,
    OrganizingData,
    SimplifyingConditionalExpressions,
    SimplifyingMethodCalls,
    DealingWithGeneralization,
}

impl Category {
    /// Returns a static slice of all categories in canonical order.
    pub fn all() -> &'static [Category] {
        &[
            Category::Bloater,
            Category::ChangePreventer,
            Category::Coupler,
            Category::Dispensable,
            Category::ObjectOrientedAbuser,
            Category::ComposingMethods,
            Category::MovingFeaturesBetweenObjects,
            Category::OrganizingData,
            Category::SimplifyingConditionalExpressions,
            Category::SimplifyingMethodCalls,
            Category::DealingWithGeneralization,
        ]
    }

    /// Returns the categories belonging to one entry kind, in canonical order.
    pub fn for_kind(kind: EntryKind) -> impl Iterator<Item = Category> {
        Self::all().iter().copied().filter(move |c| c.kind() == kind)
    }

    /// The entry kind this category classifies.
    pub fn kind(&self) -> EntryKind {
        match self {
            Category::Bloater
            | Category::ChangePreventer
            | Category::Coupler
            | Category::Dispensable
            | Category::ObjectOrientedAbuser => EntryKind::Smell,
            Category::ComposingMethods
            | Category::MovingFeaturesBetweenObjects
            | Category::OrganizingData
            | Category::SimplifyingConditionalExpressions
            | Category::SimplifyingMethodCalls
            | Category::DealingWithGeneralization => EntryKind::Technique,
        }
    }

    /// Human-readable group label.
    pub fn label(&self) -> &'static str {
        match self {
            Category::Bloater => "Bloaters",
            Category::ChangePreventer => "Change Preventers",
            Category::Coupler => "Couplers",
            Category::Dispensable => "Dispensables",
            Category::ObjectOrientedAbuser => "Object-Oriented Abusers",
            Category::ComposingMethods => "Composing Methods",
            Category::MovingFeaturesBetweenObjects => "Moving Features Between Objects",
            Category::OrganizingData => "Organizing Data",
            Category::SimplifyingConditionalExpressions => "Simplifying Conditional Expressions",
            Category::SimplifyingMethodCalls => "Simplifying Method Calls",
            Category::DealingWithGeneralization => "Dealing With Generalization",
        }
    }

    /// One-line description of what this group collects.
    pub fn description(&self) -> &'static str {
        match self {
            Category::Bloater => {
                "Code, methods and classes that have increased to such gargantuan proportions \
                 that they are hard to work with"
            }
            Category::ChangePreventer => {
                "Smells that mean changing one place forces many changes in other places"
            }
            Category::Coupler => "Smells that contribute to excessive coupling between classes",
            Category::Dispensable => {
                "Something pointless whose absence would make the code cleaner and more efficient"
            }
            Category::ObjectOrientedAbuser => {
                "Incomplete or incorrect application of object-oriented programming principles"
            }
            Category::ComposingMethods => {
                "Streamlining methods, removing code duplication, and paving the way for future \
                 improvements"
            }
            Category::MovingFeaturesBetweenObjects => {
                "Safely moving functionality between classes and creating new classes"
            }
            Category::OrganizingData => {
                "Untangling data handling and class associations, and replacing primitives with \
                 rich functionality"
            }
            Category::SimplifyingConditionalExpressions => {
                "Taming the complexity that conditionals accumulate over time"
            }
            Category::SimplifyingMethodCalls => {
                "Making method calls simpler and easier to understand"
            }
            Category::DealingWithGeneralization => {
                "Moving functionality along the class inheritance hierarchy, and replacing \
                 inheritance with delegation and vice versa"
            }
        }
    }

    /// Lookup key matched by [`FromStr`]: lowercase with separators removed.
    fn normalized(input: &str) -> String {
        input
            .chars()
            .filter(|c| !matches!(c, ' ' | '-' | '_'))
            .flat_map(char::to_lowercase)
            .collect()
    }
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Category {
    type Err = CatalogError;

    /// Accepts the variant name ("Bloater"), the label ("Bloaters",
    /// "Composing Methods") or any separator/case variation of either.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let needle = Self::normalized(s);
        for category in Self::all() {
            let variant = Self::normalized(&format!("{:?}", category));
            if needle == variant || needle == Self::normalized(category.label()) {
                return Ok(*category);
            }
        }
        Err(CatalogError::UnknownCategory(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_all_partitions_by_kind() {
        let smells: Vec<_> = Category::for_kind(EntryKind::Smell).collect();
        let techniques: Vec<_> = Category::for_kind(EntryKind::Technique).collect();
        assert_eq!(smells.len(), 5);
        assert_eq!(techniques.len(), 6);
        assert_eq!(smells.len() + techniques.len(), Category::all().len());
    }

    #[test]
    fn test_from_str_variant_name() {
        assert_eq!("Bloater".parse::<Category>().unwrap(), Category::Bloater);
        assert_eq!(
            "ComposingMethods".parse::<Category>().unwrap(),
            Category::ComposingMethods
        );
    }

    #[test]
    fn test_from_str_label_and_slug() {
        assert_eq!("Bloaters".parse::<Category>().unwrap(), Category::Bloater);
        assert_eq!(
            "composing-methods".parse::<Category>().unwrap(),
            Category::ComposingMethods
        );
        assert_eq!(
            "object oriented abusers".parse::<Category>().unwrap(),
            Category::ObjectOrientedAbuser
        );
        assert_eq!(
            "simplifying_method_calls".parse::<Category>().unwrap(),
            Category::SimplifyingMethodCalls
        );
    }

    #[test]
    fn test_from_str_unknown() {
        let err = "Antipatterns".parse::<Category>().unwrap_err();
        assert!(matches!(err, CatalogError::UnknownCategory(ref s) if s == "Antipatterns"));
    }

    #[test]
    fn test_display_uses_label() {
        assert_eq!(Category::Dispensable.to_string(), "Dispensables");
        assert_eq!(
            Category::MovingFeaturesBetweenObjects.to_string(),
            "Moving Features Between Objects"
        );
    }
}
