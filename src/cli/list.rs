//! List command handler.

use color_eyre::Result;

use crate::catalog::Catalog;
use crate::models::{Category, EntryKind};

use super::App;

impl App {
    /// Run the list command: categories with counts, or one category's entries.
    pub fn run_list(&self, kind: Option<EntryKind>, category: Option<Category>) -> Result<()> {
        let catalog = Catalog::builtin();

        if let Some(category) = category {
            tracing::debug!("Listing entries of category: {}", category);
            println!("{} ({}s)", category.label(), category.kind());
            for entry in catalog.by_category(category) {
                println!("  {}", entry.name());
            }
            return Ok(());
        }

        let kinds = match kind {
            Some(kind) => vec![kind],
            None => EntryKind::all().to_vec(),
        };

        let mut first = true;
        for kind in kinds {
            if !first {
                println!();
            }
            first = false;

            let heading = match kind {
                EntryKind::Smell => "Code smells",
                EntryKind::Technique => "Refactoring techniques",
            };
            println!("{heading}:");
            for category in catalog.categories(kind) {
                let count = catalog.by_category(category).count();
                println!("  {} ({})", category.label(), count);
            }
        }

        Ok(())
    }
}
