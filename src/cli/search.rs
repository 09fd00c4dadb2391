//! Search command handler.

use color_eyre::Result;
use serde::Serialize;

use crate::catalog::Catalog;
use crate::config::{Config, OutputFormat};
use crate::models::{Category, Entry, EntryKind};

use super::App;

/// One search result row for JSON output.
#[derive(Serialize)]
struct SearchHit<'a> {
    name: &'a str,
    kind: EntryKind,
    category: Category,
}

impl<'a> From<&'a Entry> for SearchHit<'a> {
    fn from(entry: &'a Entry) -> Self {
        Self {
            name: entry.name(),
            kind: entry.kind(),
            category: entry.category(),
        }
    }
}

impl App {
    /// Run the search command: substring match over names and text.
    pub fn run_search(&self, query: &str, json: bool) -> Result<()> {
        let config = Config::load()?;
        let catalog = Catalog::builtin();

        let hits = catalog.search(query);
        tracing::debug!("Search '{}' matched {} entries", query, hits.len());

        if json || config.output.format == OutputFormat::Json {
            let rows: Vec<SearchHit> = hits.iter().copied().map(SearchHit::from).collect();
            println!("{}", serde_json::to_string_pretty(&rows)?);
            return Ok(());
        }

        if hits.is_empty() {
            println!("No entries match '{}'.", query);
            return Ok(());
        }

        for entry in hits {
            println!("{} ({}, {})", entry.name(), entry.kind(), entry.category());
        }

        Ok(())
    }
}
