//! Stats command handler.

use color_eyre::Result;

use crate::catalog::Catalog;
use crate::config::{Config, OutputFormat};

use super::App;

impl App {
    /// Run the stats command: totals per kind and category.
    pub fn run_stats(&self, json: bool) -> Result<()> {
        let config = Config::load()?;
        let stats = Catalog::builtin().stats();

        if json || config.output.format == OutputFormat::Json {
            println!("{}", serde_json::to_string_pretty(&stats)?);
            return Ok(());
        }

        println!("Entries: {}", stats.total);
        println!("  smells: {}", stats.smells);
        println!("  techniques: {}", stats.techniques);
        println!();
        println!("Per category:");
        for row in &stats.categories {
            println!("  {}: {}", row.category.label(), row.count);
        }

        Ok(())
    }
}
