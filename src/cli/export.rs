//! Export command handler.

use color_eyre::Result;

use crate::catalog::{render, Catalog, RenderedEntry};

use super::App;

impl App {
    /// Run the export command: the whole catalog as JSON on stdout.
    pub fn run_export(&self) -> Result<()> {
        let catalog = Catalog::builtin();
        let rendered: Vec<RenderedEntry> = catalog.all().map(render).collect();
        tracing::debug!("Exporting {} rendered entries", rendered.len());
        println!("{}", serde_json::to_string_pretty(&rendered)?);
        Ok(())
    }
}
