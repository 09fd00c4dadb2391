//! Show command handler.

use color_eyre::Result;

use crate::catalog::{render, Catalog};
use crate::config::{Config, OutputFormat};
use crate::models::Field;

use super::App;

impl App {
    /// Run the show command: render one entry by name.
    pub fn run_show(&self, name: &str, json: bool) -> Result<()> {
        let config = Config::load()?;
        let catalog = Catalog::builtin();

        let entry = match catalog.by_name(name) {
            Ok(entry) => entry,
            Err(err) => {
                // Near matches go to stderr so scripted callers still
                // get a clean (empty) stdout on failure.
                let near = catalog.search(name);
                if !near.is_empty() {
                    eprintln!("Did you mean:");
                    for candidate in near.iter().take(5) {
                        eprintln!("  {} ({})", candidate.name(), candidate.category());
                    }
                }
                return Err(err.into());
            }
        };

        let rendered = render(entry);

        if json || config.output.format == OutputFormat::Json {
            println!("{}", serde_json::to_string_pretty(&rendered)?);
            return Ok(());
        }

        println!(
            "{} ({}, {})",
            rendered.name, rendered.kind, rendered.category
        );
        for field in &rendered.fields {
            if field.key == Field::ExampleCode.key() && !config.output.examples {
                continue;
            }
            println!();
            println!("{}:", field.label);
            println!("{}", field.text);
        }

        Ok(())
    }
}
