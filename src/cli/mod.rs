//! CLI module for refactory.
//!
//! Subcommands:
//! - `list`: Categories with entry counts, or one category's entries
//! - `show`: Render a single entry by name
//! - `search`: Case-insensitive substring search
//! - `export`: Dump the whole catalog as JSON
//! - `stats`: Totals per kind and category

mod export;
mod list;
mod search;
mod show;
mod stats;

use clap::{Parser, Subcommand};

use crate::models::{Category, EntryKind};

/// Refactory - Code Smell & Refactoring Catalog
#[derive(Parser)]
#[command(name = "refactory")]
#[command(about = "Catalog of code smells and refactoring techniques")]
#[command(version)]
pub struct App {
    /// Run in verbose mode
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand)]
pub enum Command {
    /// List categories with entry counts, or one category's entries
    List {
        /// Restrict the category listing to one kind: smell or technique
        #[arg(long)]
        kind: Option<EntryKind>,

        /// List the entries of this category in catalog order
        #[arg(long, conflicts_with = "kind")]
        category: Option<Category>,
    },

    /// Render a single entry by name
    Show {
        /// Entry name, e.g. "Long Method"
        name: String,

        /// Emit JSON regardless of the configured format
        #[arg(long)]
        json: bool,
    },

    /// Search entry names and text for a substring
    Search {
        /// Case-insensitive substring to look for
        query: String,

        /// Emit JSON regardless of the configured format
        #[arg(long)]
        json: bool,
    },

    /// Export the whole catalog as a JSON array of rendered entries
    Export,

    /// Print catalog totals per kind and category
    Stats {
        /// Emit JSON regardless of the configured format
        #[arg(long)]
        json: bool,
    },
}

impl App {
    /// Run the CLI application.
    pub fn run(self) -> color_eyre::Result<()> {
        match self.command {
            Command::List { kind, category } => self.run_list(kind, category),
            Command::Show { ref name, json } => self.run_show(name, json),
            Command::Search { ref query, json } => self.run_search(query, json),
            Command::Export => self.run_export(),
            Command::Stats { json } => self.run_stats(json),
        }
    }
}
