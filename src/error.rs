//! Application error types for catalog validation and lookup.

use thiserror::Error;

use crate::models::{Category, EntryKind};

/// Application-level errors for Refactory.
///
/// Field names in validation errors are the stable snake_case keys
/// ([`crate::models::Field::key`]), plus `"name"` for the entry name.
#[derive(Error, Debug)]
pub enum CatalogError {
    // Validation errors
    #[error("Missing required field '{field}' for entry '{entry}'")]
    MissingRequiredField { entry: String, field: String },

    #[error("Field '{field}' does not apply to {kind} entry '{entry}'")]
    FieldNotApplicable {
        entry: String,
        field: String,
        kind: EntryKind,
    },

    #[error("Optional field '{field}' on entry '{entry}' is set but blank")]
    EmptyOptionalField { entry: String, field: String },

    // Registration errors
    #[error("Duplicate entry name '{name}' in category {category}")]
    DuplicateName { name: String, category: Category },

    // Lookup errors
    #[error("Entry not found: {0}")]
    NotFound(String),

    #[error("Category not found: {0}")]
    UnknownCategory(String),

    // Config errors
    #[error("Configuration error: {0}")]
    Config(#[from] crate::config::ConfigError),
}
