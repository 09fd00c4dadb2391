//! Refactory - Code Smell & Refactoring Catalog
//!
//! A validated, immutable catalog of code smells and refactoring techniques.
//! Entries are registered once at startup, checked against a per-kind field
//! schema, then served read-only through [`Catalog`].

pub mod catalog;
pub mod cli;
pub mod config;
mod content;
pub mod error;
pub mod models;
pub mod registry;

pub use catalog::{builtin_catalog, Catalog};
pub use error::CatalogError;
