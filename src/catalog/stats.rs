//! Catalog-wide counts for doc generators and the CLI.

use serde::Serialize;

use crate::models::Category;

/// Totals per kind and per category.
#[derive(Debug, Clone, Serialize)]
pub struct CatalogStats {
    pub total: usize,
    pub smells: usize,
    pub techniques: usize,
    /// Per-category counts in the canonical category order.
    pub categories: Vec<CategoryCount>,
}

/// Entry count for a single category.
#[derive(Debug, Clone, Serialize)]
pub struct CategoryCount {
    pub category: Category,
    pub count: usize,
}
