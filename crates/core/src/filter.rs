//! Catalog filtering by category and name.

use serde::{Deserialize, Serialize};

use crate::catalog::{Catalog, Product};
use crate::types::CategoryFilter;

/// Select the products matching a search query and category.
///
/// A product matches when its category passes `category` and its name
/// contains `query` as a case-insensitive substring. The query is used as
/// typed: no trimming, no whitespace or diacritic folding. An empty query
/// matches every name. Results keep catalog order.
///
/// ```
/// use paradise_nursery_core::{Catalog, CategoryFilter, filter};
///
/// let catalog = Catalog::paradise();
/// let hits = filter(&catalog, "MON", &CategoryFilter::All);
/// assert_eq!(hits[0].name, "Monstera Deliciosa");
/// ```
#[must_use]
pub fn filter<'a>(
    catalog: &'a Catalog,
    query: &str,
    category: &CategoryFilter,
) -> Vec<&'a Product> {
    let needle = query.to_lowercase();
    catalog
        .products()
        .iter()
        .filter(|product| category.matches(product.category))
        .filter(|product| product.name.to_lowercase().contains(&needle))
        .collect()
}

/// The shopper's current browse settings.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CatalogQuery {
    /// Free-text search; may be empty.
    pub text: String,
    pub category: CategoryFilter,
}

impl CatalogQuery {
    /// Build a query from raw selector values.
    #[must_use]
    pub fn new(text: impl Into<String>, category: &str) -> Self {
        Self {
            text: text.into(),
            category: CategoryFilter::parse(category),
        }
    }

    /// Replace the search text.
    #[must_use]
    pub fn with_text(self, text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            ..self
        }
    }

    /// Replace the category selection.
    #[must_use]
    pub fn with_category(self, category: CategoryFilter) -> Self {
        Self { category, ..self }
    }

    /// Apply this query to `catalog`.
    #[must_use]
    pub fn apply<'a>(&self, catalog: &'a Catalog) -> Vec<&'a Product> {
        filter(catalog, &self.text, &self.category)
    }
}
