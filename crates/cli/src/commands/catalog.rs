//! One-shot catalog listing commands.

use std::io::Write;

use tracing::info;

use paradise_nursery_core::{Catalog, CategoryFilter, filter};

use crate::error::Result;
use crate::render;

/// Print the products matching `query` and `category`.
///
/// With `json`, the matching products are written as a JSON array instead of
/// text cards.
///
/// # Errors
///
/// Returns an error if writing to `out` or JSON encoding fails.
pub fn list(
    catalog: &Catalog,
    query: &str,
    category: &str,
    json: bool,
    out: &mut impl Write,
) -> Result<()> {
    let matches = filter(catalog, query, &CategoryFilter::parse(category));
    info!(query, category, matches = matches.len(), "Filtered catalog");

    if json {
        serde_json::to_writer_pretty(&mut *out, &matches)?;
        writeln!(out)?;
        return Ok(());
    }

    for product in matches {
        render::product_card(out, product)?;
    }
    Ok(())
}

/// Print the category selector options, `All` first.
///
/// # Errors
///
/// Returns an error if writing to `out` fails.
pub fn categories(catalog: &Catalog, out: &mut impl Write) -> Result<()> {
    for category in catalog.categories() {
        writeln!(out, "{category}")?;
    }
    Ok(())
}
