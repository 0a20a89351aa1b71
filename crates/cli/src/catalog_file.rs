//! Loading a replacement catalog from YAML.
//!
//! ```yaml
//! - id: f1
//!   name: Boston Fern
//!   price: 11.00
//!   category: Low Light
//!   image: https://cdn.example.com/fern.jpg   # optional
//! ```
//!
//! Entries without an `image` get a generated placeholder.

use std::path::{Path, PathBuf};

use serde::Deserialize;
use tracing::info;

use paradise_nursery_core::{Catalog, CatalogError, Category, ImageRef, Price, Product, ProductId};

/// Errors that can occur when loading a catalog file.
#[derive(Debug, thiserror::Error)]
pub enum CatalogFileError {
    #[error("Failed to read catalog {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("Failed to parse catalog {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_yaml::Error,
    },
    #[error("Invalid catalog {path}: {source}")]
    Invalid {
        path: PathBuf,
        #[source]
        source: CatalogError,
    },
}

#[derive(Debug, Deserialize)]
struct CatalogEntry {
    id: ProductId,
    name: String,
    price: Price,
    category: Category,
    #[serde(default)]
    image: Option<ImageRef>,
}

impl From<CatalogEntry> for Product {
    fn from(entry: CatalogEntry) -> Self {
        let product = Self::new(entry.id, entry.name, entry.price, entry.category);
        match entry.image {
            Some(image) => product.with_image(image),
            None => product,
        }
    }
}

/// Parse catalog YAML. `path` is only used in error messages.
///
/// # Errors
///
/// Returns [`CatalogFileError`] if the YAML is malformed or the products fail
/// catalog validation.
pub fn parse_catalog(yaml: &str, path: &Path) -> Result<Catalog, CatalogFileError> {
    let entries: Vec<CatalogEntry> =
        serde_yaml::from_str(yaml).map_err(|source| CatalogFileError::Parse {
            path: path.to_path_buf(),
            source,
        })?;

    Catalog::new(entries.into_iter().map(Product::from).collect()).map_err(|source| {
        CatalogFileError::Invalid {
            path: path.to_path_buf(),
            source,
        }
    })
}

/// Read and parse a catalog file.
///
/// # Errors
///
/// Returns [`CatalogFileError`] if the file cannot be read or parsed.
pub fn load_catalog(path: &Path) -> Result<Catalog, CatalogFileError> {
    let yaml = std::fs::read_to_string(path).map_err(|source| CatalogFileError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    let catalog = parse_catalog(&yaml, path)?;
    info!(path = %path.display(), products = catalog.len(), "Loaded catalog");
    Ok(catalog)
}

/// The catalog to shop from: the file at `path`, or the house catalog.
///
/// # Errors
///
/// Returns [`CatalogFileError`] if `path` is given and cannot be loaded.
pub fn resolve_catalog(path: Option<&Path>) -> Result<Catalog, CatalogFileError> {
    path.map_or_else(|| Ok(Catalog::paradise()), load_catalog)
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    const FERNS: &str = r"
- id: f1
  name: Boston Fern
  price: 11.00
  category: Low Light
  image: https://cdn.example.com/fern.jpg
- id: f2
  name: Bird's Nest Fern
  price: '13.50'
  category: Tropical
";

    #[test]
    fn test_parse_catalog() {
        let catalog = parse_catalog(FERNS, Path::new("ferns.yaml")).unwrap();
        assert_eq!(catalog.len(), 2);

        let boston = catalog.get(&ProductId::new("f1")).unwrap();
        assert_eq!(boston.price, Price::from_cents(1100));
        assert_eq!(boston.image.as_str(), "https://cdn.example.com/fern.jpg");

        let nest = catalog.get(&ProductId::new("f2")).unwrap();
        assert_eq!(nest.price, Price::from_cents(1350));
        assert!(nest.image.is_inline());
    }

    #[test]
    fn test_parse_rejects_unknown_category() {
        let yaml = "- {id: c1, name: Cactus, price: 5, category: Desert}";
        let err = parse_catalog(yaml, Path::new("c.yaml")).unwrap_err();
        assert!(matches!(err, CatalogFileError::Parse { .. }));
    }

    #[test]
    fn test_parse_rejects_negative_price() {
        let yaml = "- {id: c1, name: Cactus, price: -5, category: Succulent}";
        assert!(parse_catalog(yaml, Path::new("c.yaml")).is_err());
    }

    #[test]
    fn test_oversized_price_totals_saturate() {
        let yaml = "- {id: big, name: Sequoia, price: '40000000000000000000000000000', category: Tropical}";
        let catalog = parse_catalog(yaml, Path::new("big.yaml")).unwrap();
        let sequoia = catalog.get(&ProductId::new("big")).unwrap();

        let cart = paradise_nursery_core::Cart::new()
            .add_item(sequoia)
            .add_item(sequoia);
        assert_eq!(
            cart.subtotal().to_string(),
            "$79228162514264337593543950335.00"
        );
    }

    #[test]
    fn test_parse_rejects_duplicates() {
        let yaml = "
- {id: a, name: Fern, price: 1, category: Tropical}
- {id: a, name: Palm, price: 2, category: Tropical}
";
        let err = parse_catalog(yaml, Path::new("dup.yaml")).unwrap_err();
        assert!(matches!(
            err,
            CatalogFileError::Invalid {
                source: CatalogError::DuplicateId(_),
                ..
            }
        ));
    }

    #[test]
    fn test_missing_file() {
        let err = load_catalog(Path::new("/definitely/not/here.yaml")).unwrap_err();
        assert!(matches!(err, CatalogFileError::Read { .. }));
    }

    #[test]
    fn test_resolve_defaults_to_house_catalog() {
        assert_eq!(resolve_catalog(None).unwrap(), Catalog::paradise());
    }
}
