//! The product catalog.
//!
//! A [`Catalog`] is built once at startup and then only read. Construction
//! validates that every product has a usable id and name and that ids are
//! unique, so everything downstream can rely on `id` being a key.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use crate::types::{Category, CategoryFilter, ImageRef, Price, ProductId};

/// Errors that can occur when assembling a [`Catalog`].
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum CatalogError {
    /// Two products share an id.
    #[error("duplicate product id: {0}")]
    DuplicateId(ProductId),
    /// A product has an empty id.
    #[error("product id cannot be empty (product {name:?})")]
    EmptyId {
        /// Name of the offending product.
        name: String,
    },
    /// A product has an empty name.
    #[error("product {0} has an empty name")]
    EmptyName(ProductId),
}

/// A purchasable plant.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Product {
    pub id: ProductId,
    pub name: String,
    pub price: Price,
    pub category: Category,
    /// Display handle, copied verbatim into cart lines.
    #[serde(alias = "img")]
    pub image: ImageRef,
}

impl Product {
    /// Create a product with a generated placeholder image.
    #[must_use]
    pub fn new(
        id: impl Into<ProductId>,
        name: impl Into<String>,
        price: Price,
        category: Category,
    ) -> Self {
        let name = name.into();
        let image = ImageRef::placeholder(&name);
        Self {
            id: id.into(),
            name,
            price,
            category,
            image,
        }
    }

    /// Replace the image handle.
    #[must_use]
    pub fn with_image(mut self, image: ImageRef) -> Self {
        self.image = image;
        self
    }
}

/// The fixed, ordered set of products on sale.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct Catalog {
    products: Vec<Product>,
}

impl Catalog {
    /// Build a catalog, preserving the given order.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError`] if any id is empty or duplicated, or any name
    /// is blank.
    pub fn new(products: Vec<Product>) -> Result<Self, CatalogError> {
        let mut seen = HashSet::with_capacity(products.len());
        for product in &products {
            if product.id.as_str().is_empty() {
                return Err(CatalogError::EmptyId {
                    name: product.name.clone(),
                });
            }
            if product.name.trim().is_empty() {
                return Err(CatalogError::EmptyName(product.id.clone()));
            }
            if !seen.insert(&product.id) {
                return Err(CatalogError::DuplicateId(product.id.clone()));
            }
        }
        Ok(Self { products })
    }

    /// The Paradise Nursery house catalog.
    #[must_use]
    pub fn paradise() -> Self {
        let monstera = Product::new(
            "p1",
            "Monstera Deliciosa",
            Price::from_cents(2499),
            Category::Tropical,
        )
        .with_image(ImageRef::placeholder("Monstera"));
        let orchid = Product::new(
            "p8",
            "Orchid Phalaenopsis",
            Price::from_cents(2250),
            Category::Blooming,
        )
        .with_image(ImageRef::placeholder("Orchid"));

        Self {
            products: vec![
                monstera,
                Product::new(
                    "p2",
                    "Snake Plant",
                    Price::from_cents(1450),
                    Category::LowLight,
                ),
                Product::new(
                    "p3",
                    "Peace Lily",
                    Price::from_cents(1800),
                    Category::Blooming,
                ),
                Product::new("p4", "ZZ Plant", Price::from_cents(1975), Category::LowLight),
                Product::new(
                    "p5",
                    "Fiddle Leaf Fig",
                    Price::from_cents(2999),
                    Category::Tropical,
                ),
                Product::new(
                    "p6",
                    "Aloe Vera",
                    Price::from_cents(1200),
                    Category::Succulent,
                ),
                Product::new(
                    "p7",
                    "Jade Plant",
                    Price::from_cents(1599),
                    Category::Succulent,
                ),
                orchid,
            ],
        }
    }

    /// All products in catalog order.
    #[must_use]
    pub fn products(&self) -> &[Product] {
        &self.products
    }

    /// Look up a product by id.
    #[must_use]
    pub fn get(&self, id: &ProductId) -> Option<&Product> {
        self.products.iter().find(|product| &product.id == id)
    }

    /// Number of products.
    #[must_use]
    pub fn len(&self) -> usize {
        self.products.len()
    }

    /// Whether the catalog has no products.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }

    /// Selector options: `All`, then each category in order of first
    /// appearance in the catalog.
    #[must_use]
    pub fn categories(&self) -> Vec<CategoryFilter> {
        let mut seen = Vec::new();
        for product in &self.products {
            if !seen.contains(&product.category) {
                seen.push(product.category);
            }
        }
        std::iter::once(CategoryFilter::All)
            .chain(seen.into_iter().map(CategoryFilter::from))
            .collect()
    }
}

impl Default for Catalog {
    fn default() -> Self {
        Self::paradise()
    }
}

impl<'de> Deserialize<'de> for Catalog {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let products = Vec::<Product>::deserialize(deserializer)?;
        Self::new(products).map_err(serde::de::Error::custom)
    }
}

impl<'a> IntoIterator for &'a Catalog {
    type Item = &'a Product;
    type IntoIter = std::slice::Iter<'a, Product>;

    fn into_iter(self) -> Self::IntoIter {
        self.products.iter()
    }
}
