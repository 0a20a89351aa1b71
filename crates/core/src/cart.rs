//! The shopping cart state engine.
//!
//! A [`Cart`] is an immutable snapshot. Every mutation (`add_item`,
//! `increment`, `decrement`, `remove_item`) borrows the current snapshot and
//! returns the next one, so a renderer holding the old value never sees a
//! half-applied change. Callers that prefer a reducer can dispatch
//! [`CartAction`]s through [`Cart::apply`].
//!
//! Per product the cart is a two-state machine:
//!
//! | From            | Event                   | To               |
//! |-----------------|-------------------------|------------------|
//! | absent          | add                     | present(1)       |
//! | present(q)      | add / increment         | present(q + 1)   |
//! | present(q > 1)  | decrement               | present(q - 1)   |
//! | present(1)      | decrement               | absent           |
//! | present(q)      | remove                  | absent           |
//! | absent          | increment/decrement/remove | absent        |
//!
//! Quantities are [`NonZeroU32`], so a zero-quantity line cannot be built.

use std::num::NonZeroU32;

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::catalog::Product;
use crate::types::{ImageRef, Price, ProductId};

/// One product in the cart and how many of it the shopper wants.
///
/// Name, price and image are copied from the product when the line is first
/// created. Later catalog edits do not reach existing lines.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CartLine {
    pub product_id: ProductId,
    pub name: String,
    pub price: Price,
    pub image: ImageRef,
    quantity: NonZeroU32,
}

impl CartLine {
    fn first_of(product: &Product) -> Self {
        Self {
            product_id: product.id.clone(),
            name: product.name.clone(),
            price: product.price,
            image: product.image.clone(),
            quantity: NonZeroU32::MIN,
        }
    }

    /// How many units are in the cart; always at least one.
    #[must_use]
    pub const fn quantity(&self) -> u32 {
        self.quantity.get()
    }

    /// `price * quantity` using the snapshotted price.
    #[must_use]
    pub fn line_total(&self) -> Price {
        self.price.times(self.quantity())
    }

    fn incremented(&self) -> Self {
        Self {
            quantity: self.quantity.saturating_add(1),
            ..self.clone()
        }
    }

    /// The line with one unit fewer, or `None` when that would reach zero.
    fn decremented(&self) -> Option<Self> {
        NonZeroU32::new(self.quantity.get() - 1).map(|quantity| Self {
            quantity,
            ..self.clone()
        })
    }
}

/// A cart mutation, for reducer-style dispatch.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "action", rename_all = "snake_case")]
pub enum CartAction {
    Add { product: Product },
    Increment { product_id: ProductId },
    Decrement { product_id: ProductId },
    Remove { product_id: ProductId },
}

/// The shopper's cart: at most one line per product, in the order products
/// were first added.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Cart {
    lines: IndexMap<ProductId, CartLine>,
}

impl Cart {
    /// An empty cart.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Add one unit of `product`.
    ///
    /// Creates a line with quantity 1 if the product is not yet in the cart,
    /// otherwise bumps the existing line. The existing line keeps the name
    /// and price it was created with.
    #[must_use]
    pub fn add_item(&self, product: &Product) -> Self {
        let line = self
            .lines
            .get(&product.id)
            .map_or_else(|| CartLine::first_of(product), CartLine::incremented);
        debug!(product_id = %product.id, quantity = line.quantity(), "Added to cart");
        self.with_line(line)
    }

    /// Add one unit of an item already in the cart. Unknown ids are a no-op.
    #[must_use]
    pub fn increment(&self, product_id: &ProductId) -> Self {
        let Some(line) = self.lines.get(product_id) else {
            return self.clone();
        };
        let line = line.incremented();
        debug!(%product_id, quantity = line.quantity(), "Incremented cart line");
        self.with_line(line)
    }

    /// Take away one unit; the line disappears when its last unit goes.
    /// Unknown ids are a no-op.
    #[must_use]
    pub fn decrement(&self, product_id: &ProductId) -> Self {
        let Some(line) = self.lines.get(product_id) else {
            return self.clone();
        };
        match line.decremented() {
            Some(line) => {
                debug!(%product_id, quantity = line.quantity(), "Decremented cart line");
                self.with_line(line)
            }
            None => self.remove_item(product_id),
        }
    }

    /// Drop the line for `product_id`, whatever its quantity. Unknown ids are
    /// a no-op.
    #[must_use]
    pub fn remove_item(&self, product_id: &ProductId) -> Self {
        let mut lines = self.lines.clone();
        if lines.shift_remove(product_id).is_some() {
            debug!(%product_id, "Removed cart line");
        }
        Self { lines }
    }

    /// Dispatch a [`CartAction`].
    #[must_use]
    pub fn apply(&self, action: &CartAction) -> Self {
        match action {
            CartAction::Add { product } => self.add_item(product),
            CartAction::Increment { product_id } => self.increment(product_id),
            CartAction::Decrement { product_id } => self.decrement(product_id),
            CartAction::Remove { product_id } => self.remove_item(product_id),
        }
    }

    /// Total number of units across all lines.
    #[must_use]
    pub fn cart_count(&self) -> u64 {
        self.lines
            .values()
            .map(|line| u64::from(line.quantity()))
            .sum()
    }

    /// Sum of `price * quantity` over all lines, using snapshotted prices.
    #[must_use]
    pub fn subtotal(&self) -> Price {
        self.lines.values().map(CartLine::line_total).sum()
    }

    /// The line for `product_id`, if present.
    #[must_use]
    pub fn line(&self, product_id: &ProductId) -> Option<&CartLine> {
        self.lines.get(product_id)
    }

    /// Lines in the order their products were first added.
    pub fn lines(&self) -> impl Iterator<Item = &CartLine> {
        self.lines.values()
    }

    /// Number of distinct products.
    #[must_use]
    pub fn len(&self) -> usize {
        self.lines.len()
    }

    /// Whether the cart has no lines.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    fn with_line(&self, line: CartLine) -> Self {
        let mut lines = self.lines.clone();
        lines.insert(line.product_id.clone(), line);
        Self { lines }
    }
}
