//! Order summary shown next to the cart.

use serde::{Deserialize, Serialize};

use crate::cart::Cart;
use crate::types::Price;

/// Shipping charge for an order. The nursery currently ships everything free.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Shipping {
    #[default]
    Free,
}

impl Shipping {
    /// Amount added to the total.
    #[must_use]
    pub const fn cost(self) -> Price {
        match self {
            Self::Free => Price::ZERO,
        }
    }

    /// Display label.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Free => "Free",
        }
    }
}

/// Totals derived from a cart snapshot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrderSummary {
    pub items: u64,
    pub subtotal: Price,
    pub shipping: Shipping,
    pub total: Price,
}

impl OrderSummary {
    /// Summarize `cart`. Recomputed on every call; nothing is cached.
    #[must_use]
    pub fn of(cart: &Cart) -> Self {
        let subtotal = cart.subtotal();
        let shipping = Shipping::Free;
        Self {
            items: cart.cart_count(),
            subtotal,
            shipping,
            total: subtotal + shipping.cost(),
        }
    }

    /// "plant" or "plants" depending on the item count.
    #[must_use]
    pub const fn noun(&self) -> &'static str {
        if self.items == 1 { "plant" } else { "plants" }
    }

    /// One-line headline, e.g. `3 plants • Total $61.98`.
    #[must_use]
    pub fn headline(&self) -> String {
        format!("{} {} • Total {}", self.items, self.noun(), self.total)
    }
}
