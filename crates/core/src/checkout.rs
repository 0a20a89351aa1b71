//! Checkout collaborator interface.
//!
//! The cart engine does not settle orders. At checkout it hands the current
//! snapshot to a [`CheckoutService`] and shows whatever acknowledgment comes
//! back. [`DemoCheckout`] is the stand-in used until a real payment
//! integration exists: it validates the cart and says thank you.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::info;
use uuid::Uuid;

use crate::cart::Cart;
use crate::summary::OrderSummary;

/// Errors a checkout collaborator can report.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum CheckoutError {
    /// There is nothing to check out.
    #[error("cannot check out an empty cart")]
    EmptyCart,
    /// The collaborator declined the order.
    #[error("checkout rejected: {0}")]
    Rejected(String),
}

/// What the checkout collaborator sends back to the shopper.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CheckoutAcknowledgment {
    pub reference: Uuid,
    pub placed_at: DateTime<Utc>,
    pub summary: OrderSummary,
    pub message: String,
}

/// Something that can receive a cart at checkout time.
pub trait CheckoutService {
    /// Submit `cart` for checkout.
    ///
    /// # Errors
    ///
    /// Returns [`CheckoutError`] if the order cannot be accepted.
    fn checkout(&self, cart: &Cart) -> Result<CheckoutAcknowledgment, CheckoutError>;
}

/// Acknowledges every non-empty cart without taking payment.
#[derive(Debug, Clone, Default)]
pub struct DemoCheckout;

impl DemoCheckout {
    pub const MESSAGE: &'static str =
        "Thank you! This is a demo storefront, so no payment was taken.";
}

impl CheckoutService for DemoCheckout {
    fn checkout(&self, cart: &Cart) -> Result<CheckoutAcknowledgment, CheckoutError> {
        if cart.is_empty() {
            return Err(CheckoutError::EmptyCart);
        }

        let acknowledgment = CheckoutAcknowledgment {
            reference: Uuid::new_v4(),
            placed_at: Utc::now(),
            summary: OrderSummary::of(cart),
            message: Self::MESSAGE.to_string(),
        };
        info!(
            reference = %acknowledgment.reference,
            items = acknowledgment.summary.items,
            total = %acknowledgment.summary.total,
            "Demo checkout acknowledged"
        );
        Ok(acknowledgment)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::catalog::Catalog;
    use crate::types::{Price, ProductId};

    #[test]
    fn test_empty_cart_is_refused() {
        assert_eq!(
            DemoCheckout.checkout(&Cart::new()),
            Err(CheckoutError::EmptyCart)
        );
    }

    #[test]
    fn test_acknowledgment_reflects_cart() {
        let catalog = Catalog::paradise();
        let orchid = catalog.get(&ProductId::new("p8")).unwrap();
        let cart = Cart::new().add_item(orchid).add_item(orchid);

        let ack = DemoCheckout.checkout(&cart).unwrap();
        assert_eq!(ack.summary.items, 2);
        assert_eq!(ack.summary.total, Price::from_cents(4500));
        assert_eq!(ack.message, DemoCheckout::MESSAGE);
    }

    #[test]
    fn test_checkout_does_not_consume_cart() {
        let catalog = Catalog::paradise();
        let cart = Cart::new().add_item(&catalog.products()[0]);
        let _ = DemoCheckout.checkout(&cart).unwrap();
        assert_eq!(cart.cart_count(), 1);
    }

    #[test]
    fn test_references_are_unique() {
        let catalog = Catalog::paradise();
        let cart = Cart::new().add_item(&catalog.products()[0]);
        let a = DemoCheckout.checkout(&cart).unwrap();
        let b = DemoCheckout.checkout(&cart).unwrap();
        assert_ne!(a.reference, b.reference);
    }
}
