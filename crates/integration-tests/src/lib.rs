//! Integration tests for Paradise Nursery.
//!
//! # Running Tests
//!
//! ```bash
//! cargo test -p paradise-nursery-integration-tests
//! ```
//!
//! # Test Categories
//!
//! - `cart_scenarios` - Cart engine driven through the public core API
//! - `shop_session` - Scripted terminal sessions through the CLI library
//!
//! Shared fixtures live here so both suites build carts the same way.

use paradise_nursery_core::{Cart, CartAction, Catalog, Product, ProductId};

/// Look up a house-catalog product by id.
///
/// # Panics
///
/// Panics if `id` is not in the house catalog.
#[must_use]
#[allow(clippy::expect_used)]
pub fn house_product(id: &str) -> Product {
    Catalog::paradise()
        .get(&ProductId::new(id))
        .cloned()
        .expect("product should exist in the house catalog")
}

/// Fold a sequence of actions over an empty cart.
#[must_use]
pub fn replay(actions: &[CartAction]) -> Cart {
    actions
        .iter()
        .fold(Cart::new(), |cart, action| cart.apply(action))
}

/// Collect `(product id, quantity)` pairs in cart order.
#[must_use]
pub fn quantities(cart: &Cart) -> Vec<(String, u32)> {
    cart.lines()
        .map(|line| (line.product_id.to_string(), line.quantity()))
        .collect()
}

/// Run a scripted shop session against the house catalog.
///
/// # Panics
///
/// Panics if the session fails to write its output.
#[must_use]
#[allow(clippy::expect_used)]
pub fn scripted_session(script: &str) -> (Cart, String) {
    let catalog = Catalog::paradise();
    let mut out = Vec::new();
    let cart = paradise_nursery_cli::commands::shop::run(
        &catalog,
        &paradise_nursery_core::DemoCheckout,
        std::io::Cursor::new(script.to_owned()),
        &mut out,
        2026,
    )
    .expect("scripted session should not fail");
    (cart, String::from_utf8_lossy(&out).into_owned())
}
