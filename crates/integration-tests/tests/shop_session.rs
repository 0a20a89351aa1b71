//! Scripted terminal sessions through the CLI library.

#![allow(clippy::unwrap_used)]

use std::path::Path;

use paradise_nursery_cli::catalog_file::parse_catalog;
use paradise_nursery_cli::{Notice, Page, ShopCommand, ShopSession};
use paradise_nursery_core::{DemoCheckout, Price, ProductId};
use paradise_nursery_integration_tests::{quantities, scripted_session};

#[test]
fn browse_add_and_review_cart() {
    let (cart, out) = scripted_session(
        "start\ncategory Tropical\nadd p1\nadd p5\nadd p1\ncart\nquit\n",
    );

    assert_eq!(
        quantities(&cart),
        vec![("p1".to_string(), 2), ("p5".to_string(), 1)]
    );
    assert!(out.contains("Monstera Deliciosa"));
    assert!(out.contains("3 plants • Total $79.97"));
    assert!(out.contains("Order Summary"));
}

#[test]
fn header_badge_tracks_cart_count() {
    let (_, out) = scripted_session("add p6\nadd p6\nadd p7\nhome\nquit\n");
    assert!(out.contains("Cart (3)"));
}

#[test]
fn checkout_on_empty_cart_is_refused() {
    let (cart, out) = scripted_session("checkout\nquit\n");
    assert!(cart.is_empty());
    assert!(out.contains("Your cart is empty. Add some leafy friends first!"));
    assert!(!out.contains("Thank you!"));
}

#[test]
fn checkout_acknowledges_without_clearing_cart() {
    let (cart, out) = scripted_session("add p3\ncheckout\nquit\n");
    assert_eq!(cart.cart_count(), 1);
    assert!(out.contains("Thank you!"));
    assert!(out.contains("Reference "));
}

#[test]
fn cart_page_survives_oversized_prices() {
    let catalog = parse_catalog(
        "- {id: big, name: Sequoia, price: '40000000000000000000000000000', category: Tropical}\n",
        Path::new("big.yaml"),
    )
    .unwrap();

    let mut out = Vec::new();
    let cart = paradise_nursery_cli::commands::shop::run(
        &catalog,
        &DemoCheckout,
        std::io::Cursor::new("add big\nadd big\ncart\nquit\n"),
        &mut out,
        2026,
    )
    .unwrap();

    assert_eq!(cart.cart_count(), 2);
    let out = String::from_utf8(out).unwrap();
    assert!(out.contains("2 plants • Total $79228162514264337593543950335.00"));
}

#[test]
fn session_over_custom_catalog() {
    let catalog = parse_catalog(
        "- {id: f1, name: Boston Fern, price: '11.00', category: Low Light}\n",
        Path::new("inline.yaml"),
    )
    .unwrap();

    let mut session = ShopSession::new(&catalog);
    let mut notices = Vec::new();
    for line in ["browse", "search FERN", "add f1", "inc f1", "add p1"] {
        let (next, notice) = session.handle(ShopCommand::parse(line).unwrap(), &DemoCheckout);
        session = next;
        notices.extend(notice);
    }

    assert_eq!(session.page(), Page::Products);
    assert_eq!(session.visible_products().len(), 1);
    assert_eq!(session.cart().subtotal(), Price::from_cents(2200));
    assert_eq!(
        notices.last(),
        Some(&Notice::UnknownProduct(ProductId::new("p1")))
    );
}
