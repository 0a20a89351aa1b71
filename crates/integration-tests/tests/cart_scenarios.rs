//! Cart engine scenarios through the public core API.

#![allow(clippy::unwrap_used)]

use paradise_nursery_core::{
    Cart, CartAction, Catalog, CategoryFilter, CheckoutService, DemoCheckout, OrderSummary, Price,
    ProductId, filter,
};
use paradise_nursery_integration_tests::{house_product, quantities, replay};
use proptest::prelude::*;

#[test]
fn snake_plant_walkthrough() {
    let snake = house_product("p2");
    let p2 = snake.id.clone();

    let cart = Cart::new().add_item(&snake);
    assert_eq!(quantities(&cart), vec![("p2".to_string(), 1)]);

    let cart = cart.add_item(&snake);
    assert_eq!(quantities(&cart), vec![("p2".to_string(), 2)]);

    let cart = cart.decrement(&p2);
    assert_eq!(quantities(&cart), vec![("p2".to_string(), 1)]);

    let cart = cart.decrement(&p2);
    assert!(cart.is_empty());

    let unchanged = cart.remove_item(&p2);
    assert_eq!(unchanged, cart);
}

#[test]
fn filter_then_add_everything_visible() {
    let catalog = Catalog::paradise();
    let succulents = filter(&catalog, "", &CategoryFilter::parse("Succulent"));
    let cart = succulents
        .iter()
        .fold(Cart::new(), |cart, product| cart.add_item(product));

    assert_eq!(cart.len(), 2);
    assert_eq!(cart.subtotal(), Price::from_cents(1200 + 1599));
}

#[test]
fn filter_examples() {
    let catalog = Catalog::paradise();

    let all = filter(&catalog, "", &CategoryFilter::All);
    let ids: Vec<_> = all.iter().map(|p| p.id.as_str()).collect();
    assert_eq!(ids, vec!["p1", "p2", "p3", "p4", "p5", "p6", "p7", "p8"]);

    let mon = filter(&catalog, "MON", &CategoryFilter::All);
    assert!(mon.iter().any(|p| p.name == "Monstera Deliciosa"));
}

#[test]
fn checkout_receives_current_snapshot() {
    let cart = replay(&[
        CartAction::Add {
            product: house_product("p5"),
        },
        CartAction::Add {
            product: house_product("p1"),
        },
        CartAction::Increment {
            product_id: ProductId::new("p1"),
        },
    ]);

    let ack = DemoCheckout.checkout(&cart).unwrap();
    assert_eq!(ack.summary, OrderSummary::of(&cart));
    assert_eq!(ack.summary.total.to_string(), "$79.97");
}

#[test]
fn cart_snapshot_serializes_lines_by_id() {
    let cart = replay(&[
        CartAction::Add {
            product: house_product("p8"),
        },
        CartAction::Add {
            product: house_product("p3"),
        },
    ]);

    let json = serde_json::to_value(&cart).unwrap();
    assert_eq!(json.as_object().unwrap().len(), 2);
    let ids: Vec<_> = cart.lines().map(|l| l.product_id.to_string()).collect();
    assert_eq!(ids, vec!["p8", "p3"]);
    assert_eq!(json["p8"]["quantity"], 1);
    assert_eq!(json["p8"]["price"], "22.50");
}

fn arb_action() -> impl Strategy<Value = CartAction> {
    let ids = vec!["p1", "p2", "p3", "p4", "p5", "p6", "p7", "p8", "zz"];
    (0usize..4, prop::sample::select(ids)).prop_map(|(kind, id)| {
        let product_id = ProductId::new(id);
        match kind {
            0 if id != "zz" => CartAction::Add {
                product: house_product(id),
            },
            0 | 1 => CartAction::Increment { product_id },
            2 => CartAction::Decrement { product_id },
            _ => CartAction::Remove { product_id },
        }
    })
}

proptest! {
    #[test]
    fn totals_never_drift(actions in prop::collection::vec(arb_action(), 0..100)) {
        let mut cart = Cart::new();
        for action in &actions {
            cart = cart.apply(action);
            let summary = OrderSummary::of(&cart);
            let expected_count: u64 = cart.lines().map(|l| u64::from(l.quantity())).sum();
            let expected_total: Price = cart.lines().map(|l| l.price.times(l.quantity())).sum();
            prop_assert_eq!(summary.items, expected_count);
            prop_assert_eq!(summary.subtotal, expected_total);
            prop_assert_eq!(summary.total, summary.subtotal);
        }
    }

    #[test]
    fn removal_leaves_no_trace(actions in prop::collection::vec(arb_action(), 0..50), index in 0usize..8) {
        let catalog = Catalog::paradise();
        let id = catalog.products()[index].id.clone();
        let cart = replay(&actions).remove_item(&id);
        prop_assert!(cart.line(&id).is_none());
        prop_assert_eq!(cart.decrement(&id), cart.clone());
        prop_assert_eq!(cart.increment(&id), cart.clone());
    }
}
