//! Plain-text page rendering.
//!
//! Every function writes to a caller-supplied [`Write`] so pages can be sent
//! to stdout in the binary and to a buffer in tests.

use std::io::{self, Write};

use paradise_nursery_core::{Cart, CartLine, CheckoutError, OrderSummary, Product};

use crate::session::{Notice, Page, ShopSession};

const STORE_NAME: &str = "Paradise Nursery";
const RULE: &str = "------------------------------------------------------------";

/// Header bar with navigation hints and the live cart count.
///
/// # Errors
///
/// Returns any error from the underlying writer.
pub fn header(out: &mut impl Write, page: Page, cart_count: u64) -> io::Result<()> {
    let mut links = Vec::new();
    if page != Page::Landing {
        links.push("[home]".to_string());
    }
    if page != Page::Products {
        links.push("[browse] Browse Plants".to_string());
    }
    if page != Page::Cart {
        links.push(format!("[cart] Cart ({cart_count})"));
    }
    writeln!(out, "{RULE}")?;
    writeln!(out, "{STORE_NAME}    {}", links.join("  "))?;
    writeln!(out, "{RULE}")
}

/// Landing page hero.
///
/// # Errors
///
/// Returns any error from the underlying writer.
pub fn landing(out: &mut impl Write) -> io::Result<()> {
    writeln!(out)?;
    writeln!(out, "Bring the Jungle Home")?;
    writeln!(out)?;
    writeln!(
        out,
        "{STORE_NAME} curates easy-care houseplants that thrive in real homes. From\n\
         low-light heroes to statement foliage, we make it simple to green up your\n\
         space with plants delivered fresh from our growers."
    )?;
    writeln!(out)?;
    writeln!(out, "Type `start` to Get Started.")
}

/// One product card.
///
/// # Errors
///
/// Returns any error from the underlying writer.
pub fn product_card(out: &mut impl Write, product: &Product) -> io::Result<()> {
    writeln!(
        out,
        "  {:<4} {:<24} {:>8}   {}",
        product.id,
        product.name,
        product.price.to_string(),
        product.category
    )
}

/// Product list under the session's current query.
///
/// # Errors
///
/// Returns any error from the underlying writer.
pub fn products(out: &mut impl Write, session: &ShopSession<'_>) -> io::Result<()> {
    let query = session.query();
    let categories: Vec<String> = session
        .catalog()
        .categories()
        .into_iter()
        .map(String::from)
        .collect();

    writeln!(out)?;
    writeln!(out, "Browse Plants")?;
    writeln!(out, "Explore by category or search by name.")?;
    writeln!(
        out,
        "Search: {:?}   Category: {}   (categories: {})",
        query.text,
        query.category,
        categories.join(", ")
    )?;
    writeln!(out)?;

    let visible = session.visible_products();
    if visible.is_empty() {
        writeln!(out, "  No plants match your search.")?;
    }
    for product in visible {
        product_card(out, product)?;
    }
    writeln!(out)?;
    writeln!(out, "Type `add <id>` to add a plant to your cart.")
}

/// One cart row: unit price, quantity and line total.
///
/// # Errors
///
/// Returns any error from the underlying writer.
pub fn cart_row(out: &mut impl Write, line: &CartLine) -> io::Result<()> {
    writeln!(
        out,
        "  {:<4} {:<24} {:>8}  x {:<3} {:>9}",
        line.product_id,
        line.name,
        line.price.to_string(),
        line.quantity(),
        line.line_total().to_string()
    )
}

/// Order summary box.
///
/// # Errors
///
/// Returns any error from the underlying writer.
pub fn order_summary(out: &mut impl Write, summary: &OrderSummary) -> io::Result<()> {
    writeln!(out, "  Order Summary")?;
    writeln!(out, "    Items     {:>10}", summary.items)?;
    writeln!(out, "    Subtotal  {:>10}", summary.subtotal.to_string())?;
    writeln!(out, "    Shipping  {:>10}", summary.shipping.label())?;
    writeln!(out, "    Total     {:>10}", summary.total.to_string())
}

/// The cart page.
///
/// # Errors
///
/// Returns any error from the underlying writer.
pub fn cart(out: &mut impl Write, cart: &Cart) -> io::Result<()> {
    let summary = OrderSummary::of(cart);

    writeln!(out)?;
    writeln!(out, "Your Cart")?;
    writeln!(out, "{}", summary.headline())?;
    writeln!(out)?;

    if cart.is_empty() {
        writeln!(out, "Your cart is empty. Add some leafy friends!")?;
        return writeln!(out, "Type `browse` to Continue Shopping.");
    }

    for line in cart.lines() {
        cart_row(out, line)?;
    }
    writeln!(out)?;
    order_summary(out, &summary)?;
    writeln!(out)?;
    writeln!(
        out,
        "Type `inc <id>`, `dec <id>` or `rm <id>` to adjust, `checkout` to finish."
    )
}

/// Footer line.
///
/// # Errors
///
/// Returns any error from the underlying writer.
pub fn footer(out: &mut impl Write, year: i32) -> io::Result<()> {
    writeln!(out, "{RULE}")?;
    writeln!(out, "(c) {year} {STORE_NAME} - Keep Growing")
}

/// Render the whole current page.
///
/// # Errors
///
/// Returns any error from the underlying writer.
pub fn page(out: &mut impl Write, session: &ShopSession<'_>, year: i32) -> io::Result<()> {
    header(out, session.page(), session.cart().cart_count())?;
    match session.page() {
        Page::Landing => landing(out)?,
        Page::Products => products(out, session)?,
        Page::Cart => cart(out, session.cart())?,
    }
    footer(out, year)
}

/// Command reference shown by `help`.
///
/// # Errors
///
/// Returns any error from the underlying writer.
pub fn help(out: &mut impl Write) -> io::Result<()> {
    writeln!(out, "Commands:")?;
    writeln!(out, "  home | browse | cart        switch page")?;
    writeln!(out, "  search <text>               filter by name (empty clears)")?;
    writeln!(out, "  category <name>             filter by category (`All` clears)")?;
    writeln!(out, "  add <id>                    add a plant to the cart")?;
    writeln!(out, "  inc <id> | dec <id>         change a cart quantity")?;
    writeln!(out, "  rm <id>                     remove a plant from the cart")?;
    writeln!(out, "  checkout                    place the order")?;
    writeln!(out, "  quit                        leave the shop")
}

/// Feedback for a [`Notice`].
///
/// # Errors
///
/// Returns any error from the underlying writer.
pub fn notice(out: &mut impl Write, notice: &Notice) -> io::Result<()> {
    match notice {
        Notice::Added { name, quantity } => {
            writeln!(out, "Added {name} to your cart ({quantity} in cart).")
        }
        Notice::UnknownProduct(id) => writeln!(out, "No plant with id `{id}`."),
        Notice::NotInCart(id) => writeln!(out, "`{id}` is not in your cart."),
        Notice::CheckedOut(ack) => {
            writeln!(out, "{}", ack.message)?;
            writeln!(
                out,
                "Reference {} - {} for {}",
                ack.reference,
                ack.summary.headline(),
                ack.summary.total
            )
        }
        Notice::CheckoutFailed(CheckoutError::EmptyCart) => {
            writeln!(out, "Your cart is empty. Add some leafy friends first!")
        }
        Notice::CheckoutFailed(e) => writeln!(out, "Checkout failed: {e}"),
        Notice::Help => help(out),
    }
}
