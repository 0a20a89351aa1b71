//! Interactive shopping loop.
//!
//! Reads one command per line, applies it to the session, and re-renders the
//! page. The loop ends on `quit` or end of input and returns the final cart.

use std::io::{BufRead, Write};

use tracing::{info, instrument, warn};

use paradise_nursery_core::{Cart, Catalog, CheckoutService};

use crate::error::Result;
use crate::render;
use crate::session::{ShopCommand, ShopSession};

const PROMPT: &str = "nursery> ";

/// Run a shopping session over `input` and `output`.
///
/// # Errors
///
/// Returns an error if reading input or writing output fails.
#[instrument(skip_all, fields(products = catalog.len()))]
pub fn run<C>(
    catalog: &Catalog,
    checkout: &C,
    input: impl BufRead,
    output: &mut impl Write,
    year: i32,
) -> Result<Cart>
where
    C: CheckoutService + ?Sized,
{
    let mut session = ShopSession::new(catalog);
    render::page(output, &session, year)?;
    write!(output, "{PROMPT}")?;
    output.flush()?;

    for line in input.lines() {
        let line = line?;
        if line.trim().is_empty() {
            write!(output, "{PROMPT}")?;
            output.flush()?;
            continue;
        }

        let command = match ShopCommand::parse(&line) {
            Ok(command) => command,
            Err(e) => {
                warn!(input = %line, "Unrecognized command");
                writeln!(output, "{e}")?;
                write!(output, "{PROMPT}")?;
                output.flush()?;
                continue;
            }
        };

        if command == ShopCommand::Quit {
            break;
        }

        let (next, notice) = session.handle(command, checkout);
        session = next;

        render::page(output, &session, year)?;
        if let Some(notice) = notice {
            render::notice(output, &notice)?;
        }
        write!(output, "{PROMPT}")?;
        output.flush()?;
    }

    let cart = session.cart().clone();
    info!(
        lines = cart.len(),
        items = cart.cart_count(),
        subtotal = %cart.subtotal(),
        "Shopping session ended"
    );
    writeln!(output)?;
    writeln!(output, "Goodbye from Paradise Nursery!")?;
    Ok(cart)
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use std::io::Cursor;

    use paradise_nursery_core::{DemoCheckout, ProductId};

    use super::*;

    fn shop(script: &str) -> (Cart, String) {
        let catalog = Catalog::paradise();
        let mut out = Vec::new();
        let cart = run(&catalog, &DemoCheckout, Cursor::new(script), &mut out, 2026).unwrap();
        (cart, String::from_utf8(out).unwrap())
    }

    #[test]
    fn test_landing_then_quit() {
        let (cart, out) = shop("quit\n");
        assert!(cart.is_empty());
        assert!(out.contains("Bring the Jungle Home"));
        assert!(out.contains("Goodbye"));
    }

    #[test]
    fn test_end_of_input_ends_session() {
        let (cart, out) = shop("add p1\n");
        assert_eq!(cart.cart_count(), 1);
        assert!(out.contains("Added Monstera Deliciosa to your cart (1 in cart)."));
    }

    #[test]
    fn test_bad_commands_do_not_stop_the_loop() {
        let (cart, out) = shop("dance\nadd\nadd p4\nquit\nadd p4\n");
        assert!(out.contains("Unknown command: dance"));
        assert!(out.contains("`add` needs a plant id"));
        // Input after quit is ignored.
        assert_eq!(cart.line(&ProductId::new("p4")).unwrap().quantity(), 1);
    }

    #[test]
    fn test_full_shopping_trip() {
        let script = "start\nsearch plant\nadd p2\nadd p2\nadd p7\ncart\ndec p7\ninc p2\ncheckout\nquit\n";
        let (cart, out) = shop(script);
        assert_eq!(cart.cart_count(), 3);
        assert_eq!(cart.len(), 1);
        assert_eq!(cart.subtotal().to_string(), "$43.50");
        assert!(out.contains("Thank you!"));
        assert!(out.contains("3 plants • Total $43.50"));
    }
}
