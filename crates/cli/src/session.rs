//! Shopping session state and navigation.
//!
//! A [`ShopSession`] is the whole of the terminal storefront's state: which
//! page is showing, the browse query, and the cart. Like the cart itself it is
//! a snapshot; [`ShopSession::handle`] consumes a command and returns the next
//! session along with an optional [`Notice`] for the shopper.

use tracing::instrument;

use paradise_nursery_core::{
    Cart, Catalog, CatalogQuery, CategoryFilter, CheckoutAcknowledgment, CheckoutError,
    CheckoutService, Product, ProductId,
};

/// The page currently on screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Page {
    #[default]
    Landing,
    Products,
    Cart,
}

/// Errors that can occur when parsing a [`ShopCommand`].
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum CommandError {
    #[error("Unknown command: {0} (type `help` for a list)")]
    Unknown(String),
    #[error("`{0}` needs a plant id, e.g. `{0} p1`")]
    MissingProductId(&'static str),
}

/// A line of shopper input, parsed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ShopCommand {
    /// Go to the landing page.
    Home,
    /// Go to the product list.
    Browse,
    /// Go to the cart page.
    ViewCart,
    /// Set the search text, kept exactly as typed.
    Search(String),
    /// Set the category selector value.
    Category(String),
    /// Put one more of a catalog product in the cart.
    Add(ProductId),
    /// Raise a cart line's quantity by one.
    Increment(ProductId),
    /// Lower a cart line's quantity by one, dropping it at zero.
    Decrement(ProductId),
    /// Drop a cart line whatever its quantity.
    Remove(ProductId),
    /// Hand the cart to the checkout service.
    Checkout,
    /// Show the command list.
    Help,
    /// End the session.
    Quit,
}

impl ShopCommand {
    /// Parse one input line.
    ///
    /// `search` and `category` take the rest of the line verbatim, so
    /// `search  lily ` searches for `" lily "`.
    ///
    /// # Errors
    ///
    /// Returns [`CommandError`] for unknown verbs or missing ids.
    pub fn parse(line: &str) -> Result<Self, CommandError> {
        let line = line.trim_end_matches(['\r', '\n']);
        let trimmed = line.trim_start();
        let (verb, rest) = trimmed.split_once(' ').unwrap_or((trimmed, ""));

        let product_id = |name: &'static str| {
            let id = rest.trim();
            if id.is_empty() {
                Err(CommandError::MissingProductId(name))
            } else {
                Ok(ProductId::new(id))
            }
        };

        match verb.to_ascii_lowercase().as_str() {
            "home" => Ok(Self::Home),
            "browse" | "start" | "products" => Ok(Self::Browse),
            "cart" => Ok(Self::ViewCart),
            "search" => Ok(Self::Search(rest.to_string())),
            "category" => Ok(Self::Category(rest.trim().to_string())),
            "add" => product_id("add").map(Self::Add),
            "inc" | "+" => product_id("inc").map(Self::Increment),
            "dec" | "-" => product_id("dec").map(Self::Decrement),
            "rm" | "remove" => product_id("rm").map(Self::Remove),
            "checkout" => Ok(Self::Checkout),
            "help" | "?" => Ok(Self::Help),
            "quit" | "exit" | "q" => Ok(Self::Quit),
            _ => Err(CommandError::Unknown(verb.to_string())),
        }
    }
}

/// Feedback to show the shopper after a command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Notice {
    Added { name: String, quantity: u32 },
    UnknownProduct(ProductId),
    NotInCart(ProductId),
    CheckedOut(CheckoutAcknowledgment),
    CheckoutFailed(CheckoutError),
    Help,
}

/// The terminal storefront's state.
#[derive(Debug, Clone)]
pub struct ShopSession<'a> {
    catalog: &'a Catalog,
    page: Page,
    query: CatalogQuery,
    cart: Cart,
}

impl<'a> ShopSession<'a> {
    /// A fresh session on the landing page with an empty cart.
    #[must_use]
    pub fn new(catalog: &'a Catalog) -> Self {
        Self {
            catalog,
            page: Page::Landing,
            query: CatalogQuery::default(),
            cart: Cart::new(),
        }
    }

    #[must_use]
    pub const fn catalog(&self) -> &'a Catalog {
        self.catalog
    }

    #[must_use]
    pub const fn page(&self) -> Page {
        self.page
    }

    #[must_use]
    pub const fn query(&self) -> &CatalogQuery {
        &self.query
    }

    #[must_use]
    pub const fn cart(&self) -> &Cart {
        &self.cart
    }

    /// Products visible on the product page under the current query.
    #[must_use]
    pub fn visible_products(&self) -> Vec<&'a Product> {
        self.query.apply(self.catalog)
    }

    /// Apply `command`, returning the next session and any notice.
    ///
    /// [`ShopCommand::Quit`] is left to the caller and returns the session
    /// unchanged.
    #[must_use]
    #[instrument(skip(self, checkout), fields(page = ?self.page))]
    pub fn handle<C>(&self, command: ShopCommand, checkout: &C) -> (Self, Option<Notice>)
    where
        C: CheckoutService + ?Sized,
    {
        match command {
            ShopCommand::Home => (self.on_page(Page::Landing), None),
            ShopCommand::Browse => (self.on_page(Page::Products), None),
            ShopCommand::ViewCart => (self.on_page(Page::Cart), None),
            ShopCommand::Search(text) => {
                let query = self.query.clone().with_text(text);
                (self.with_query(query).on_page(Page::Products), None)
            }
            ShopCommand::Category(label) => {
                let query = self
                    .query
                    .clone()
                    .with_category(CategoryFilter::parse(&label));
                (self.with_query(query).on_page(Page::Products), None)
            }
            ShopCommand::Add(id) => match self.catalog.get(&id) {
                Some(product) => {
                    let cart = self.cart.add_item(product);
                    let quantity = cart.line(&id).map_or(0, |line| line.quantity());
                    let notice = Notice::Added {
                        name: product.name.clone(),
                        quantity,
                    };
                    (self.with_cart(cart), Some(notice))
                }
                None => (self.clone(), Some(Notice::UnknownProduct(id))),
            },
            ShopCommand::Increment(id) => self.cart_edit(&id, Cart::increment),
            ShopCommand::Decrement(id) => self.cart_edit(&id, Cart::decrement),
            ShopCommand::Remove(id) => self.cart_edit(&id, Cart::remove_item),
            ShopCommand::Checkout => {
                let notice = match checkout.checkout(&self.cart) {
                    Ok(ack) => Notice::CheckedOut(ack),
                    Err(e) => Notice::CheckoutFailed(e),
                };
                (self.on_page(Page::Cart), Some(notice))
            }
            ShopCommand::Help => (self.clone(), Some(Notice::Help)),
            ShopCommand::Quit => (self.clone(), None),
        }
    }

    fn cart_edit(
        &self,
        id: &ProductId,
        edit: impl FnOnce(&Cart, &ProductId) -> Cart,
    ) -> (Self, Option<Notice>) {
        let notice = self
            .cart
            .line(id)
            .is_none()
            .then(|| Notice::NotInCart(id.clone()));
        (self.with_cart(edit(&self.cart, id)), notice)
    }

    fn on_page(&self, page: Page) -> Self {
        Self {
            page,
            ..self.clone()
        }
    }

    fn with_query(&self, query: CatalogQuery) -> Self {
        Self {
            query,
            ..self.clone()
        }
    }

    fn with_cart(&self, cart: Cart) -> Self {
        Self {
            cart,
            ..self.clone()
        }
    }
}
