//! Paradise Nursery Core - catalog filtering and cart state.
//!
//! This crate holds the logic shared by every Paradise Nursery front end:
//! - `cli` - Terminal storefront for browsing plants and managing a cart
//!
//! # Architecture
//!
//! The core crate contains only types and pure functions - no I/O, no global
//! state. The cart is an owned value: each mutation takes a snapshot and
//! returns the next one, and totals are always recomputed from the lines.
//!
//! # Modules
//!
//! - [`types`] - Newtype wrappers for ids, prices, categories and images
//! - [`catalog`] - Products and the validated, ordered catalog
//! - [`filter`] - Search-and-category filtering over the catalog
//! - [`cart`] - Cart lines, mutations and derived totals
//! - [`summary`] - Order summary derived from a cart
//! - [`checkout`] - The checkout collaborator interface

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod cart;
pub mod catalog;
pub mod checkout;
pub mod filter;
pub mod summary;
pub mod types;

pub use cart::{Cart, CartAction, CartLine};
pub use catalog::{Catalog, CatalogError, Product};
pub use checkout::{CheckoutAcknowledgment, CheckoutError, CheckoutService, DemoCheckout};
pub use filter::{CatalogQuery, filter};
pub use summary::{OrderSummary, Shipping};
pub use types::*;
