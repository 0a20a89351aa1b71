//! Core types for Paradise Nursery.
//!
//! This module provides type-safe wrappers for common domain concepts.

pub mod category;
pub mod id;
pub mod image;
pub mod price;

pub use category::{Category, CategoryFilter, UnknownCategory};
pub use id::*;
pub use image::ImageRef;
pub use price::{Price, PriceError};
