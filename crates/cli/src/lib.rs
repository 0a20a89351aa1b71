//! Paradise Nursery CLI library.
//!
//! The `nursery` binary is a thin wrapper over these modules; they are
//! exposed as a library so integration tests can drive a shopping session
//! without spawning a process.
//!
//! # Modules
//!
//! - [`config`] - Environment configuration
//! - [`catalog_file`] - YAML catalog loading
//! - [`session`] - Page, query and cart state plus command handling
//! - [`render`] - Plain-text page rendering
//! - [`commands`] - Subcommand implementations

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod catalog_file;
pub mod commands;
pub mod config;
pub mod error;
pub mod render;
pub mod session;

pub use config::{LogFormat, NurseryConfig};
pub use error::CliError;
pub use session::{Notice, Page, ShopCommand, ShopSession};
