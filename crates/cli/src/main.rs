//! Paradise Nursery CLI - browse plants and fill a cart from the terminal.
//!
//! # Usage
//!
//! ```bash
//! # Interactive shop (landing page, product list, cart, checkout)
//! nursery shop
//!
//! # List plants matching a search, optionally within one category
//! nursery catalog --query fig
//! nursery catalog --category "Low Light" --json
//!
//! # Show the category selector options
//! nursery categories
//!
//! # Shop from a custom catalog
//! nursery --catalog plants.yaml shop
//! ```

#![cfg_attr(not(test), forbid(unsafe_code))]

use std::io;
use std::path::PathBuf;

use chrono::Datelike;
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use paradise_nursery_cli::catalog_file::resolve_catalog;
use paradise_nursery_cli::commands;
use paradise_nursery_cli::{CliError, LogFormat, NurseryConfig};
use paradise_nursery_core::DemoCheckout;

#[derive(Parser)]
#[command(name = "nursery")]
#[command(author, version, about = "Paradise Nursery terminal storefront")]
struct Cli {
    /// YAML catalog to use instead of the house plants (overrides `NURSERY_CATALOG`)
    #[arg(long, global = true)]
    catalog: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Start an interactive shopping session
    Shop,
    /// List plants matching a search and category
    Catalog {
        /// Case-insensitive name search (matched as typed, not trimmed)
        #[arg(short, long, default_value = "")]
        query: String,

        /// Category label, or `All`
        #[arg(short, long, default_value = "All")]
        category: String,

        /// Print JSON instead of text
        #[arg(long)]
        json: bool,
    },
    /// List category selector options
    Categories,
}

/// Install the tracing subscriber. Logs go to stderr so they never mix with
/// rendered pages on stdout.
fn init_tracing(format: LogFormat) {
    // Defaults to info level for our crates if RUST_LOG is not set
    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| "paradise_nursery_cli=info,paradise_nursery_core=info".into());

    let builder = tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(io::stderr);

    match format {
        LogFormat::Text => builder.init(),
        LogFormat::Json => builder.json().init(),
    }
}

fn main() {
    let cli = Cli::parse();

    let config = match NurseryConfig::from_env() {
        Ok(config) => config.with_catalog_path(cli.catalog.clone()),
        Err(e) => {
            init_tracing(LogFormat::default());
            tracing::error!("Failed to load configuration: {e}");
            std::process::exit(2);
        }
    };

    init_tracing(config.log_format);

    if let Err(e) = run(cli, &config) {
        tracing::error!("Command failed: {e}");
        std::process::exit(1);
    }
}

fn run(cli: Cli, config: &NurseryConfig) -> Result<(), CliError> {
    let catalog = resolve_catalog(config.catalog_path.as_deref())?;
    let stdout = io::stdout();
    let mut out = stdout.lock();

    match cli.command {
        Commands::Shop => {
            let year = chrono::Local::now().year();
            let stdin = io::stdin();
            commands::shop::run(&catalog, &DemoCheckout, stdin.lock(), &mut out, year)?;
        }
        Commands::Catalog {
            query,
            category,
            json,
        } => commands::catalog::list(&catalog, &query, &category, json, &mut out)?,
        Commands::Categories => commands::catalog::categories(&catalog, &mut out)?,
    }
    Ok(())
}
