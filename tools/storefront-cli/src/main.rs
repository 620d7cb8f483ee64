//! Storefront CLI - browse a catalog and build a cart from the terminal.
//!
//! Commands:
//! - `storefront products` - List products matching filters
//! - `storefront cart` - Add products to a cart and show the totals
//! - `storefront facets` - List categories and colours
//! - `storefront shell` - Interactive browsing session
//! - `storefront init` - Write a default config file

mod commands;
mod config;
mod context;
mod logging;
mod output;

use anyhow::{bail, Context as _, Result};
use clap::{Parser, Subcommand};

use commands::{CartArgs, ProductsArgs};

/// Storefront CLI - Browse the catalog and build a cart
#[derive(Parser)]
#[command(name = "storefront")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Use JSON output format
    #[arg(long, global = true)]
    json: bool,

    /// Config file path
    #[arg(short, long, global = true)]
    config: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List products matching the given filters
    Products(ProductsArgs),

    /// Add products to a cart and print its summary
    Cart(CartArgs),

    /// List filterable categories and colours
    Facets,

    /// Browse interactively
    Shell,

    /// Write a default storefront.toml in the current directory
    Init {
        /// Overwrite an existing file
        #[arg(short, long)]
        force: bool,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Setup output formatting
    let output = output::Output::new(cli.verbose, cli.json);

    // Load config
    let config_path = cli.config.as_deref();
    let ctx = context::Context::load(config_path, output)?;

    logging::init(ctx.config.logging.format, cli.verbose);
    if let Some(path) = &ctx.config_path {
        tracing::debug!(path = %path.display(), "using config");
    }

    // Execute command
    let result = match cli.command {
        Commands::Products(args) => commands::products::run(args, &ctx),
        Commands::Cart(args) => commands::cart::run(args, &ctx),
        Commands::Facets => commands::facets::run(&ctx),
        Commands::Shell => commands::shell::run(&ctx),
        Commands::Init { force } => write_default_config(force, &ctx),
    };

    if let Err(e) = result {
        ctx.output.error(&format!("{:#}", e));
        std::process::exit(1);
    }

    Ok(())
}

fn write_default_config(force: bool, ctx: &context::Context) -> Result<()> {
    let path = std::path::Path::new("storefront.toml");
    if path.exists() && !force {
        bail!("storefront.toml already exists (use --force to overwrite)");
    }
    std::fs::write(path, config::generate_default_config())
        .context("Failed to write storefront.toml")?;
    ctx.output.success("Created storefront.toml");
    Ok(())
}
