//! CLI command implementations.

pub mod cart;
pub mod facets;
pub mod products;
pub mod shell;

use clap::Args;
use storefront_core::ProductId;

/// Arguments for the products command.
#[derive(Args, Default)]
pub struct ProductsArgs {
    /// Case-insensitive name search.
    #[arg(short, long)]
    pub search: Option<String>,

    /// Category label or name ("all" for every category).
    #[arg(long)]
    pub category: Option<String>,

    /// Colour label or name ("all" for every colour).
    #[arg(long)]
    pub color: Option<String>,

    /// Lowest price (inclusive).
    #[arg(long)]
    pub min: Option<u64>,

    /// Highest price (inclusive).
    #[arg(long)]
    pub max: Option<u64>,
}

/// Arguments for the cart command.
#[derive(Args)]
pub struct CartArgs {
    /// Product ids to add, one unit per occurrence.
    #[arg(required = true)]
    pub ids: Vec<ProductId>,

    /// Hand the resulting cart to checkout.
    #[arg(long)]
    pub checkout: bool,
}
