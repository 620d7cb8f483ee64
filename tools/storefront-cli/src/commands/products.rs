//! Catalog listing command.

use anyhow::Result;
use storefront_core::catalog::{Category, Color};
use storefront_core::search::Selection;
use storefront_core::Storefront;

use super::ProductsArgs;
use crate::context::Context;

/// Run the products command.
pub fn run(args: ProductsArgs, ctx: &Context) -> Result<()> {
    let mut storefront = ctx.storefront()?;
    apply_filters(args, &mut storefront)?;

    let range = storefront.criteria().price_range;
    if !range.is_valid() {
        ctx.output.warn(&format!("Price range {} is empty", range));
    }

    ctx.output.debug(&format!("criteria: {:?}", storefront.criteria()));
    ctx.output.products(&storefront.filtered());
    Ok(())
}

/// Narrow the session's criteria by the given flags. Price bounds are used
/// exactly as typed; an omitted bound keeps the configured one.
pub fn apply_filters(args: ProductsArgs, storefront: &mut Storefront) -> Result<()> {
    if let Some(search) = args.search {
        storefront.set_search_text(search);
    }
    if let Some(category) = args.category.as_deref() {
        storefront.set_category(category.parse::<Selection<Category>>()?);
    }
    if let Some(color) = args.color.as_deref() {
        storefront.set_color(color.parse::<Selection<Color>>()?);
    }
    if args.min.is_some() || args.max.is_some() {
        let current = storefront.criteria().price_range;
        let min = args.min.unwrap_or(current.min.amount());
        let max = args.max.unwrap_or(current.max.amount());
        storefront.set_price_range(min, max);
    }
    Ok(())
}
