//! Builds a cart from product ids and prints its summary.

use anyhow::Result;
use storefront_core::cart::AddOutcome;
use storefront_core::checkout::LoggingHandoff;
use storefront_core::ProductId;

use super::CartArgs;
use crate::context::Context;
use crate::output::Output;

/// Run the cart command.
pub fn run(args: CartArgs, ctx: &Context) -> Result<()> {
    let mut storefront = ctx.storefront()?;

    for id in args.ids {
        let outcome = storefront.add_to_cart(id);
        report_add(&ctx.output, id, outcome);
    }

    ctx.output.summary(&storefront.summary());

    if args.checkout {
        let mut handoff = LoggingHandoff::new();
        let summary = storefront.place_order(&mut handoff)?;
        ctx.output
            .success(&format!("Order placed: {}", summary.grand_total));
    }
    Ok(())
}

/// Explain ignored adds; successful ones are only logged in verbose mode.
pub fn report_add(output: &Output, id: ProductId, outcome: AddOutcome) {
    match outcome {
        AddOutcome::Added | AddOutcome::Incremented { .. } => {
            output.debug(&format!("added product {}", id));
        }
        AddOutcome::UnknownProduct => output.warn(&format!("No product with id {}", id)),
        AddOutcome::OutOfStock => output.warn(&format!("Product {} is out of stock", id)),
        AddOutcome::AtLimit => output.warn(&format!("Product {} is at the quantity limit", id)),
    }
}
