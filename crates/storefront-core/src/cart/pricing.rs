//! Cart summary calculations.

use crate::cart::Cart;
use crate::catalog::{Catalog, Product};
use crate::ids::ProductId;
use crate::money::Money;
use serde::{Deserialize, Serialize};

/// Totals for a cart, resolved against a catalog.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
pub struct CartSummary {
    /// One line per resolvable entry, in cart order.
    pub lines: Vec<CartLine>,
    /// Sum of quantities over all entries; drives the cart badge.
    pub item_count: u64,
    /// Sum of line totals.
    pub grand_total: Money,
}

impl CartSummary {
    /// Check if there is nothing to show.
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Number of distinct products with a line.
    pub fn unique_items(&self) -> usize {
        self.lines.len()
    }
}

/// Pricing breakdown for a single cart entry.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct CartLine {
    /// Product snapshot at summary time.
    pub product: Product,
    pub quantity: u32,
    /// `product.price * quantity`.
    pub line_total: Money,
}

impl CartLine {
    pub fn product_id(&self) -> ProductId {
        self.product.id
    }
}

/// Resolve a cart against the catalog and compute its totals.
///
/// Entries whose product no longer resolves are left out of `lines` and
/// `grand_total` but still count towards `item_count`.
pub fn summarize(cart: &Cart, catalog: &Catalog) -> CartSummary {
    let mut lines = Vec::with_capacity(cart.unique_item_count());

    for entry in cart.entries() {
        match catalog.get(entry.product_id) {
            Some(product) => lines.push(CartLine {
                product: product.clone(),
                quantity: entry.quantity,
                line_total: product.price.times(entry.quantity),
            }),
            None => {
                tracing::warn!(product_id = %entry.product_id, "dropping orphaned cart entry");
            }
        }
    }

    let grand_total = Money::sum(lines.iter().map(|l| l.line_total));

    CartSummary {
        lines,
        item_count: cart.item_count(),
        grand_total,
    }
}
