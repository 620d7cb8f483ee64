//! Shopping cart module.
//!
//! Contains the cart, its entries and the summary calculation.

mod cart;
mod pricing;

pub use cart::{add_to_cart, AddOutcome, Cart, CartEntry, MAX_QUANTITY_PER_ITEM};
pub use pricing::{summarize, CartLine, CartSummary};
