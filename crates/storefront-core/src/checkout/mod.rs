//! Checkout module.
//!
//! Placing an order is a handoff: the storefront computes the cart summary
//! and passes it to whatever executes payment and fulfilment.

mod handoff;

pub use handoff::{LoggingHandoff, OrderHandoff};
