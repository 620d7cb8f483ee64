//! Derived-state engine for a storefront browsing surface.
//!
//! This crate holds the logic behind a catalog page and its cart, free of
//! any rendering or persistence:
//!
//! - **Catalog**: Immutable product list, categories, colours, providers
//! - **Search**: Multi-predicate filter criteria and the filter engine
//! - **Cart**: Quantity-aggregated cart entries and computed totals
//! - **Checkout**: Handoff point for placing an order
//! - **Session**: `Storefront`, the state object a UI layer drives
//!
//! # Example
//!
//! ```rust
//! use std::sync::Arc;
//! use storefront_core::prelude::*;
//!
//! let catalog = Arc::new(Catalog::load(&StaticCatalog).unwrap());
//! let mut storefront = Storefront::new(catalog);
//!
//! storefront.set_search_text("serum");
//! assert_eq!(storefront.result_count(), 1);
//!
//! storefront.add_to_cart(ProductId::new(1));
//! storefront.add_to_cart(ProductId::new(1));
//! let summary = storefront.summary();
//! assert_eq!(summary.item_count, 2);
//! assert_eq!(summary.grand_total.display(), "4998 \u{20bd}");
//! ```

pub mod error;
pub mod ids;
pub mod money;

pub mod cart;
pub mod catalog;
pub mod checkout;
pub mod search;
pub mod session;

pub use error::CommerceError;
pub use ids::ProductId;
pub use money::Money;
pub use session::Storefront;

/// Prelude for convenient imports.
pub mod prelude {
    pub use crate::error::CommerceError;
    pub use crate::ids::ProductId;
    pub use crate::money::Money;

    // Catalog
    pub use crate::catalog::{
        Catalog, CatalogProvider, Category, Color, FileCatalog, Product, StaticCatalog,
    };

    // Search
    pub use crate::search::{filter, matches, FilterCriteria, PriceRange, Selection};

    // Cart
    pub use crate::cart::{
        add_to_cart, summarize, AddOutcome, Cart, CartEntry, CartLine, CartSummary,
        MAX_QUANTITY_PER_ITEM,
    };

    // Checkout
    pub use crate::checkout::{LoggingHandoff, OrderHandoff};

    pub use crate::session::Storefront;
}
