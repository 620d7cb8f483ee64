//! Product catalog module.
//!
//! Contains product records, the fixed category and colour sets, the
//! immutable catalog store and the providers it is loaded from.

mod category;
mod product;
mod provider;
mod store;

pub use category::{Category, Color};
pub use product::Product;
pub use provider::{CatalogProvider, FileCatalog, StaticCatalog};
pub use store::Catalog;
