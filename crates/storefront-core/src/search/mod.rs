//! Search module.
//!
//! Contains the filter criteria types and the engine that applies them.

mod engine;
mod filter;

pub use engine::{filter, matches};
pub use filter::{FilterCriteria, PriceRange, Selection, ALL_LABEL};
