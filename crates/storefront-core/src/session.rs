//! Shopper session state.
//!
//! [`Storefront`] owns the mutable parts of a browsing session (the filter
//! criteria and the cart) and re-derives the visible product list and cart
//! summary from the shared catalog whenever they change. It is what a UI
//! layer drives in response to user actions.

use std::sync::Arc;

use crate::cart::{summarize, AddOutcome, Cart, CartSummary};
use crate::catalog::{Catalog, Category, Color, Product};
use crate::checkout::OrderHandoff;
use crate::error::CommerceError;
use crate::ids::ProductId;
use crate::search::{self, FilterCriteria, PriceRange, Selection};

/// One shopper's view of the catalog.
#[derive(Debug, Clone)]
pub struct Storefront {
    catalog: Arc<Catalog>,
    criteria: FilterCriteria,
    cart: Cart,
    visible: Vec<ProductId>,
    generation: u64,
}

impl Storefront {
    /// Start a session with criteria that show the whole catalog.
    pub fn new(catalog: Arc<Catalog>) -> Self {
        Self::with_criteria(catalog, FilterCriteria::default())
    }

    /// Start a session with the given initial criteria.
    pub fn with_criteria(catalog: Arc<Catalog>, criteria: FilterCriteria) -> Self {
        let mut storefront = Self {
            catalog,
            criteria,
            cart: Cart::new(),
            visible: Vec::new(),
            generation: 0,
        };
        storefront.refilter();
        storefront
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn criteria(&self) -> &FilterCriteria {
        &self.criteria
    }

    pub fn cart(&self) -> &Cart {
        &self.cart
    }

    /// Number of times the visible list has been computed.
    pub fn filter_generation(&self) -> u64 {
        self.generation
    }

    pub fn set_search_text(&mut self, text: impl Into<String>) -> bool {
        let text = text.into();
        self.update_criteria(|c| c.search_text = text)
    }

    pub fn set_category(&mut self, category: impl Into<Selection<Category>>) -> bool {
        let category = category.into();
        self.update_criteria(|c| c.category = category)
    }

    pub fn set_color(&mut self, color: impl Into<Selection<Color>>) -> bool {
        let color = color.into();
        self.update_criteria(|c| c.color = color)
    }

    /// Set the price bounds. An inverted range is kept as given and simply
    /// shows no products.
    pub fn set_price_range(&mut self, min: u64, max: u64) -> bool {
        let range = PriceRange::new(min, max);
        if !range.is_valid() {
            tracing::warn!(min, max, "inverted price range; no products will match");
        }
        self.update_criteria(|c| c.price_range = range)
    }

    /// Replace all criteria at once.
    pub fn set_criteria(&mut self, criteria: FilterCriteria) -> bool {
        self.update_criteria(|c| *c = criteria)
    }

    /// Go back to the unrestricted criteria.
    pub fn reset_filters(&mut self) -> bool {
        self.set_criteria(FilterCriteria::default())
    }

    /// Returns whether the criteria changed; the visible list is only
    /// recomputed when they did.
    fn update_criteria(&mut self, apply: impl FnOnce(&mut FilterCriteria)) -> bool {
        let mut next = self.criteria.clone();
        apply(&mut next);
        if next == self.criteria {
            return false;
        }
        self.criteria = next;
        self.refilter();
        true
    }

    fn refilter(&mut self) {
        self.visible = search::filter(self.catalog.as_ref(), &self.criteria)
            .into_iter()
            .map(|p| p.id)
            .collect();
        self.generation += 1;
        tracing::debug!(
            matched = self.visible.len(),
            total = self.catalog.len(),
            generation = self.generation,
            "filtered catalog"
        );
    }

    /// Products matching the current criteria, in catalog order.
    pub fn filtered(&self) -> Vec<&Product> {
        self.visible
            .iter()
            .filter_map(|id| self.catalog.get(*id))
            .collect()
    }

    /// How many products match the current criteria.
    pub fn result_count(&self) -> usize {
        self.visible.len()
    }

    pub fn add_to_cart(&mut self, product_id: ProductId) -> AddOutcome {
        self.cart.add(&self.catalog, product_id)
    }

    pub fn remove_from_cart(&mut self, product_id: ProductId) -> bool {
        self.cart.remove(product_id)
    }

    pub fn set_quantity(
        &mut self,
        product_id: ProductId,
        quantity: u32,
    ) -> Result<bool, CommerceError> {
        self.cart.set_quantity(&self.catalog, product_id, quantity)
    }

    pub fn clear_cart(&mut self) {
        self.cart.clear();
    }

    /// Current cart lines and totals.
    pub fn summary(&self) -> CartSummary {
        summarize(&self.cart, &self.catalog)
    }

    /// Hand the current cart summary to checkout.
    ///
    /// The cart itself is left as is.
    pub fn place_order(
        &self,
        handoff: &mut dyn OrderHandoff,
    ) -> Result<CartSummary, CommerceError> {
        let summary = self.summary();
        if summary.is_empty() {
            return Err(CommerceError::EmptyCart);
        }
        handoff.submit(&summary)?;
        Ok(summary)
    }
}
