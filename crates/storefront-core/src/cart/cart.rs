//! Cart and cart entry types.

use crate::catalog::Catalog;
use crate::error::CommerceError;
use crate::ids::ProductId;
use serde::{Deserialize, Serialize};

/// Maximum quantity allowed per cart entry.
pub const MAX_QUANTITY_PER_ITEM: u32 = 9999;

/// Accumulated intent to purchase one product.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub struct CartEntry {
    pub product_id: ProductId,
    /// Always at least 1.
    pub quantity: u32,
}

impl CartEntry {
    pub fn new(product_id: ProductId, quantity: u32) -> Self {
        Self {
            product_id,
            quantity,
        }
    }
}

/// What an add-to-cart request did.
///
/// Only `Added` and `Incremented` change the cart. The other outcomes are
/// silent no-ops, reported so callers can log or ignore them.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AddOutcome {
    /// A new entry with quantity 1 was appended.
    Added,
    /// An existing entry's quantity went up by one.
    Incremented { quantity: u32 },
    /// The id does not resolve in the catalog.
    UnknownProduct,
    /// The product exists but is not in stock.
    OutOfStock,
    /// The entry is already at [`MAX_QUANTITY_PER_ITEM`].
    AtLimit,
}

impl AddOutcome {
    /// Whether the cart changed.
    pub fn is_applied(&self) -> bool {
        matches!(self, AddOutcome::Added | AddOutcome::Incremented { .. })
    }
}

/// A shopping cart: at most one entry per product, in first-added order.
///
/// Serialized as a plain list of entries. Deserializing goes through
/// [`FromIterator`], so duplicates are merged and zero quantities dropped.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(from = "Vec<CartEntry>", into = "Vec<CartEntry>")]
pub struct Cart {
    entries: Vec<CartEntry>,
}

impl Cart {
    /// Create an empty cart.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add one unit of a product.
    ///
    /// Unknown and out-of-stock products leave the cart untouched, so an
    /// unavailable product can never be represented in cart state.
    pub fn add(&mut self, catalog: &Catalog, product_id: ProductId) -> AddOutcome {
        let outcome = self.try_add(catalog, product_id);
        if outcome.is_applied() {
            tracing::debug!(product_id = %product_id, ?outcome, "cart updated");
        } else {
            tracing::debug!(product_id = %product_id, ?outcome, "add to cart ignored");
        }
        outcome
    }

    fn try_add(&mut self, catalog: &Catalog, product_id: ProductId) -> AddOutcome {
        match catalog.get(product_id) {
            None => return AddOutcome::UnknownProduct,
            Some(product) if !product.in_stock => return AddOutcome::OutOfStock,
            Some(_) => {}
        }

        // Check if item already exists
        if let Some(existing) = self.entries.iter_mut().find(|e| e.product_id == product_id) {
            if existing.quantity >= MAX_QUANTITY_PER_ITEM {
                return AddOutcome::AtLimit;
            }
            existing.quantity += 1;
            return AddOutcome::Incremented {
                quantity: existing.quantity,
            };
        }

        self.entries.push(CartEntry::new(product_id, 1));
        AddOutcome::Added
    }

    /// Set the quantity of a product.
    ///
    /// A quantity of 0 removes the entry. A product not yet in the cart is
    /// appended, subject to the same stock guard as [`Cart::add`].
    /// Returns whether the cart changed.
    pub fn set_quantity(
        &mut self,
        catalog: &Catalog,
        product_id: ProductId,
        quantity: u32,
    ) -> Result<bool, CommerceError> {
        if quantity == 0 {
            return Ok(self.remove(product_id));
        }

        if quantity > MAX_QUANTITY_PER_ITEM {
            return Err(CommerceError::QuantityExceedsLimit(
                quantity,
                MAX_QUANTITY_PER_ITEM,
            ));
        }

        if let Some(entry) = self.entries.iter_mut().find(|e| e.product_id == product_id) {
            let changed = entry.quantity != quantity;
            entry.quantity = quantity;
            return Ok(changed);
        }

        let product = catalog
            .get(product_id)
            .ok_or(CommerceError::ProductNotFound(product_id))?;
        if !product.in_stock {
            return Err(CommerceError::OutOfStock(product_id));
        }

        self.entries.push(CartEntry::new(product_id, quantity));
        Ok(true)
    }

    /// Remove a product's entry. Returns whether one was present.
    pub fn remove(&mut self, product_id: ProductId) -> bool {
        let len_before = self.entries.len();
        self.entries.retain(|e| e.product_id != product_id);
        self.entries.len() < len_before
    }

    /// Clear all entries.
    pub fn clear(&mut self) {
        self.entries.clear();
    }

    /// Entries in first-added order.
    pub fn entries(&self) -> &[CartEntry] {
        &self.entries
    }

    /// Get the entry for a product.
    pub fn get(&self, product_id: ProductId) -> Option<&CartEntry> {
        self.entries.iter().find(|e| e.product_id == product_id)
    }

    /// Quantity held for a product (0 when absent).
    pub fn quantity_of(&self, product_id: ProductId) -> u32 {
        self.get(product_id).map(|e| e.quantity).unwrap_or(0)
    }

    /// Get total item count (sum of quantities).
    pub fn item_count(&self) -> u64 {
        self.entries.iter().map(|e| u64::from(e.quantity)).sum()
    }

    /// Get number of distinct products.
    pub fn unique_item_count(&self) -> usize {
        self.entries.len()
    }

    /// Check if cart is empty.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl FromIterator<CartEntry> for Cart {
    /// Collect entries, merging repeated products into the first occurrence.
    ///
    /// Zero quantities are dropped. No catalog check is made, so the result
    /// may hold orphans; [`summarize`](crate::cart::summarize) skips those.
    fn from_iter<I: IntoIterator<Item = CartEntry>>(iter: I) -> Self {
        let mut cart = Cart::new();
        for entry in iter.into_iter().filter(|e| e.quantity > 0) {
            match cart.entries.iter_mut().find(|e| e.product_id == entry.product_id) {
                Some(existing) => {
                    existing.quantity = existing
                        .quantity
                        .saturating_add(entry.quantity)
                        .min(MAX_QUANTITY_PER_ITEM);
                }
                None => cart.entries.push(CartEntry {
                    quantity: entry.quantity.min(MAX_QUANTITY_PER_ITEM),
                    ..entry
                }),
            }
        }
        cart
    }
}

impl From<Vec<CartEntry>> for Cart {
    fn from(entries: Vec<CartEntry>) -> Self {
        entries.into_iter().collect()
    }
}

impl From<Cart> for Vec<CartEntry> {
    fn from(cart: Cart) -> Self {
        cart.entries
    }
}

/// Pure form of [`Cart::add`]: returns the cart that results from adding
/// one unit of `product_id`, leaving the input untouched.
pub fn add_to_cart(cart: &Cart, catalog: &Catalog, product_id: ProductId) -> Cart {
    let mut next = cart.clone();
    next.add(catalog, product_id);
    next
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::StaticCatalog;

    fn catalog() -> Catalog {
        Catalog::load(&StaticCatalog).unwrap()
    }

    const SERUM: ProductId = ProductId::new(1);
    const HEADPHONES: ProductId = ProductId::new(2);
    const FACE_CREAM: ProductId = ProductId::new(4);

    #[test]
    fn test_cart_creation() {
        let cart = Cart::new();
        assert!(cart.is_empty());
        assert_eq!(cart.item_count(), 0);
    }

    #[test]
    fn test_add_item() {
        let catalog = catalog();
        let mut cart = Cart::new();
        assert_eq!(cart.add(&catalog, SERUM), AddOutcome::Added);
        assert_eq!(cart.entries(), &[CartEntry::new(SERUM, 1)]);
    }

    #[test]
    fn test_add_same_item_increases_quantity() {
        let catalog = catalog();
        let mut cart = Cart::new();
        cart.add(&catalog, SERUM);
        assert_eq!(
            cart.add(&catalog, SERUM),
            AddOutcome::Incremented { quantity: 2 }
        );
        assert_eq!(cart.unique_item_count(), 1);
        assert_eq!(cart.item_count(), 2);
    }

    #[test]
    fn test_insertion_order_preserved() {
        let catalog = catalog();
        let mut cart = Cart::new();
        cart.add(&catalog, HEADPHONES);
        cart.add(&catalog, SERUM);
        cart.add(&catalog, HEADPHONES);

        let order: Vec<_> = cart.entries().iter().map(|e| e.product_id).collect();
        assert_eq!(order, vec![HEADPHONES, SERUM]);
        assert_eq!(cart.quantity_of(HEADPHONES), 2);
    }

    #[test]
    fn test_out_of_stock_ignored() {
        let catalog = catalog();
        let mut cart = Cart::new();
        assert_eq!(cart.add(&catalog, FACE_CREAM), AddOutcome::OutOfStock);
        assert!(cart.is_empty());
    }

    #[test]
    fn test_unknown_product_ignored() {
        let catalog = catalog();
        let mut cart = Cart::new();
        cart.add(&catalog, SERUM);
        assert_eq!(
            cart.add(&catalog, ProductId::new(404)),
            AddOutcome::UnknownProduct
        );
        assert_eq!(cart.entries(), &[CartEntry::new(SERUM, 1)]);
    }

    #[test]
    fn test_quantity_limit() {
        let catalog = catalog();
        let mut cart = Cart::new();
        cart.set_quantity(&catalog, SERUM, MAX_QUANTITY_PER_ITEM).unwrap();
        assert_eq!(cart.add(&catalog, SERUM), AddOutcome::AtLimit);
        assert_eq!(cart.quantity_of(SERUM), MAX_QUANTITY_PER_ITEM);

        let result = cart.set_quantity(&catalog, SERUM, MAX_QUANTITY_PER_ITEM + 1);
        assert!(matches!(result, Err(CommerceError::QuantityExceedsLimit(..))));
    }

    #[test]
    fn test_set_quantity() {
        let catalog = catalog();
        let mut cart = Cart::new();
        cart.add(&catalog, SERUM);

        assert!(cart.set_quantity(&catalog, SERUM, 5).unwrap());
        assert!(!cart.set_quantity(&catalog, SERUM, 5).unwrap());
        assert_eq!(cart.item_count(), 5);

        assert!(cart.set_quantity(&catalog, SERUM, 0).unwrap());
        assert!(cart.is_empty());
    }

    #[test]
    fn test_set_quantity_new_entry_respects_stock() {
        let catalog = catalog();
        let mut cart = Cart::new();

        assert!(cart.set_quantity(&catalog, HEADPHONES, 3).unwrap());
        assert!(matches!(
            cart.set_quantity(&catalog, FACE_CREAM, 1),
            Err(CommerceError::OutOfStock(_))
        ));
        assert!(matches!(
            cart.set_quantity(&catalog, ProductId::new(77), 1),
            Err(CommerceError::ProductNotFound(_))
        ));
        assert_eq!(cart.entries(), &[CartEntry::new(HEADPHONES, 3)]);
    }

    #[test]
    fn test_remove_item() {
        let catalog = catalog();
        let mut cart = Cart::new();
        cart.add(&catalog, SERUM);

        assert!(cart.remove(SERUM));
        assert!(!cart.remove(SERUM));
        assert!(cart.is_empty());
    }

    #[test]
    fn test_clear() {
        let catalog = catalog();
        let mut cart = Cart::new();
        cart.add(&catalog, SERUM);
        cart.add(&catalog, HEADPHONES);
        cart.clear();
        assert!(cart.is_empty());
    }

    #[test]
    fn test_pure_add_leaves_input() {
        let catalog = catalog();
        let empty = Cart::new();
        let next = add_to_cart(&empty, &catalog, SERUM);
        assert!(empty.is_empty());
        assert_eq!(next.quantity_of(SERUM), 1);
    }

    #[test]
    fn test_from_iter_merges_duplicates() {
        let cart: Cart = vec![
            CartEntry::new(SERUM, 1),
            CartEntry::new(HEADPHONES, 0),
            CartEntry::new(ProductId::new(9), 2),
            CartEntry::new(SERUM, 3),
        ]
        .into_iter()
        .collect();

        assert_eq!(
            cart.entries(),
            &[CartEntry::new(SERUM, 4), CartEntry::new(ProductId::new(9), 2)]
        );
    }

    #[test]
    fn test_deserialize_merges_entries() {
        let json = r#"[
            {"product_id": 1, "quantity": 2},
            {"product_id": 2, "quantity": 0},
            {"product_id": 1, "quantity": 3}
        ]"#;
        let cart: Cart = serde_json::from_str(json).unwrap();
        assert_eq!(cart.entries(), &[CartEntry::new(SERUM, 5)]);

        let round_trip = serde_json::to_string(&cart).unwrap();
        assert_eq!(round_trip, r#"[{"product_id":1,"quantity":5}]"#);
    }
}
