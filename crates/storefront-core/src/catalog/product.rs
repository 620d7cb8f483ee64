//! Product records.

use crate::catalog::{Category, Color};
use crate::ids::ProductId;
use crate::money::Money;
use serde::{Deserialize, Serialize};

/// A product in the catalog.
///
/// Products are immutable once the catalog is built; identity is `id`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Product {
    /// Unique product identifier.
    pub id: ProductId,
    /// Product name.
    pub name: String,
    /// Price in minor units.
    pub price: Money,
    pub category: Category,
    pub color: Color,
    /// Free-form size label (e.g., "50мл", "42", "Universal").
    pub size: String,
    /// Whether the product can be added to a cart.
    #[serde(rename = "in_stock", alias = "inStock")]
    pub in_stock: bool,
    /// Image URL for listings.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
}

impl Product {
    /// Create a new in-stock product without an image.
    pub fn new(
        id: u32,
        name: impl Into<String>,
        price: u64,
        category: Category,
        color: Color,
        size: impl Into<String>,
    ) -> Self {
        Self {
            id: ProductId::new(id),
            name: name.into(),
            price: Money::new(price),
            category,
            color,
            size: size.into(),
            in_stock: true,
            image: None,
        }
    }

    /// Mark the product as out of stock.
    pub fn out_of_stock(mut self) -> Self {
        self.in_stock = false;
        self
    }

    /// Set the listing image.
    pub fn with_image(mut self, url: impl Into<String>) -> Self {
        self.image = Some(url.into());
        self
    }

    /// Check if the product is available for purchase.
    pub fn is_available(&self) -> bool {
        self.in_stock
    }
}
