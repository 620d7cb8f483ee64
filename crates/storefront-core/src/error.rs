//! Storefront error types.

use thiserror::Error;

use crate::ids::ProductId;

/// Errors that can occur while building a catalog or editing a cart.
///
/// The filter engine and the cart summary never produce these; they are
/// reserved for catalog loading, input parsing and the explicit cart
/// editing operations.
#[derive(Error, Debug)]
pub enum CommerceError {
    /// The catalog provider returned no products.
    #[error("Catalog is empty")]
    EmptyCatalog,

    /// Two products share an id.
    #[error("Duplicate product id in catalog: {0}")]
    DuplicateProductId(ProductId),

    /// Product ids must be positive.
    #[error("Invalid product id: {0}")]
    InvalidProductId(u32),

    /// A product record failed validation.
    #[error("Invalid product {id}: {reason}")]
    InvalidProduct { id: ProductId, reason: String },

    /// Product not found.
    #[error("Product not found: {0}")]
    ProductNotFound(ProductId),

    /// Product is not available for purchase.
    #[error("Product is out of stock: {0}")]
    OutOfStock(ProductId),

    /// Quantity exceeds maximum allowed.
    #[error("Quantity {0} exceeds maximum allowed ({1})")]
    QuantityExceedsLimit(u32, u32),

    /// Category label not recognised.
    #[error("Unknown category: {0}")]
    UnknownCategory(String),

    /// Colour label not recognised.
    #[error("Unknown color: {0}")]
    UnknownColor(String),

    /// Checkout attempted with nothing in the cart.
    #[error("Cart is empty")]
    EmptyCart,

    /// I/O error while reading a catalog source.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialization error.
    #[error("Serialization error: {0}")]
    SerializationError(String),
}

impl From<serde_json::Error> for CommerceError {
    fn from(e: serde_json::Error) -> Self {
        CommerceError::SerializationError(e.to_string())
    }
}

impl From<toml::de::Error> for CommerceError {
    fn from(e: toml::de::Error) -> Self {
        CommerceError::SerializationError(e.to_string())
    }
}
