//! The catalog store: an immutable, ordered product list loaded once.

use std::collections::HashMap;

use crate::catalog::{CatalogProvider, Category, Color, Product};
use crate::error::CommerceError;
use crate::ids::ProductId;
use crate::money::Money;

/// Immutable ordered sequence of products.
///
/// Construction validates that the list is non-empty, that every id is
/// positive and unique, and that every product has a name. After that the
/// catalog is read-only and can be shared freely (e.g., behind an `Arc`).
#[derive(Debug, Clone, PartialEq)]
pub struct Catalog {
    products: Vec<Product>,
    index: HashMap<ProductId, usize>,
}

impl Catalog {
    /// Build a catalog from products in display order.
    pub fn new(products: Vec<Product>) -> Result<Self, CommerceError> {
        if products.is_empty() {
            return Err(CommerceError::EmptyCatalog);
        }

        let mut index = HashMap::with_capacity(products.len());
        for (position, product) in products.iter().enumerate() {
            if !product.id.is_valid() {
                return Err(CommerceError::InvalidProductId(product.id.get()));
            }
            if product.name.trim().is_empty() {
                return Err(CommerceError::InvalidProduct {
                    id: product.id,
                    reason: "name is empty".to_string(),
                });
            }
            if index.insert(product.id, position).is_some() {
                return Err(CommerceError::DuplicateProductId(product.id));
            }
        }

        tracing::debug!(products = products.len(), "catalog built");
        Ok(Self { products, index })
    }

    /// Load and validate a catalog from a provider.
    pub fn load(provider: &dyn CatalogProvider) -> Result<Self, CommerceError> {
        let products = provider.load()?;
        Self::new(products)
    }

    /// All products, in catalog order.
    pub fn products(&self) -> &[Product] {
        &self.products
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Product> {
        self.products.iter()
    }

    /// Look up a product by id.
    pub fn get(&self, id: ProductId) -> Option<&Product> {
        self.index.get(&id).map(|&position| &self.products[position])
    }

    pub fn contains(&self, id: ProductId) -> bool {
        self.index.contains_key(&id)
    }

    pub fn len(&self) -> usize {
        self.products.len()
    }

    /// Always false for a validated catalog.
    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }

    /// Categories present in the catalog, in first-seen order.
    pub fn categories(&self) -> Vec<Category> {
        let mut seen = Vec::new();
        for product in &self.products {
            if !seen.contains(&product.category) {
                seen.push(product.category);
            }
        }
        seen
    }

    /// Colours present in the catalog, in first-seen order.
    pub fn colors(&self) -> Vec<Color> {
        let mut seen = Vec::new();
        for product in &self.products {
            if !seen.contains(&product.color) {
                seen.push(product.color);
            }
        }
        seen
    }

    /// Highest price in the catalog.
    pub fn max_price(&self) -> Money {
        self.products
            .iter()
            .map(|p| p.price)
            .max()
            .unwrap_or(Money::ZERO)
    }
}

impl<'a> IntoIterator for &'a Catalog {
    type Item = &'a Product;
    type IntoIter = std::slice::Iter<'a, Product>;

    fn into_iter(self) -> Self::IntoIter {
        self.products.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::StaticCatalog;

    fn product(id: u32, name: &str) -> Product {
        Product::new(id, name, 100, Category::Shoes, Color::Blue, "42")
    }

    #[test]
    fn test_catalog_lookup() {
        let catalog = Catalog::load(&StaticCatalog).unwrap();
        assert_eq!(catalog.len(), 6);
        assert_eq!(catalog.get(ProductId::new(3)).unwrap().name, "Sport Sneakers Limited");
        assert!(catalog.get(ProductId::new(99)).is_none());
        assert!(catalog.contains(ProductId::new(6)));
    }

    #[test]
    fn test_empty_catalog_rejected() {
        assert!(matches!(Catalog::new(vec![]), Err(CommerceError::EmptyCatalog)));
    }

    #[test]
    fn test_duplicate_id_rejected() {
        let result = Catalog::new(vec![product(1, "A"), product(2, "B"), product(1, "C")]);
        assert!(matches!(
            result,
            Err(CommerceError::DuplicateProductId(id)) if id == ProductId::new(1)
        ));
    }

    #[test]
    fn test_zero_id_rejected() {
        let result = Catalog::new(vec![product(0, "A")]);
        assert!(matches!(result, Err(CommerceError::InvalidProductId(0))));
    }

    #[test]
    fn test_blank_name_rejected() {
        let result = Catalog::new(vec![product(1, "  ")]);
        assert!(matches!(result, Err(CommerceError::InvalidProduct { .. })));
    }

    #[test]
    fn test_facets_in_first_seen_order() {
        let catalog = Catalog::load(&StaticCatalog).unwrap();
        assert_eq!(
            catalog.categories(),
            vec![Category::Cosmetics, Category::Electronics, Category::Shoes]
        );
        assert_eq!(
            catalog.colors(),
            vec![
                Color::Purple,
                Color::Orange,
                Color::Pink,
                Color::White,
                Color::Black,
                Color::Blue
            ]
        );
        assert_eq!(catalog.max_price(), Money::new(12999));
    }
}
