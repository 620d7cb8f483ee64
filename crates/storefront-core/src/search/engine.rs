//! The filter engine.
//!
//! A product is kept when every predicate holds: the name contains the
//! search text (ignoring case), the category and colour selections accept
//! it, and its price lies inside the closed price range. Stock is not a
//! predicate; unavailable products stay visible.

use crate::catalog::Product;
use crate::search::FilterCriteria;

/// Criteria with the search text lowered once per filter pass.
struct Predicate<'c> {
    criteria: &'c FilterCriteria,
    needle: String,
}

impl<'c> Predicate<'c> {
    fn new(criteria: &'c FilterCriteria) -> Self {
        Self {
            criteria,
            needle: criteria.search_text.to_lowercase(),
        }
    }

    fn test(&self, product: &Product) -> bool {
        let name_matches =
            self.needle.is_empty() || product.name.to_lowercase().contains(&self.needle);

        name_matches
            && self.criteria.category.accepts(&product.category)
            && self.criteria.price_range.contains(product.price)
            && self.criteria.color.accepts(&product.color)
    }
}

/// Check a single product against the criteria.
pub fn matches(product: &Product, criteria: &FilterCriteria) -> bool {
    Predicate::new(criteria).test(product)
}

/// Narrow a product sequence by the criteria, keeping the input order.
///
/// Returns an empty vector when nothing matches, including when the price
/// range is inverted.
pub fn filter<'a, I>(products: I, criteria: &FilterCriteria) -> Vec<&'a Product>
where
    I: IntoIterator<Item = &'a Product>,
{
    let predicate = Predicate::new(criteria);
    products.into_iter().filter(|p| predicate.test(p)).collect()
}
