//! Filter criteria types.

use std::fmt;
use std::str::FromStr;

use crate::catalog::{Category, Color};
use crate::error::CommerceError;
use crate::money::Money;
use serde::{Deserialize, Serialize};

/// Label the storefront shows for "no restriction".
pub const ALL_LABEL: &str = "Все";

/// A single-value facet selection: everything, or exactly one value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Selection<T> {
    /// No restriction.
    All,
    /// Only products carrying this value.
    Only(T),
}

impl<T: PartialEq> Selection<T> {
    /// Check whether a product value passes this selection.
    pub fn accepts(&self, value: &T) -> bool {
        match self {
            Selection::All => true,
            Selection::Only(wanted) => wanted == value,
        }
    }

    pub fn is_all(&self) -> bool {
        matches!(self, Selection::All)
    }
}

impl<T> Default for Selection<T> {
    fn default() -> Self {
        Selection::All
    }
}

impl<T> From<T> for Selection<T> {
    fn from(value: T) -> Self {
        Selection::Only(value)
    }
}

impl<T> FromStr for Selection<T>
where
    T: FromStr<Err = CommerceError>,
{
    type Err = CommerceError;

    /// `"all"` and `"Все"` select everything; anything else must name a value.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        if trimmed.eq_ignore_ascii_case("all") || trimmed.to_lowercase() == ALL_LABEL.to_lowercase()
        {
            return Ok(Selection::All);
        }
        trimmed.parse().map(Selection::Only)
    }
}

impl<T: fmt::Display> fmt::Display for Selection<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Selection::All => f.write_str(ALL_LABEL),
            Selection::Only(value) => value.fmt(f),
        }
    }
}

/// Closed price interval `[min, max]`.
///
/// `min > max` is representable; such a range matches nothing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PriceRange {
    pub min: Money,
    pub max: Money,
}

impl PriceRange {
    /// Create a range from minor-unit amounts.
    pub fn new(min: u64, max: u64) -> Self {
        Self {
            min: Money::new(min),
            max: Money::new(max),
        }
    }

    /// Whether the interval is non-empty.
    pub fn is_valid(&self) -> bool {
        self.min <= self.max
    }

    /// Inclusive on both ends.
    pub fn contains(&self, price: Money) -> bool {
        price >= self.min && price <= self.max
    }

    /// Whether this is the unrestricted `[0, MAX]` range.
    pub fn is_unbounded(&self) -> bool {
        self.min == Money::ZERO && self.max == Money::MAX
    }
}

impl Default for PriceRange {
    fn default() -> Self {
        Self {
            min: Money::ZERO,
            max: Money::MAX,
        }
    }
}

impl fmt::Display for PriceRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.max == Money::MAX {
            write!(f, "{} – \u{221e}", self.min)
        } else {
            write!(f, "{} – {}", self.min, self.max)
        }
    }
}

/// The combination of search text, category, colour and price range
/// currently selected.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub struct FilterCriteria {
    /// Case-insensitive substring matched against product names.
    pub search_text: String,
    pub category: Selection<Category>,
    pub color: Selection<Color>,
    pub price_range: PriceRange,
}

impl FilterCriteria {
    /// Criteria that match every product.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the search text.
    pub fn with_search(mut self, text: impl Into<String>) -> Self {
        self.search_text = text.into();
        self
    }

    /// Restrict to a category.
    pub fn with_category(mut self, category: impl Into<Selection<Category>>) -> Self {
        self.category = category.into();
        self
    }

    /// Restrict to a colour.
    pub fn with_color(mut self, color: impl Into<Selection<Color>>) -> Self {
        self.color = color.into();
        self
    }

    /// Restrict to a price range.
    pub fn with_price_range(mut self, min: u64, max: u64) -> Self {
        self.price_range = PriceRange::new(min, max);
        self
    }

    /// Whether these criteria are the unrestricted defaults.
    pub fn is_default(&self) -> bool {
        *self == Self::default()
    }
}
