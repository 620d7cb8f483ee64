//! Fixed classification sets used by the catalog: categories and colours.

use crate::error::CommerceError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Product category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    /// "Косметика"
    #[serde(alias = "Косметика")]
    Cosmetics,
    /// "Электроника"
    #[serde(alias = "Электроника")]
    Electronics,
    /// "Обувь"
    #[serde(alias = "Обувь")]
    Shoes,
}

impl Category {
    /// Every category, in storefront display order.
    pub const ALL: [Category; 3] = [Category::Cosmetics, Category::Electronics, Category::Shoes];

    /// Stable machine name (e.g., "cosmetics").
    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Cosmetics => "cosmetics",
            Category::Electronics => "electronics",
            Category::Shoes => "shoes",
        }
    }

    /// Label shown to shoppers.
    pub fn label(&self) -> &'static str {
        match self {
            Category::Cosmetics => "Косметика",
            Category::Electronics => "Электроника",
            Category::Shoes => "Обувь",
        }
    }
}

impl FromStr for Category {
    type Err = CommerceError;

    /// Accepts the machine name or the shopper label, ignoring case.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_lowercase();
        Category::ALL
            .into_iter()
            .find(|c| c.as_str() == wanted || c.label().to_lowercase() == wanted)
            .ok_or_else(|| CommerceError::UnknownCategory(s.to_string()))
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Product colour.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Color {
    #[serde(alias = "Фиолетовый")]
    Purple,
    #[serde(alias = "Оранжевый")]
    Orange,
    #[serde(alias = "Розовый")]
    Pink,
    #[serde(alias = "Белый")]
    White,
    #[serde(alias = "Черный")]
    Black,
    #[serde(alias = "Синий")]
    Blue,
}

impl Color {
    /// Every colour, in storefront display order.
    pub const ALL: [Color; 6] = [
        Color::Purple,
        Color::Orange,
        Color::Pink,
        Color::White,
        Color::Black,
        Color::Blue,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Color::Purple => "purple",
            Color::Orange => "orange",
            Color::Pink => "pink",
            Color::White => "white",
            Color::Black => "black",
            Color::Blue => "blue",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Color::Purple => "Фиолетовый",
            Color::Orange => "Оранжевый",
            Color::Pink => "Розовый",
            Color::White => "Белый",
            Color::Black => "Черный",
            Color::Blue => "Синий",
        }
    }
}

impl FromStr for Color {
    type Err = CommerceError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_lowercase();
        Color::ALL
            .into_iter()
            .find(|c| c.as_str() == wanted || c.label().to_lowercase() == wanted)
            .ok_or_else(|| CommerceError::UnknownColor(s.to_string()))
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_category_from_label_and_name() {
        assert_eq!("Электроника".parse::<Category>().unwrap(), Category::Electronics);
        assert_eq!("электроника".parse::<Category>().unwrap(), Category::Electronics);
        assert_eq!("Shoes".parse::<Category>().unwrap(), Category::Shoes);
        assert!(matches!(
            "Книги".parse::<Category>(),
            Err(CommerceError::UnknownCategory(_))
        ));
    }

    #[test]
    fn test_color_from_label_and_name() {
        assert_eq!("Розовый".parse::<Color>().unwrap(), Color::Pink);
        assert_eq!(" black ".parse::<Color>().unwrap(), Color::Black);
        assert!("Зеленый".parse::<Color>().is_err());
    }

    #[test]
    fn test_display_uses_label() {
        assert_eq!(Category::Cosmetics.to_string(), "Косметика");
        assert_eq!(Color::Blue.to_string(), "Синий");
    }
}
