//! Catalog sources.
//!
//! The filter engine and the cart aggregator only ever see a [`Catalog`];
//! where the products come from is a [`CatalogProvider`] concern.
//!
//! [`Catalog`]: crate::catalog::Catalog

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::catalog::{Category, Color, Product};
use crate::error::CommerceError;

/// Supplies the ordered product list a catalog is built from.
///
/// Providers are consulted once, at startup.
pub trait CatalogProvider {
    fn load(&self) -> Result<Vec<Product>, CommerceError>;
}

/// The built-in storefront assortment.
#[derive(Debug, Clone, Copy, Default)]
pub struct StaticCatalog;

const IMAGE_BASE: &str =
    "https://cdn.poehali.dev/projects/5e83ee42-da38-4b03-9a27-374e8a69af60/files";

impl CatalogProvider for StaticCatalog {
    fn load(&self) -> Result<Vec<Product>, CommerceError> {
        let beauty = format!("{IMAGE_BASE}/99d87dc2-bec8-4f85-af57-4151923c3692.jpg");
        let gadgets = format!("{IMAGE_BASE}/041c4c46-876b-498e-90cf-7847b01ea0f3.jpg");
        let footwear = format!("{IMAGE_BASE}/340814d0-74a2-4f5f-9948-e3af50624b1a.jpg");

        Ok(vec![
            Product::new(
                1,
                "Premium Beauty Serum",
                2499,
                Category::Cosmetics,
                Color::Purple,
                "50мл",
            )
            .with_image(&beauty),
            Product::new(
                2,
                "Wireless Headphones Pro",
                8999,
                Category::Electronics,
                Color::Orange,
                "Universal",
            )
            .with_image(&gadgets),
            Product::new(
                3,
                "Sport Sneakers Limited",
                5499,
                Category::Shoes,
                Color::Pink,
                "42",
            )
            .with_image(&footwear),
            Product::new(
                4,
                "Organic Face Cream",
                1899,
                Category::Cosmetics,
                Color::White,
                "100мл",
            )
            .with_image(&beauty)
            .out_of_stock(),
            Product::new(
                5,
                "Smart Watch Elite",
                12999,
                Category::Electronics,
                Color::Black,
                "Universal",
            )
            .with_image(&gadgets),
            Product::new(
                6,
                "Running Shoes Max",
                6799,
                Category::Shoes,
                Color::Blue,
                "40",
            )
            .with_image(&footwear),
        ])
    }
}

/// On-disk catalog layout shared by the TOML and JSON readers.
#[derive(Debug, Serialize, Deserialize)]
struct CatalogFile {
    products: Vec<Product>,
}

/// Reads products from a TOML (`[[products]]`) or JSON (`{"products": [...]}`) file.
#[derive(Debug, Clone)]
pub struct FileCatalog {
    path: PathBuf,
}

impl FileCatalog {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn is_json(&self) -> bool {
        self.path
            .extension()
            .is_some_and(|ext| ext.eq_ignore_ascii_case("json"))
    }
}

impl CatalogProvider for FileCatalog {
    fn load(&self) -> Result<Vec<Product>, CommerceError> {
        let content = std::fs::read_to_string(&self.path)?;
        let file: CatalogFile = if self.is_json() {
            serde_json::from_str(&content)?
        } else {
            toml::from_str(&content)?
        };
        tracing::debug!(
            path = %self.path.display(),
            products = file.products.len(),
            "catalog file read"
        );
        Ok(file.products)
    }
}
