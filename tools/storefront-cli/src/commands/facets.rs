//! Lists the values available to the category and colour filters.

use anyhow::Result;
use serde::Serialize;
use storefront_core::catalog::Catalog;
use storefront_core::search::ALL_LABEL;

use crate::context::Context;

#[derive(Serialize)]
struct Facets {
    categories: Vec<FacetValue>,
    colors: Vec<FacetValue>,
}

#[derive(Serialize)]
struct FacetValue {
    name: &'static str,
    label: &'static str,
    count: usize,
}

/// Values present in the catalog, in first-seen order, with product counts.
fn facets(catalog: &Catalog) -> Facets {
    Facets {
        categories: catalog
            .categories()
            .into_iter()
            .map(|c| FacetValue {
                name: c.as_str(),
                label: c.label(),
                count: catalog.iter().filter(|p| p.category == c).count(),
            })
            .collect(),
        colors: catalog
            .colors()
            .into_iter()
            .map(|c| FacetValue {
                name: c.as_str(),
                label: c.label(),
                count: catalog.iter().filter(|p| p.color == c).count(),
            })
            .collect(),
    }
}

/// Run the facets command.
pub fn run(ctx: &Context) -> Result<()> {
    let catalog = ctx.catalog()?;
    let facets = facets(&catalog);

    if ctx.output.is_json() {
        ctx.output.json(&facets);
        return Ok(());
    }

    for (title, values) in [("Categories", &facets.categories), ("Colors", &facets.colors)] {
        ctx.output.header(title);
        ctx.output.list_item(&format!("{} ({})", ALL_LABEL, catalog.len()));
        for value in values {
            ctx.output
                .list_item(&format!("{} [{}] ({})", value.label, value.name, value.count));
        }
    }
    ctx.output.kv("Max price", &catalog.max_price().display());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use storefront_core::catalog::{Category, Color, Product, StaticCatalog};

    #[test]
    fn test_fixture_facets() {
        let catalog = Catalog::load(&StaticCatalog).unwrap();
        let facets = facets(&catalog);

        let categories: Vec<_> = facets.categories.iter().map(|v| (v.name, v.count)).collect();
        assert_eq!(categories, vec![("cosmetics", 2), ("electronics", 2), ("shoes", 2)]);
        assert_eq!(facets.colors.len(), 6);
        assert_eq!(facets.colors[0].label, "Фиолетовый");
    }

    #[test]
    fn test_only_present_values_listed() {
        let catalog = Catalog::new(vec![
            Product::new(7, "Trail Boots", 7900, Category::Shoes, Color::Black, "44"),
            Product::new(8, "Desk Lamp", 2100, Category::Electronics, Color::White, "-"),
            Product::new(9, "City Boots", 6900, Category::Shoes, Color::Black, "41"),
        ])
        .unwrap();
        let facets = facets(&catalog);

        let categories: Vec<_> = facets.categories.iter().map(|v| (v.name, v.count)).collect();
        assert_eq!(categories, vec![("shoes", 2), ("electronics", 1)]);
        let colors: Vec<_> = facets.colors.iter().map(|v| (v.name, v.count)).collect();
        assert_eq!(colors, vec![("black", 2), ("white", 1)]);
    }
}
