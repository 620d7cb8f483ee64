//! Property-based tests for the filter engine and the cart aggregator.

use proptest::collection::vec;
use proptest::prelude::*;
use std::collections::HashSet;
use storefront_core::prelude::*;

const NAMES: [&str; 6] = [
    "Premium Beauty Serum",
    "Wireless Headphones Pro",
    "Sport Sneakers Limited",
    "Organic Face Cream",
    "Smart Watch Elite",
    "Running Shoes Max",
];

const SEARCHES: [&str; 6] = ["", "pro", "SHOES", "e", "serum", "zzz"];

fn arb_catalog() -> impl Strategy<Value = Catalog> {
    vec((0usize..6, 0u64..20_000, 0usize..3, 0usize..6, any::<bool>()), 1..30).prop_map(
        |rows| {
            let products = rows
                .into_iter()
                .enumerate()
                .map(|(i, (name, price, category, color, in_stock))| {
                    let mut product = Product::new(
                        i as u32 + 1,
                        NAMES[name],
                        price,
                        Category::ALL[category],
                        Color::ALL[color],
                        "M",
                    );
                    product.in_stock = in_stock;
                    product
                })
                .collect();
            Catalog::new(products).expect("generated ids are unique and positive")
        },
    )
}

fn arb_criteria() -> impl Strategy<Value = FilterCriteria> {
    (
        0usize..SEARCHES.len(),
        proptest::option::of(0usize..3),
        proptest::option::of(0usize..6),
        0u64..20_000,
        0u64..20_000,
    )
        .prop_map(|(search, category, color, a, b)| {
            let mut criteria = FilterCriteria::new()
                .with_search(SEARCHES[search])
                .with_price_range(a.min(b), a.max(b));
            if let Some(c) = category {
                criteria = criteria.with_category(Category::ALL[c]);
            }
            if let Some(c) = color {
                criteria = criteria.with_color(Color::ALL[c]);
            }
            criteria
        })
}

proptest! {
    /// Filtered output is a subsequence of the catalog in the same order.
    #[test]
    fn filter_is_order_preserving_subsequence(
        catalog in arb_catalog(),
        criteria in arb_criteria(),
    ) {
        let result = filter(&catalog, &criteria);
        let positions: Vec<usize> = result
            .iter()
            .map(|p| catalog.iter().position(|c| c.id == p.id).expect("from catalog"))
            .collect();
        prop_assert!(positions.windows(2).all(|w| w[0] < w[1]));
        prop_assert!(result.iter().all(|p| matches(p, &criteria)));
    }

    /// Same inputs give the same output, and re-filtering the output is a no-op.
    #[test]
    fn filter_is_deterministic_and_idempotent(
        catalog in arb_catalog(),
        criteria in arb_criteria(),
    ) {
        let first = filter(&catalog, &criteria);
        let second = filter(&catalog, &criteria);
        prop_assert_eq!(&first, &second);

        let again = filter(first.iter().copied(), &criteria);
        prop_assert_eq!(first, again);
    }

    /// Default criteria return the whole catalog.
    #[test]
    fn default_criteria_keep_everything(catalog in arb_catalog()) {
        let result = filter(&catalog, &FilterCriteria::default());
        let expected: Vec<&Product> = catalog.iter().collect();
        prop_assert_eq!(result, expected);
    }

    /// Products priced exactly at either bound are included.
    #[test]
    fn price_bounds_are_inclusive(catalog in arb_catalog(), pick in any::<prop::sample::Index>()) {
        let product = pick.get(catalog.products());
        let price = product.price.amount();

        let at_min = FilterCriteria::new().with_price_range(price, price.saturating_add(100));
        prop_assert!(filter(&catalog, &at_min).iter().any(|p| p.id == product.id));

        let at_max = FilterCriteria::new().with_price_range(price.saturating_sub(100), price);
        prop_assert!(filter(&catalog, &at_max).iter().any(|p| p.id == product.id));
    }

    /// An inverted range matches nothing.
    #[test]
    fn inverted_range_matches_nothing(
        catalog in arb_catalog(),
        a in 1u64..20_000,
        gap in 1u64..1_000,
    ) {
        let criteria = FilterCriteria::new().with_price_range(a + gap, a);
        prop_assert!(filter(&catalog, &criteria).is_empty());
    }

    /// No sequence of adds produces two entries for one product, and
    /// out-of-stock or unknown products never enter the cart.
    #[test]
    fn cart_entries_stay_unique_and_in_stock(
        catalog in arb_catalog(),
        adds in vec(0u32..40, 0..80),
    ) {
        let mut cart = Cart::new();
        for id in adds {
            cart.add(&catalog, ProductId::new(id));
        }

        let mut seen = HashSet::new();
        for entry in cart.entries() {
            prop_assert!(seen.insert(entry.product_id));
            prop_assert!(entry.quantity >= 1);
            let product = catalog.get(entry.product_id);
            prop_assert!(product.is_some_and(|p| p.in_stock));
        }
    }

    /// Adding an in-stock product N times yields one entry of quantity N;
    /// an out-of-stock product leaves the cart unchanged.
    #[test]
    fn repeated_adds_accumulate(
        catalog in arb_catalog(),
        pick in any::<prop::sample::Index>(),
        n in 1u32..50,
    ) {
        let product = pick.get(catalog.products());
        let mut cart = Cart::new();
        for _ in 0..n {
            cart.add(&catalog, product.id);
        }

        if product.in_stock {
            prop_assert_eq!(cart.entries(), &[CartEntry::new(product.id, n)][..]);
        } else {
            prop_assert!(cart.is_empty());
        }
    }

    /// Summary totals equal the per-entry sums over resolvable entries.
    #[test]
    fn summary_matches_entry_sums(
        catalog in arb_catalog(),
        raw in vec((0u32..40, 1u32..20), 0..20),
    ) {
        let cart: Cart = raw
            .into_iter()
            .map(|(id, qty)| CartEntry::new(ProductId::new(id), qty))
            .collect();
        let summary = summarize(&cart, &catalog);

        let expected_total: u64 = cart
            .entries()
            .iter()
            .filter_map(|e| {
                let product = catalog.get(e.product_id)?;
                Some(product.price.amount() * u64::from(e.quantity))
            })
            .sum();
        let expected_count: u64 = cart.entries().iter().map(|e| u64::from(e.quantity)).sum();

        prop_assert_eq!(summary.grand_total, Money::new(expected_total));
        prop_assert_eq!(summary.item_count, expected_count);

        let line_ids: Vec<ProductId> = summary.lines.iter().map(|l| l.product.id).collect();
        let resolvable: Vec<ProductId> = cart
            .entries()
            .iter()
            .map(|e| e.product_id)
            .filter(|id| catalog.contains(*id))
            .collect();
        prop_assert_eq!(line_ids, resolvable);
    }
}
