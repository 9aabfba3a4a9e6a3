//! The filter and sort pipeline.

use crate::catalog::Product;
use crate::search::sort::sort_in_place;
use crate::search::{build_predicates, FilterState, Predicate};
use tracing::debug;

/// True when `product` satisfies every predicate.
pub fn matches_all(product: &Product, predicates: &[Predicate]) -> bool {
    predicates.iter().all(|predicate| predicate.matches(product))
}

/// Keep the products matching all predicates, in their original order.
pub fn apply_filters(products: &[Product], predicates: &[Predicate]) -> Vec<Product> {
    if predicates.is_empty() {
        return products.to_vec();
    }

    let filtered: Vec<Product> = products
        .iter()
        .filter(|product| matches_all(product, predicates))
        .cloned()
        .collect();

    debug!(
        fetched = products.len(),
        kept = filtered.len(),
        predicates = predicates.len(),
        "applied filters"
    );
    filtered
}

/// Filter then sort a fetched collection according to `state`.
pub fn refine(products: &[Product], state: &FilterState) -> Vec<Product> {
    let predicates = build_predicates(state);
    let mut refined = apply_filters(products, &predicates);
    sort_in_place(&mut refined, state.sort());
    refined
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::search::FilterKey;
    use serde_json::json;

    fn products(value: serde_json::Value) -> Vec<Product> {
        serde_json::from_value(value).unwrap()
    }

    fn ids(products: &[Product]) -> Vec<&str> {
        products.iter().map(|p| p.id.as_str()).collect()
    }

    #[test]
    fn test_price_filter_then_carat_sort() {
        let catalog = products(json!([
            { "_id": 1, "price": 500, "details": { "carat": 1.0 } },
            { "_id": 2, "price": 2000, "details": { "carat": 0.5 } },
            { "_id": 3, "price": 1500, "details": { "carat": 2.0 } }
        ]));
        let state = FilterState::new()
            .with(FilterKey::PriceRange, "1000-3000")
            .with(FilterKey::SortBy, "carat-desc");

        assert_eq!(ids(&refine(&catalog, &state)), ["3", "2"]);
    }

    #[test]
    fn test_filters_are_conjunctive() {
        let catalog = products(json!([
            { "_id": "a", "productType": "diamond", "diamondSpecs": { "shape": "Round", "color": "D" } },
            { "_id": "b", "productType": "diamond", "diamondSpecs": { "shape": "Round", "color": "G" } },
            { "_id": "c", "productType": "diamond", "diamondSpecs": { "shape": "Oval", "color": "D" } }
        ]));
        let state = FilterState::new()
            .with(FilterKey::Shape, "round")
            .with(FilterKey::Color, "d");

        assert_eq!(ids(&refine(&catalog, &state)), ["a"]);
    }

    #[test]
    fn test_no_predicates_is_identity() {
        let catalog = products(json!([{ "_id": 2 }, { "_id": 1 }]));
        assert_eq!(apply_filters(&catalog, &[]), catalog);
    }

    #[test]
    fn test_empty_collection() {
        let state = FilterState::new().with(FilterKey::Shape, "Round");
        assert!(refine(&[], &state).is_empty());
    }
}
