//! Facet summaries for the filter sidebar.

use crate::catalog::{resolve, resolve_number, Attribute, Product};
use crate::search::{FilterKey, FilterKind, FilterState, NumericRange};
use serde::Serialize;
use std::collections::HashMap;

/// A single facet value with count.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct FacetValue {
    /// Display text, as first seen in the collection.
    pub value: String,
    /// Number of products with this value.
    pub count: usize,
    /// Whether the filter currently selects this value.
    pub selected: bool,
}

/// Value counts for one exact-match filter.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct Facet {
    pub key: FilterKey,
    pub name: String,
    pub values: Vec<FacetValue>,
}

/// A predefined range bucket ("1.00 - 1.50", "$25,000+").
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct RangePreset {
    pub label: String,
    /// Filter value in `"min-max"` form.
    pub value: String,
    pub count: usize,
    pub selected: bool,
}

/// Everything the sidebar shows for one listing.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct FacetSummary {
    pub facets: Vec<Facet>,
    pub carat: Vec<RangePreset>,
    pub price: Vec<RangePreset>,
}

const CARAT_PRESETS: &[(&str, &str)] = &[
    ("0.00 - 0.50", "0-0.5"),
    ("0.50 - 1.00", "0.5-1"),
    ("1.00 - 1.50", "1-1.5"),
    ("1.50 - 2.00", "1.5-2"),
    ("2.00 - 3.00", "2-3"),
    ("3.00+", "3-"),
];

const PRICE_PRESETS: &[(&str, &str)] = &[
    ("Under $1,000", "0-1000"),
    ("$1,000 - $3,000", "1000-3000"),
    ("$3,000 - $5,000", "3000-5000"),
    ("$5,000 - $10,000", "5000-10000"),
    ("$10,000 - $25,000", "10000-25000"),
    ("$25,000+", "25000-"),
];

/// Standard carat buckets, without counts.
pub fn carat_presets() -> Vec<RangePreset> {
    presets(CARAT_PRESETS)
}

/// Standard price buckets, without counts.
pub fn price_presets() -> Vec<RangePreset> {
    presets(PRICE_PRESETS)
}

fn presets(table: &[(&str, &str)]) -> Vec<RangePreset> {
    table
        .iter()
        .map(|(label, value)| RangePreset {
            label: label.to_string(),
            value: value.to_string(),
            count: 0,
            selected: false,
        })
        .collect()
}

impl FacetSummary {
    /// Count values for `keys` across `products`.
    ///
    /// Values are grouped case-insensitively, most frequent first and
    /// alphabetical among ties. Keys that are not exact-match filters are
    /// skipped; carat and price buckets are always included.
    pub fn from_products(products: &[Product], state: &FilterState, keys: &[FilterKey]) -> Self {
        let facets = keys
            .iter()
            .filter_map(|key| match key.kind() {
                FilterKind::Exact(attribute) => Some(term_facet(products, state, *key, attribute)),
                _ => None,
            })
            .collect();

        Self {
            facets,
            carat: range_facet(
                products,
                state.get(FilterKey::CaratRange),
                Attribute::Carat,
                CARAT_PRESETS,
            ),
            price: range_facet(
                products,
                state.get(FilterKey::PriceRange),
                Attribute::Price,
                PRICE_PRESETS,
            ),
        }
    }

    /// Look up a facet by key.
    pub fn facet(&self, key: FilterKey) -> Option<&Facet> {
        self.facets.iter().find(|facet| facet.key == key)
    }
}

fn term_facet(
    products: &[Product],
    state: &FilterState,
    key: FilterKey,
    attribute: Attribute,
) -> Facet {
    // normalized value -> (display text, count)
    let mut counts: HashMap<String, (String, usize)> = HashMap::new();
    for product in products {
        if let Some(value) = resolve(product, attribute) {
            let normalized = value.normalized();
            if normalized.is_empty() {
                continue;
            }
            counts
                .entry(normalized)
                .or_insert_with(|| (value.as_text().trim().to_string(), 0))
                .1 += 1;
        }
    }

    let selected = state.get(key).trim().to_lowercase();
    let mut values: Vec<FacetValue> = counts
        .into_iter()
        .map(|(normalized, (value, count))| FacetValue {
            selected: normalized == selected,
            value,
            count,
        })
        .collect();
    values.sort_by(|a, b| b.count.cmp(&a.count).then_with(|| a.value.cmp(&b.value)));

    Facet {
        key,
        name: key.label().to_string(),
        values,
    }
}

fn range_facet(
    products: &[Product],
    selected: &str,
    attribute: Attribute,
    table: &[(&str, &str)],
) -> Vec<RangePreset> {
    presets(table)
        .into_iter()
        .map(|mut preset| {
            if let Ok(range) = NumericRange::parse(&preset.value) {
                preset.count = products
                    .iter()
                    .filter_map(|product| resolve_number(product, attribute))
                    .filter(|value| range.contains(*value))
                    .count();
            }
            preset.selected = preset.value == selected;
            preset
        })
        .collect()
}
