//! Filter keys and the listing page's filter state.

use crate::catalog::Attribute;
use crate::error::CatalogError;
use crate::search::SortOption;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

/// A filter control on a listing page.
///
/// Declaration order is the order parameters appear in listing URLs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum FilterKey {
    Shape,
    Cut,
    Color,
    Clarity,
    CaratRange,
    PriceRange,
    Certification,
    JewelryCategory,
    JewelryClassification,
    Metal,
    StoneType,
    StoneShape,
    GemType,
    Brand,
    SortBy,
}

/// How a filter's value is matched against products.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FilterKind {
    /// Case-insensitive equality with the resolved attribute.
    Exact(Attribute),
    /// `"min-max"` interval over the resolved attribute.
    Range(Attribute),
    /// Case-insensitive substring of the resolved attribute.
    Substring(Attribute),
    /// Not a filter: selects the sort order.
    Sort,
}

impl FilterKey {
    pub const ALL: [FilterKey; 15] = [
        FilterKey::Shape,
        FilterKey::Cut,
        FilterKey::Color,
        FilterKey::Clarity,
        FilterKey::CaratRange,
        FilterKey::PriceRange,
        FilterKey::Certification,
        FilterKey::JewelryCategory,
        FilterKey::JewelryClassification,
        FilterKey::Metal,
        FilterKey::StoneType,
        FilterKey::StoneShape,
        FilterKey::GemType,
        FilterKey::Brand,
        FilterKey::SortBy,
    ];

    /// Internal name, as used in page state.
    pub fn as_str(&self) -> &'static str {
        match self {
            FilterKey::Shape => "shape",
            FilterKey::Cut => "cut",
            FilterKey::Color => "color",
            FilterKey::Clarity => "clarity",
            FilterKey::CaratRange => "caratRange",
            FilterKey::PriceRange => "priceRange",
            FilterKey::Certification => "certification",
            FilterKey::JewelryCategory => "jewelryCategory",
            FilterKey::JewelryClassification => "jewelryClassification",
            FilterKey::Metal => "metal",
            FilterKey::StoneType => "stoneType",
            FilterKey::StoneShape => "stoneShape",
            FilterKey::GemType => "gemType",
            FilterKey::Brand => "brand",
            FilterKey::SortBy => "sortBy",
        }
    }

    /// Heading shown above the control.
    pub fn label(&self) -> &'static str {
        match self {
            FilterKey::Shape => "Shape",
            FilterKey::Cut => "Cut",
            FilterKey::Color => "Color",
            FilterKey::Clarity => "Clarity",
            FilterKey::CaratRange => "Carat",
            FilterKey::PriceRange => "Price",
            FilterKey::Certification => "Certification",
            FilterKey::JewelryCategory => "Category",
            FilterKey::JewelryClassification => "Collection",
            FilterKey::Metal => "Metal",
            FilterKey::StoneType => "Stone Type",
            FilterKey::StoneShape => "Stone Shape",
            FilterKey::GemType => "Gemstone",
            FilterKey::Brand => "Brand",
            FilterKey::SortBy => "Sort By",
        }
    }

    pub fn kind(&self) -> FilterKind {
        match self {
            FilterKey::Shape => FilterKind::Exact(Attribute::Shape),
            FilterKey::Cut => FilterKind::Exact(Attribute::Cut),
            FilterKey::Color => FilterKind::Exact(Attribute::Color),
            FilterKey::Clarity => FilterKind::Exact(Attribute::Clarity),
            FilterKey::CaratRange => FilterKind::Range(Attribute::Carat),
            FilterKey::PriceRange => FilterKind::Range(Attribute::Price),
            FilterKey::Certification => FilterKind::Exact(Attribute::Certification),
            FilterKey::JewelryCategory => FilterKind::Exact(Attribute::Category),
            FilterKey::JewelryClassification => FilterKind::Exact(Attribute::Classification),
            FilterKey::Metal => FilterKind::Exact(Attribute::Metal),
            FilterKey::StoneType => FilterKind::Exact(Attribute::StoneType),
            FilterKey::StoneShape => FilterKind::Exact(Attribute::StoneShape),
            FilterKey::GemType => FilterKind::Exact(Attribute::GemType),
            FilterKey::Brand => FilterKind::Substring(Attribute::Brand),
            FilterKey::SortBy => FilterKind::Sort,
        }
    }

    /// The value that means "not filtering".
    pub fn inactive_value(&self) -> &'static str {
        match self {
            FilterKey::SortBy => SortOption::Latest.as_str(),
            _ => "",
        }
    }

    /// Whether `value` would make this filter active.
    pub fn is_active_value(&self, value: &str) -> bool {
        let value = value.trim();
        !value.is_empty() && value != self.inactive_value()
    }
}

impl fmt::Display for FilterKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for FilterKey {
    type Err = CatalogError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        FilterKey::ALL
            .into_iter()
            .find(|key| key.as_str() == s)
            .ok_or_else(|| CatalogError::UnknownFilter(s.to_string()))
    }
}

/// The filter selections of one listing page.
///
/// Only active entries are stored: setting a filter to `""` (or the sort
/// to `"latest"`) removes it. Two states that select the same products in
/// the same order therefore compare equal.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "BTreeMap<FilterKey, String>", into = "BTreeMap<FilterKey, String>")]
pub struct FilterState {
    entries: BTreeMap<FilterKey, String>,
}

impl FilterState {
    /// Create an empty state: no filters, newest first.
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder form of [`FilterState::set`].
    pub fn with(mut self, key: FilterKey, value: impl Into<String>) -> Self {
        self.set(key, value);
        self
    }

    /// Current value, or the inactive sentinel when unset.
    pub fn get(&self, key: FilterKey) -> &str {
        self.entries
            .get(&key)
            .map(String::as_str)
            .unwrap_or_else(|| key.inactive_value())
    }

    /// Set a filter. Inactive values clear it.
    pub fn set(&mut self, key: FilterKey, value: impl Into<String>) {
        let value = value.into();
        if key.is_active_value(&value) {
            self.entries.insert(key, value);
        } else {
            self.entries.remove(&key);
        }
    }

    /// Clear one filter.
    pub fn remove(&mut self, key: FilterKey) {
        self.entries.remove(&key);
    }

    /// Clear every filter but keep the sort order.
    pub fn clear_filters(&mut self) {
        self.entries.retain(|key, _| *key == FilterKey::SortBy);
    }

    pub fn is_active(&self, key: FilterKey) -> bool {
        self.entries.contains_key(&key)
    }

    /// Active entries in URL order, sort included.
    pub fn active(&self) -> impl Iterator<Item = (FilterKey, &str)> {
        self.entries.iter().map(|(key, value)| (*key, value.as_str()))
    }

    /// Number of active filters, not counting the sort.
    pub fn filter_count(&self) -> usize {
        self.entries
            .keys()
            .filter(|key| **key != FilterKey::SortBy)
            .count()
    }

    /// True when nothing differs from the defaults.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// The selected sort order. Unknown text falls back to newest first.
    pub fn sort(&self) -> SortOption {
        SortOption::parse_or_default(self.get(FilterKey::SortBy))
    }
}

impl From<BTreeMap<FilterKey, String>> for FilterState {
    fn from(map: BTreeMap<FilterKey, String>) -> Self {
        let mut state = FilterState::new();
        for (key, value) in map {
            state.set(key, value);
        }
        state
    }
}

impl From<FilterState> for BTreeMap<FilterKey, String> {
    fn from(state: FilterState) -> Self {
        state.entries
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_inactive_values_are_not_stored() {
        let mut state = FilterState::new();
        state.set(FilterKey::Shape, "Round");
        state.set(FilterKey::SortBy, "latest");
        state.set(FilterKey::Color, "  ");

        assert_eq!(state.active().count(), 1);
        assert_eq!(state.get(FilterKey::Color), "");
        assert_eq!(state.get(FilterKey::SortBy), "latest");

        state.set(FilterKey::Shape, "");
        assert!(state.is_empty());
        assert_eq!(state, FilterState::new());
    }

    #[test]
    fn test_clear_filters_keeps_sort() {
        let mut state = FilterState::new()
            .with(FilterKey::Cut, "Ideal")
            .with(FilterKey::PriceRange, "1000-3000")
            .with(FilterKey::SortBy, "price-asc");
        assert_eq!(state.filter_count(), 2);

        state.clear_filters();
        assert_eq!(state.filter_count(), 0);
        assert_eq!(state.sort(), SortOption::PriceAsc);
    }

    #[test]
    fn test_unknown_sort_falls_back() {
        let state = FilterState::new().with(FilterKey::SortBy, "popularity");
        assert_eq!(state.sort(), SortOption::Latest);
    }

    #[test]
    fn test_filter_key_names() {
        for key in FilterKey::ALL {
            assert_eq!(key.as_str().parse::<FilterKey>().unwrap(), key);
        }
        assert!("category".parse::<FilterKey>().is_err());
        assert_eq!(FilterKey::Brand.kind(), FilterKind::Substring(Attribute::Brand));
        assert_eq!(FilterKey::CaratRange.kind(), FilterKind::Range(Attribute::Carat));
    }

    #[test]
    fn test_serde_normalizes_inactive_entries() {
        let state: FilterState =
            serde_json::from_str(r#"{"shape":"Oval","color":"","sortBy":"latest"}"#).unwrap();
        assert_eq!(state, FilterState::new().with(FilterKey::Shape, "Oval"));
        assert_eq!(serde_json::to_string(&state).unwrap(), r#"{"shape":"Oval"}"#);
    }
}
