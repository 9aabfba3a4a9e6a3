//! Public query parameter names.

use crate::search::FilterKey;

/// The URL parameter a filter is written under.
pub fn param_name(key: FilterKey) -> &'static str {
    match key {
        FilterKey::CaratRange => "carat",
        FilterKey::PriceRange => "price",
        FilterKey::Certification => "cert",
        FilterKey::JewelryCategory => "category",
        FilterKey::JewelryClassification => "classification",
        FilterKey::SortBy => "sort",
        other => other.as_str(),
    }
}

/// The filter a URL parameter refers to.
///
/// Accepts the public names and, for links built before the renames, the
/// internal names.
pub fn key_for_param(name: &str) -> Option<FilterKey> {
    FilterKey::ALL
        .into_iter()
        .find(|key| param_name(*key) == name)
        .or_else(|| name.parse().ok())
}
