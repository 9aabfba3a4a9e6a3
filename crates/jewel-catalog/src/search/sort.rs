//! Listing sort orders.

use crate::catalog::Product;
use crate::error::CatalogError;
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

/// Sort options for listing pages.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "kebab-case")]
pub enum SortOption {
    /// Newest first.
    #[default]
    Latest,
    /// Price, low to high.
    PriceAsc,
    /// Price, high to low.
    PriceDesc,
    /// Carat weight, low to high.
    CaratAsc,
    /// Carat weight, high to low.
    CaratDesc,
}

impl SortOption {
    pub const ALL: [SortOption; 5] = [
        SortOption::Latest,
        SortOption::PriceAsc,
        SortOption::PriceDesc,
        SortOption::CaratAsc,
        SortOption::CaratDesc,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            SortOption::Latest => "latest",
            SortOption::PriceAsc => "price-asc",
            SortOption::PriceDesc => "price-desc",
            SortOption::CaratAsc => "carat-asc",
            SortOption::CaratDesc => "carat-desc",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            SortOption::Latest => "Newest",
            SortOption::PriceAsc => "Price: Low to High",
            SortOption::PriceDesc => "Price: High to Low",
            SortOption::CaratAsc => "Carat: Low to High",
            SortOption::CaratDesc => "Carat: High to Low",
        }
    }

    /// Parse, falling back to [`SortOption::Latest`] for unknown keys.
    pub fn parse_or_default(s: &str) -> Self {
        s.parse().unwrap_or_default()
    }

    fn compare(&self, a: &Product, b: &Product) -> Ordering {
        match self {
            SortOption::Latest => b.created_at_millis().cmp(&a.created_at_millis()),
            SortOption::PriceAsc => a.price_value().total_cmp(&b.price_value()),
            SortOption::PriceDesc => b.price_value().total_cmp(&a.price_value()),
            SortOption::CaratAsc => a.carat_value().total_cmp(&b.carat_value()),
            SortOption::CaratDesc => b.carat_value().total_cmp(&a.carat_value()),
        }
    }
}

impl fmt::Display for SortOption {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SortOption {
    type Err = CatalogError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        SortOption::ALL
            .into_iter()
            .find(|option| option.as_str() == s.trim())
            .ok_or_else(|| CatalogError::UnknownSortKey(s.to_string()))
    }
}

/// Return a sorted copy of `products`. Equal keys keep their input order.
pub fn sort_products(products: &[Product], sort: SortOption) -> Vec<Product> {
    let mut sorted = products.to_vec();
    sort_in_place(&mut sorted, sort);
    sorted
}

pub(crate) fn sort_in_place(products: &mut [Product], sort: SortOption) {
    products.sort_by(|a, b| sort.compare(a, b));
}
