//! Catalog model and listing pipeline for the jewelry storefront.
//!
//! This crate holds everything a listing page needs once a product
//! collection has been fetched:
//!
//! - **Catalog**: Products, specification records, attribute resolution
//! - **Search**: Filter state, predicates, filtering, sorting, facets
//! - **Url**: Query-string synchronization for shareable listing URLs
//!
//! # Example
//!
//! ```rust,ignore
//! use jewel_catalog::prelude::*;
//!
//! let products: Vec<Product> = serde_json::from_str(body)?;
//!
//! // Initial state comes from the address bar
//! let mut state = from_query_string("?shape=round&price=1000-3000&sort=carat-desc");
//! let listing = refine(&products, &state);
//!
//! // A filter change rewrites the URL
//! state.set(FilterKey::Color, "D");
//! let url = listing_url("/diamonds", &state);
//! ```

pub mod error;
pub mod ids;

pub mod catalog;
pub mod search;
pub mod url;

pub use error::CatalogError;
pub use ids::ProductId;

/// Prelude for convenient imports.
pub mod prelude {
    pub use crate::error::CatalogError;
    pub use crate::ids::ProductId;

    // Catalog
    pub use crate::catalog::{
        resolve, Attribute, DiamondSpecs, JewelrySpecs, Product, ProductDetails, ProductType,
        SpecValue,
    };

    // Search
    pub use crate::search::{
        apply_filters, build_predicates, refine, sort_products, FacetSummary, FilterKey,
        FilterKind, FilterState, NumericRange, Predicate, RangePreset, SortOption,
    };

    // Url
    pub use crate::url::{from_query_string, listing_url, to_query_string};
}
