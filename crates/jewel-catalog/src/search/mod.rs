//! Search module.
//!
//! Contains the listing page's filter state and the pipeline that turns a
//! fetched product collection into the list the page renders:
//! predicates, conjunctive filtering, sorting, and facet summaries.

mod facets;
mod filter;
mod pipeline;
mod predicate;
mod range;
mod sort;

pub use facets::{carat_presets, price_presets, Facet, FacetSummary, FacetValue, RangePreset};
pub use filter::{FilterKey, FilterKind, FilterState};
pub use pipeline::{apply_filters, matches_all, refine};
pub use predicate::{build_predicates, Predicate};
pub use range::NumericRange;
pub use sort::{sort_products, SortOption};
