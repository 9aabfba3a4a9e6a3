//! Filter predicates.

use crate::catalog::{resolve, Attribute, Product};
use crate::search::{FilterKind, FilterState, NumericRange};
use tracing::{debug, warn};

/// A test over one resolved attribute of a product.
///
/// A product with no value for the attribute never matches.
#[derive(Debug, Clone, PartialEq)]
pub enum Predicate {
    /// Case-insensitive equality. `value` is stored normalized.
    Equals { attribute: Attribute, value: String },
    /// Case-insensitive substring. `needle` is stored normalized.
    Contains { attribute: Attribute, needle: String },
    /// Numeric interval membership; unparseable values count as 0.
    Within { attribute: Attribute, range: NumericRange },
}

impl Predicate {
    pub fn equals(attribute: Attribute, value: &str) -> Self {
        Predicate::Equals {
            attribute,
            value: value.trim().to_lowercase(),
        }
    }

    pub fn contains(attribute: Attribute, needle: &str) -> Self {
        Predicate::Contains {
            attribute,
            needle: needle.trim().to_lowercase(),
        }
    }

    pub fn within(attribute: Attribute, range: NumericRange) -> Self {
        Predicate::Within { attribute, range }
    }

    /// The attribute this predicate inspects.
    pub fn attribute(&self) -> Attribute {
        match self {
            Predicate::Equals { attribute, .. }
            | Predicate::Contains { attribute, .. }
            | Predicate::Within { attribute, .. } => *attribute,
        }
    }

    pub fn matches(&self, product: &Product) -> bool {
        let Some(resolved) = resolve(product, self.attribute()) else {
            return false;
        };

        match self {
            Predicate::Equals { value, .. } => resolved.eq_ignore_case(value),
            Predicate::Contains { needle, .. } => resolved.contains_ignore_case(needle),
            Predicate::Within { range, .. } => range.contains(resolved.to_number()),
        }
    }
}

/// Build one predicate per active filter. The sort entry produces none.
///
/// Range filters that do not parse are skipped rather than excluding
/// every product.
pub fn build_predicates(state: &FilterState) -> Vec<Predicate> {
    let predicates: Vec<Predicate> = state
        .active()
        .filter_map(|(key, value)| match key.kind() {
            FilterKind::Exact(attribute) => Some(Predicate::equals(attribute, value)),
            FilterKind::Substring(attribute) => Some(Predicate::contains(attribute, value)),
            FilterKind::Range(attribute) => match NumericRange::parse(value) {
                Ok(range) => Some(Predicate::within(attribute, range)),
                Err(e) => {
                    warn!(filter = %key, error = %e, "ignoring malformed range filter");
                    None
                }
            },
            FilterKind::Sort => None,
        })
        .collect();

    debug!(count = predicates.len(), "built filter predicates");
    predicates
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::search::FilterKey;
    use serde_json::json;

    fn product(value: serde_json::Value) -> Product {
        serde_json::from_value(value).unwrap()
    }

    #[test]
    fn test_equals_is_case_insensitive() {
        let p = product(json!({ "_id": 1, "details": { "color": "D" } }));
        assert!(Predicate::equals(Attribute::Color, "d").matches(&p));
        assert!(!Predicate::equals(Attribute::Color, "E").matches(&p));
    }

    #[test]
    fn test_equals_ignores_padding_on_either_side() {
        let p = product(json!({ "_id": 5, "details": { "clarity": " VS1 ", "carat": 3 } }));
        assert!(Predicate::equals(Attribute::Clarity, "  vs1").matches(&p));
        assert!(Predicate::contains(Attribute::Clarity, "S1 ").matches(&p));
        assert!(Predicate::equals(Attribute::Carat, "3").matches(&p));
    }

    #[test]
    fn test_missing_attribute_never_matches() {
        let p = product(json!({ "_id": 2 }));
        assert!(!Predicate::equals(Attribute::Shape, "round").matches(&p));
        assert!(!Predicate::contains(Attribute::Brand, "").matches(&p));
        assert!(!Predicate::within(Attribute::Price, NumericRange::at_least(0.0)).matches(&p));
    }

    #[test]
    fn test_unparseable_price_counts_as_zero() {
        let p = product(json!({ "_id": 3, "price": "call us" }));
        assert!(Predicate::within(Attribute::Price, NumericRange::new(0.0, 100.0)).matches(&p));
        assert!(!Predicate::within(Attribute::Price, NumericRange::new(1.0, 100.0)).matches(&p));
    }

    #[test]
    fn test_brand_is_substring() {
        let p = product(json!({ "_id": 4, "brand": "Tiffany & Co." }));
        assert!(Predicate::contains(Attribute::Brand, "TIFFANY").matches(&p));
    }

    #[test]
    fn test_build_predicates_skips_sort_and_bad_ranges() {
        let state = FilterState::new()
            .with(FilterKey::Shape, "Round")
            .with(FilterKey::CaratRange, "big-bigger")
            .with(FilterKey::PriceRange, "1000-3000")
            .with(FilterKey::Brand, "Gia")
            .with(FilterKey::SortBy, "price-desc");

        let predicates = build_predicates(&state);
        assert_eq!(
            predicates,
            vec![
                Predicate::equals(Attribute::Shape, "round"),
                Predicate::within(Attribute::Price, NumericRange::new(1000.0, 3000.0)),
                Predicate::contains(Attribute::Brand, "gia"),
            ]
        );
    }

    #[test]
    fn test_empty_state_builds_nothing() {
        assert!(build_predicates(&FilterState::new()).is_empty());
    }
}
