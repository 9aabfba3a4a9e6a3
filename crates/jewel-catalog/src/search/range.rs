//! Numeric interval filters.

use crate::catalog::parse_leading_f64;
use crate::error::CatalogError;
use std::fmt;
use std::str::FromStr;

/// A closed interval `[min, max]`; `max` may be infinite.
///
/// Range filters travel as `"<min>-<max>"` strings (`"1000-3000"`,
/// `"3.00-"` for "3.00 and up"). They are parsed once, here, and only the
/// numeric form reaches the predicates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NumericRange {
    pub min: f64,
    pub max: f64,
}

impl NumericRange {
    pub fn new(min: f64, max: f64) -> Self {
        Self { min, max }
    }

    /// `[min, +inf)`.
    pub fn at_least(min: f64) -> Self {
        Self::new(min, f64::INFINITY)
    }

    pub fn is_unbounded(&self) -> bool {
        self.max == f64::INFINITY
    }

    /// Inclusive on both ends.
    pub fn contains(&self, value: f64) -> bool {
        value >= self.min && value <= self.max
    }

    /// Parse the `"min-max"` form. An empty min is 0, an empty or missing
    /// max is unbounded. A bound that is present but not a number is an error.
    pub fn parse(value: &str) -> Result<Self, CatalogError> {
        let (min, max) = value.split_once('-').unwrap_or((value, ""));
        let min = parse_bound(value, min)?.unwrap_or(0.0);
        let max = parse_bound(value, max)?.unwrap_or(f64::INFINITY);
        Ok(Self { min, max })
    }
}

fn parse_bound(whole: &str, bound: &str) -> Result<Option<f64>, CatalogError> {
    let bound = bound.trim();
    if bound.is_empty() {
        return Ok(None);
    }
    parse_leading_f64(bound)
        .map(Some)
        .ok_or_else(|| CatalogError::InvalidRange {
            value: whole.to_string(),
            reason: format!("'{}' is not a number", bound),
        })
}

impl FromStr for NumericRange {
    type Err = CatalogError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        NumericRange::parse(s)
    }
}

impl fmt::Display for NumericRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_unbounded() {
            write!(f, "{}-", self.min)
        } else {
            write!(f, "{}-{}", self.min, self.max)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bounded_range_is_inclusive() {
        let range = NumericRange::parse("1000-3000").unwrap();
        assert!(range.contains(1000.0));
        assert!(range.contains(3000.0));
        assert!(!range.contains(999.99));
        assert!(!range.contains(3000.01));
    }

    #[test]
    fn test_trailing_empty_max_is_unbounded() {
        let range = NumericRange::parse("3.00-").unwrap();
        assert!(range.is_unbounded());
        assert!(range.contains(10.5));
        assert!(!range.contains(2.99));
    }

    #[test]
    fn test_empty_min_defaults_to_zero() {
        let range = NumericRange::parse("-1000").unwrap();
        assert_eq!(range, NumericRange::new(0.0, 1000.0));
    }

    #[test]
    fn test_bare_number_is_lower_bound() {
        assert_eq!(NumericRange::parse("2").unwrap(), NumericRange::at_least(2.0));
    }

    #[test]
    fn test_non_numeric_bound_is_rejected() {
        let err = NumericRange::parse("cheap-expensive").unwrap_err();
        assert!(matches!(err, CatalogError::InvalidRange { .. }));
    }

    #[test]
    fn test_display_reencodes() {
        assert_eq!(NumericRange::new(0.5, 1.0).to_string(), "0.5-1");
        assert_eq!(NumericRange::at_least(25000.0).to_string(), "25000-");
    }
}
