//! Loosely typed specification values.

use serde::{Deserialize, Serialize};
use std::borrow::Cow;

/// A single specification value as stored by the backend.
///
/// Grading fields arrive as text (`"VS1"`), weights and prices arrive as
/// either numbers or numeric strings depending on who entered the product.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum SpecValue {
    Number(f64),
    Text(String),
    Flag(bool),
}

impl SpecValue {
    /// Render the value as text. Whole numbers render without a fraction.
    pub fn as_text(&self) -> Cow<'_, str> {
        match self {
            SpecValue::Text(s) => Cow::Borrowed(s.as_str()),
            SpecValue::Number(n) => Cow::Owned(n.to_string()),
            SpecValue::Flag(b) => Cow::Owned(b.to_string()),
        }
    }

    /// Coerce to a number; unparseable values count as `0.0`.
    pub fn to_number(&self) -> f64 {
        match self {
            SpecValue::Number(n) if n.is_finite() => *n,
            SpecValue::Number(_) => 0.0,
            SpecValue::Text(s) => parse_leading_f64(s).unwrap_or(0.0),
            SpecValue::Flag(_) => 0.0,
        }
    }

    /// Lower-cased, trimmed text used for comparisons.
    pub fn normalized(&self) -> String {
        self.as_text().trim().to_lowercase()
    }

    /// Case-insensitive equality against filter text.
    pub fn eq_ignore_case(&self, other: &str) -> bool {
        self.normalized() == other.trim().to_lowercase()
    }

    /// Case-insensitive substring containment.
    pub fn contains_ignore_case(&self, needle: &str) -> bool {
        self.normalized().contains(&needle.trim().to_lowercase())
    }
}

impl From<f64> for SpecValue {
    fn from(n: f64) -> Self {
        SpecValue::Number(n)
    }
}

impl From<&str> for SpecValue {
    fn from(s: &str) -> Self {
        SpecValue::Text(s.to_string())
    }
}

impl From<String> for SpecValue {
    fn from(s: String) -> Self {
        SpecValue::Text(s)
    }
}

/// Parse the longest numeric prefix of `s`, the way the storefront
/// always has: `"1.20 ct"` is `1.2`, `"3.00+"` is `3.0`, `"ct"` is nothing.
pub(crate) fn parse_leading_f64(s: &str) -> Option<f64> {
    let s = s.trim_start();
    let bytes = s.as_bytes();
    let mut end = 0;

    if matches!(bytes.first(), Some(b'+' | b'-')) {
        end = 1;
    }

    let int_start = end;
    while end < bytes.len() && bytes[end].is_ascii_digit() {
        end += 1;
    }
    let mut digits = end - int_start;

    if end < bytes.len() && bytes[end] == b'.' {
        let frac_start = end + 1;
        let mut frac_end = frac_start;
        while frac_end < bytes.len() && bytes[frac_end].is_ascii_digit() {
            frac_end += 1;
        }
        digits += frac_end - frac_start;
        if digits > 0 {
            end = frac_end;
        }
    }

    if digits == 0 {
        return None;
    }

    if end < bytes.len() && matches!(bytes[end], b'e' | b'E') {
        let mut exp_end = end + 1;
        if exp_end < bytes.len() && matches!(bytes[exp_end], b'+' | b'-') {
            exp_end += 1;
        }
        let exp_digits = exp_end;
        while exp_end < bytes.len() && bytes[exp_end].is_ascii_digit() {
            exp_end += 1;
        }
        if exp_end > exp_digits {
            end = exp_end;
        }
    }

    s[..end].parse::<f64>().ok().filter(|n| n.is_finite())
}
