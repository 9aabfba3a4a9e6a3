//! Category slugs.
//!
//! Category-like filters hold canonical display values ("Wedding Band")
//! internally and URL slugs ("wedding-band") in links. Older links used a
//! handful of other spellings, which still resolve.

use crate::search::FilterKey;
use std::borrow::Cow;

struct SlugTable {
    /// (canonical value, slug)
    entries: &'static [(&'static str, &'static str)],
    /// (legacy slug, canonical value)
    aliases: &'static [(&'static str, &'static str)],
}

const JEWELRY_CATEGORIES: SlugTable = SlugTable {
    entries: &[
        ("Ring", "ring"),
        ("Engagement Ring", "engagement-ring"),
        ("Wedding Band", "wedding-band"),
        ("Necklace", "necklace"),
        ("Earrings", "earrings"),
        ("Bracelet", "bracelet"),
        ("Pendant", "pendant"),
    ],
    aliases: &[
        ("rings", "Ring"),
        ("engagement", "Ring"),
        ("engagement-rings", "Engagement Ring"),
        ("wedding", "Wedding Band"),
        ("band", "Wedding Band"),
        ("bands", "Wedding Band"),
        ("wedding-bands", "Wedding Band"),
        ("necklaces", "Necklace"),
        ("earring", "Earrings"),
        ("bracelets", "Bracelet"),
        ("pendants", "Pendant"),
    ],
};

const JEWELRY_CLASSIFICATIONS: SlugTable = SlugTable {
    entries: &[
        ("Women's", "womens"),
        ("Men's", "mens"),
        ("Unisex", "unisex"),
        ("Bridal", "bridal"),
    ],
    aliases: &[
        ("women", "Women's"),
        ("ladies", "Women's"),
        ("men", "Men's"),
        ("gents", "Men's"),
    ],
};

fn table(key: FilterKey) -> Option<&'static SlugTable> {
    match key {
        FilterKey::JewelryCategory => Some(&JEWELRY_CATEGORIES),
        FilterKey::JewelryClassification => Some(&JEWELRY_CLASSIFICATIONS),
        _ => None,
    }
}

/// The URL form of a filter value. Values without a slug pass through.
pub fn to_slug(key: FilterKey, value: &str) -> Cow<'_, str> {
    table(key)
        .and_then(|table| {
            table
                .entries
                .iter()
                .find(|(canonical, _)| canonical.eq_ignore_ascii_case(value.trim()))
        })
        .map(|(_, slug)| Cow::Borrowed(*slug))
        .unwrap_or(Cow::Borrowed(value))
}

/// The canonical value for a URL slug, including legacy spellings.
/// Unknown slugs pass through.
pub fn from_slug(key: FilterKey, slug: &str) -> Cow<'_, str> {
    let Some(table) = table(key) else {
        return Cow::Borrowed(slug);
    };
    let wanted = slug.trim().to_lowercase();

    table
        .entries
        .iter()
        .find(|(_, s)| *s == wanted)
        .map(|(canonical, _)| *canonical)
        .or_else(|| {
            table
                .aliases
                .iter()
                .find(|(alias, _)| *alias == wanted)
                .map(|(_, canonical)| *canonical)
        })
        .map(Cow::Borrowed)
        .unwrap_or(Cow::Borrowed(slug))
}

/// Canonical values that have slugs for `key`. Empty for other filters.
pub fn canonical_values(key: FilterKey) -> Vec<&'static str> {
    table(key)
        .map(|table| table.entries.iter().map(|(canonical, _)| *canonical).collect())
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_canonical_values_round_trip() {
        for key in [FilterKey::JewelryCategory, FilterKey::JewelryClassification] {
            for value in canonical_values(key) {
                assert_eq!(from_slug(key, &to_slug(key, value)), value);
            }
        }
    }

    #[test]
    fn test_legacy_aliases() {
        assert_eq!(from_slug(FilterKey::JewelryCategory, "engagement"), "Ring");
        assert_eq!(from_slug(FilterKey::JewelryCategory, "wedding"), "Wedding Band");
        assert_eq!(from_slug(FilterKey::JewelryCategory, "Rings"), "Ring");
        assert_eq!(from_slug(FilterKey::JewelryClassification, "ladies"), "Women's");
    }

    #[test]
    fn test_slug_lookup_ignores_case() {
        assert_eq!(to_slug(FilterKey::JewelryCategory, "wedding band"), "wedding-band");
        assert_eq!(from_slug(FilterKey::JewelryCategory, "NECKLACE"), "Necklace");
    }

    #[test]
    fn test_unknown_values_pass_through() {
        assert_eq!(to_slug(FilterKey::JewelryCategory, "Anklet"), "Anklet");
        assert_eq!(from_slug(FilterKey::JewelryCategory, "anklet"), "anklet");
        assert_eq!(to_slug(FilterKey::Metal, "Ring"), "Ring");
        assert_eq!(from_slug(FilterKey::Metal, "ring"), "ring");
    }
}
