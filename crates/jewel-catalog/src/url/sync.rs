//! Filter state <-> query string.

use super::codec::{decode_component, encode_component};
use super::params::{key_for_param, param_name};
use super::slugs::{from_slug, to_slug};
use crate::search::{FilterKey, FilterState, SortOption};
use tracing::debug;

/// Serialize the active filters, without a leading `?`.
///
/// Inactive filters are omitted, so the default state yields `""`.
pub fn to_query_string(state: &FilterState) -> String {
    state
        .active()
        .map(|(key, value)| {
            format!(
                "{}={}",
                param_name(key),
                encode_component(&to_slug(key, value))
            )
        })
        .collect::<Vec<_>>()
        .join("&")
}

/// Parse a query string into filter state.
///
/// Accepts a bare query, one with a leading `?`, or a full URL. Unknown
/// parameters and unknown sort keys are ignored, and the first occurrence
/// of a repeated parameter wins.
pub fn from_query_string(search: &str) -> FilterState {
    // Text before the first `?` is a path only if it is not itself a
    // parameter; a bare query may carry a raw `?` inside a value.
    let query = match search.split_once('?') {
        Some((prefix, query)) if !prefix.contains(['=', '&']) => query,
        _ => search,
    };
    let query = query.split('#').next().unwrap_or_default();

    let mut state = FilterState::new();
    let mut seen = Vec::new();

    for pair in query.split('&').filter(|pair| !pair.is_empty()) {
        let (name, raw) = pair.split_once('=').unwrap_or((pair, ""));
        let name = decode_component(name);

        let Some(key) = key_for_param(&name) else {
            debug!(param = %name, "Ignoring unknown query parameter");
            continue;
        };
        if seen.contains(&key) {
            continue;
        }
        seen.push(key);

        let value = decode_component(raw);
        if key == FilterKey::SortBy && value.trim().parse::<SortOption>().is_err() {
            debug!(sort = %value, "Ignoring unknown sort key");
            continue;
        }

        state.set(key, from_slug(key, &value).into_owned());
    }

    state
}

/// A listing path with the state's query string attached.
pub fn listing_url(path: &str, state: &FilterState) -> String {
    let query = to_query_string(state);
    if query.is_empty() {
        path.to_string()
    } else {
        format!("{path}?{query}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_serialize_renames_keys_and_slugs_values() {
        let state = FilterState::new()
            .with(FilterKey::JewelryCategory, "Wedding Band")
            .with(FilterKey::Metal, "White Gold")
            .with(FilterKey::PriceRange, "1000-3000")
            .with(FilterKey::SortBy, "price-asc");

        assert_eq!(
            to_query_string(&state),
            "price=1000-3000&category=wedding-band&metal=White%20Gold&sort=price-asc"
        );
    }

    #[test]
    fn test_default_state_has_empty_query() {
        let state = FilterState::new().with(FilterKey::SortBy, "latest");
        assert_eq!(to_query_string(&state), "");
        assert_eq!(listing_url("/jewelry", &state), "/jewelry");
    }

    #[test]
    fn test_listing_url() {
        let state = FilterState::new().with(FilterKey::Shape, "Oval");
        assert_eq!(listing_url("/diamonds", &state), "/diamonds?shape=Oval");
    }

    #[test]
    fn test_parse_public_names_and_aliases() {
        let state = from_query_string("?category=engagement&classification=ladies&carat=1-1.5");

        assert_eq!(state.get(FilterKey::JewelryCategory), "Ring");
        assert_eq!(state.get(FilterKey::JewelryClassification), "Women's");
        assert_eq!(state.get(FilterKey::CaratRange), "1-1.5");
        assert_eq!(state.get(FilterKey::SortBy), "latest");
    }

    #[test]
    fn test_parse_full_url_with_fragment() {
        let state = from_query_string("https://shop.example/diamonds?shape=Round&cut=Ideal#results");
        assert_eq!(
            state,
            FilterState::new()
                .with(FilterKey::Shape, "Round")
                .with(FilterKey::Cut, "Ideal")
        );
    }

    #[test]
    fn test_bare_query_keeps_raw_question_mark_in_value() {
        let state = from_query_string("brand=a?b&color=G");
        assert_eq!(state.get(FilterKey::Brand), "a?b");
        assert_eq!(state.get(FilterKey::Color), "G");

        let state = from_query_string("?brand=a?b");
        assert_eq!(state.get(FilterKey::Brand), "a?b");

        let state = from_query_string("/diamonds?brand=a?b");
        assert_eq!(state.get(FilterKey::Brand), "a?b");
    }

    #[test]
    fn test_unknown_params_and_sorts_are_ignored() {
        let state = from_query_string("utm_source=mail&sort=popularity&color=G&&page=2");
        assert_eq!(state, FilterState::new().with(FilterKey::Color, "G"));
    }

    #[test]
    fn test_first_occurrence_wins() {
        let state = from_query_string("shape=Oval&shape=Round");
        assert_eq!(state.get(FilterKey::Shape), "Oval");
    }

    #[test]
    fn test_empty_values_are_inactive() {
        let state = from_query_string("shape=&cut&sort=latest");
        assert!(state.is_empty());
    }

    #[test]
    fn test_round_trip_with_reserved_characters() {
        let state = FilterState::new()
            .with(FilterKey::JewelryClassification, "Men's")
            .with(FilterKey::Brand, "Smith & Sons")
            .with(FilterKey::StoneType, "Lab Grown+");

        assert_eq!(from_query_string(&to_query_string(&state)), state);
    }
}
