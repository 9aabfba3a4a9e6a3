//! URL synchronization.
//!
//! Listing pages keep their filter state in the query string so filtered
//! views can be bookmarked and shared. Public parameter names and category
//! slugs differ from the internal filter keys and canonical values; the
//! tables for both live here.

mod codec;
mod params;
mod slugs;
mod sync;

pub use codec::{decode_component, encode_component};
pub use params::{key_for_param, param_name};
pub use slugs::{canonical_values, from_slug, to_slug};
pub use sync::{from_query_string, listing_url, to_query_string};
